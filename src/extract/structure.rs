// src/extract/structure.rs
// =============================================================================
// This module extracts candidate parameter names from the structure of a
// parsed HTML document (as opposed to its raw text).
//
// Two sources:
// - The `name` attribute of form fields (input, textarea, select): these are
//   the literal parameter names the page itself submits
// - The `id` attribute of any element: ids frequently mirror backend
//   parameter and field names
//
// Rust concepts:
// - scraper's Selector is a compiled CSS selector; "[id]" means "any element
//   that has an id attribute"
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Extracts candidate parameter names from a parsed document.
///
/// Example:
///   <input name="csrf_token"><div id="main-content">
/// yields {"csrf_token", "main-content"}.
pub fn extract_html_params(document: &Html) -> HashSet<String> {
    let mut params = HashSet::new();

    // Both selectors are constant and known to be valid
    let field_selector = Selector::parse("input[name], textarea[name], select[name]").unwrap();
    let id_selector = Selector::parse("[id]").unwrap();

    for element in document.select(&field_selector) {
        if let Some(name) = element.value().attr("name") {
            if !name.is_empty() {
                params.insert(name.to_string());
            }
        }
    }

    for element in document.select(&id_selector) {
        if let Some(id) = element.value().attr("id") {
            params.insert(id.to_string());
        }
    }

    params
}
