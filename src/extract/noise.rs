// src/extract/noise.rs
// =============================================================================
// This module holds the noise-word filter: a fixed table of JavaScript
// keywords, runtime globals, and built-in method names.
//
// Why filter these?
// - Almost every page ships script text, so tokens like `function`, `return`
//   or `push` show up everywhere
// - They are language plumbing, not application-specific identifiers, so they
//   are useless in a parameter wordlist
//
// The check is a case-sensitive exact match: `fetch` is noise, but a custom
// identifier like `Fetch` or `fetchUser` is kept.
//
// Rust concepts:
// - const: Compile-time data baked into the binary
// - LazyLock: Builds the lookup HashSet once, on first use
// =============================================================================

use std::collections::HashSet;
use std::sync::LazyLock;

// JavaScript reserved words and well-known runtime names.
// Grouped roughly by where they come from in the language/runtime.
const JS_RESERVED: &[&str] = &[
    // Language keywords (ECMAScript)
    "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for",
    "function", "if", "import", "in", "instanceof", "let", "new", "return",
    "super", "switch", "this", "throw", "try", "typeof", "var", "void",
    "while", "with", "yield",
    // Future / strict-mode-only keywords
    "enum", "implements", "interface", "package", "private", "protected",
    "public", "static",
    // Literals & types
    "null", "true", "false", "NaN", "Infinity", "undefined", "BigInt",
    // Global functions
    "eval", "isFinite", "isNaN", "parseFloat", "parseInt", "decodeURI",
    "decodeURIComponent", "encodeURI", "encodeURIComponent", "escape",
    "unescape",
    // Console & debug
    "console", "console.log", "console.error", "console.warn", "console.info",
    "console.debug", "console.table", "console.dir", "console.trace",
    // Timers
    "setTimeout", "clearTimeout", "setInterval", "clearInterval",
    "queueMicrotask",
    // Data types / constructors
    "Object", "Function", "Boolean", "Symbol", "Error", "EvalError",
    "RangeError", "ReferenceError", "SyntaxError", "TypeError", "URIError",
    "Number", "Math", "Date", "String", "RegExp", "Array", "Int8Array",
    "Uint8Array", "Uint8ClampedArray", "Int16Array", "Uint16Array",
    "Int32Array", "Uint32Array", "Float32Array", "Float64Array",
    "BigInt64Array", "BigUint64Array", "Map", "Set", "WeakMap", "WeakSet",
    "ArrayBuffer", "SharedArrayBuffer", "Atomics", "DataView", "Promise",
    "Generator", "GeneratorFunction",
    // Reflect & Proxy
    "Reflect", "Proxy",
    // JSON
    "JSON",
    // URL / networking
    "URL", "URLSearchParams", "fetch", "Request", "Response", "Headers",
    "XMLHttpRequest", "WebSocket", "EventSource",
    // DOM (browser globals)
    "window", "document", "navigator", "location", "history", "screen",
    "frames", "self", "parent", "top", "alert", "confirm", "prompt", "open",
    "close", "print", "dispatchEvent", "addEventListener",
    "removeEventListener", "getComputedStyle",
    // BOM / Web APIs
    "localStorage", "sessionStorage", "IndexedDB", "openDatabase",
    "performance", "Worker", "SharedWorker", "ServiceWorker", "caches",
    "Cache", "Notification", "Geolocation", "crypto", "CustomEvent", "Event",
    "MouseEvent", "KeyboardEvent", "TouchEvent", "PointerEvent", "DragEvent",
    "ClipboardEvent", "InputEvent", "StorageEvent",
    // Canvas & multimedia
    "CanvasRenderingContext2D", "WebGLRenderingContext", "AudioContext",
    "HTMLCanvasElement", "HTMLVideoElement", "HTMLAudioElement", "MediaSource",
    "MediaRecorder", "MediaStream", "Image", "ImageData",
    // CSSOM
    "CSS", "CSSRule", "CSSStyleSheet", "CSSStyleRule", "CSSMediaRule",
    // Service & web workers
    "importScripts", "postMessage", "onmessage", "onerror", "skipWaiting",
    "clients", "registration",
    // Intl (internationalization)
    "Intl", "Intl.Collator", "Intl.DateTimeFormat", "Intl.NumberFormat",
    "Intl.PluralRules", "Intl.RelativeTimeFormat", "Intl.ListFormat",
    "Intl.Locale",
    // WebAssembly
    "WebAssembly", "WebAssembly.Module", "WebAssembly.Instance",
    "WebAssembly.Memory", "WebAssembly.Table", "WebAssembly.CompileError",
    "WebAssembly.LinkError", "WebAssembly.RuntimeError",
    // Binary/text helpers
    "atob", "btoa", "TextEncoder", "TextDecoder",
    // Array.prototype methods
    "concat", "copyWithin", "entries", "every", "fill", "filter", "find",
    "findIndex", "flat", "flatMap", "forEach", "includes", "indexOf", "join",
    "keys", "lastIndexOf", "map", "pop", "push", "reduce", "reduceRight",
    "reverse", "shift", "slice", "some", "sort", "splice", "toLocaleString",
    "toString", "unshift", "values", "[@@iterator]",
    // String.prototype methods
    "charAt", "charCodeAt", "codePointAt", "endsWith", "localeCompare",
    "match", "matchAll", "padEnd", "padStart", "repeat", "replace",
    "replaceAll", "search", "split", "startsWith", "substr", "substring",
    "toLocaleLowerCase", "toLocaleUpperCase", "toLowerCase", "toUpperCase",
    "trim", "trimStart", "trimEnd", "valueOf",
    // Object methods & statics
    "assign", "create", "defineProperties", "defineProperty", "freeze",
    "fromEntries", "getOwnPropertyDescriptor", "getOwnPropertyDescriptors",
    "getOwnPropertyNames", "getOwnPropertySymbols", "getPrototypeOf", "is",
    "isExtensible", "isFrozen", "isSealed", "preventExtensions", "seal",
    "setPrototypeOf",
    // Math methods
    "abs", "acos", "acosh", "asin", "asinh", "atan", "atan2", "atanh", "cbrt",
    "ceil", "clz32", "cos", "cosh", "exp", "expm1", "floor", "fround",
    "hypot", "imul", "log", "log1p", "log2", "log10", "max", "min", "pow",
    "random", "round", "sign", "sin", "sinh", "sqrt", "tan", "tanh", "trunc",
    // Number methods & statics
    "isInteger", "isSafeInteger", "toExponential", "toFixed", "toPrecision",
    "EPSILON", "MAX_SAFE_INTEGER", "MIN_SAFE_INTEGER", "MAX_VALUE",
    "MIN_VALUE", "NEGATIVE_INFINITY", "POSITIVE_INFINITY",
    // Promise methods
    "all", "allSettled", "race", "reject", "resolve",
    // Symbol well-knowns
    "Symbol.asyncIterator", "Symbol.hasInstance", "Symbol.isConcatSpreadable",
    "Symbol.iterator", "Symbol.match", "Symbol.matchAll", "Symbol.replace",
    "Symbol.search", "Symbol.species", "Symbol.split", "Symbol.toPrimitive",
    "Symbol.toStringTag", "Symbol.unscopables",
    // Reflect API
    "Reflect.apply", "Reflect.construct", "Reflect.defineProperty",
    "Reflect.deleteProperty", "Reflect.get",
    "Reflect.getOwnPropertyDescriptor", "Reflect.getPrototypeOf",
    "Reflect.has", "Reflect.isExtensible", "Reflect.ownKeys",
    "Reflect.preventExtensions", "Reflect.set", "Reflect.setPrototypeOf",
    // Proxy traps
    "get", "set", "has", "deleteProperty", "apply", "construct", "ownKeys",
    // Generator & async
    "async", "await", "next",
    // DOM element methods
    "getElementById", "getElementsByClassName", "getElementsByTagName",
    "querySelector", "querySelectorAll", "createElement", "createTextNode",
    "appendChild", "removeChild", "replaceChild", "cloneNode", "setAttribute",
    "getAttribute", "removeAttribute", "classList", "style", "innerHTML",
    "textContent",
    // Event handler properties
    "onload", "onclick", "onsubmit", "onkeydown", "onkeyup",
    // Other useful globals
    "matchMedia", "requestAnimationFrame", "cancelAnimationFrame",
    "arguments", "globalThis",
];

// The lookup set, built once on first use.
static NOISE_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| JS_RESERVED.iter().copied().collect());

/// Returns true if `word` is a JavaScript keyword or well-known runtime name.
///
/// Matching is case-sensitive: `fetch` is noise, `Fetch` is not.
pub fn is_noise_word(word: &str) -> bool {
    NOISE_WORDS.contains(word)
}
