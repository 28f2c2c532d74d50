// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// translit-ffi: C-compatible FFI layer for the transliteration engine.
//
// Memory management rules:
// - Every returned string is heap-allocated by Rust; the caller must free it
//   with `translit_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - The engine holds no per-caller state, so no handle is needed and every
//   function may be called from any thread.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

// ── Transliteration ─────────────────────────────────────────────

/// Transliterate Romanian text into Russian Cyrillic.
///
/// Returns NULL if `text` is NULL or not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn translit_to_russian(text: *const c_char) -> *mut c_char {
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&translit_ro::transliterate_to_russian(text))
}

/// Transliterate a single word, without splitting or trimming.
///
/// Returns NULL if `word` is NULL or not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn translit_word(word: *const c_char) -> *mut c_char {
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    str_to_c(&translit_ro::transliterate_word(word))
}

/// Return the per-word rule trace as a JSON array.
///
/// Returns NULL if `text` is NULL or not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn translit_explain_json(text: *const c_char) -> *mut c_char {
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    match serde_json::to_string(&translit_ro::explain(text)) {
        Ok(json) => str_to_c(&json),
        Err(_) => ptr::null_mut(),
    }
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned by any `translit_*` function. NULL is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn translit_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

// Input came from a C string, so it has no interior NUL and neither does the
// output.
fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}
