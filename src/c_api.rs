// C boundary for hosts that serve the HTTP layer. Every returned string is
// owned by Rust and must be released with `paleo_free_string`.
use crate::core::engine::PaleoEngine;
use crate::core::types::ScriptMode;
use libc::c_char;
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn required<'a>(ptr: *const c_char) -> Option<&'a str> {
    read_str(ptr).filter(|s| !s.trim().is_empty())
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

fn error_json(message: &str) -> String {
    serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string())
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json(&e.to_string()))
}

/// Runs `f` and turns a panic into an error body instead of unwinding into C.
fn guarded<F: FnOnce() -> String>(name: &str, f: F) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!(function = name, "panic caught at the C boundary");
        error_json("internal error")
    });
    into_c_string(json)
}

fn mode_from(ptr: *const c_char) -> Option<ScriptMode> {
    match read_str(ptr) {
        None => Some(ScriptMode::Hebrew),
        Some(s) => s.parse().ok(),
    }
}

/// `{"hebrew", "paleo", "pronunciation"}` for Hebrew text.
#[no_mangle]
pub extern "C" fn paleo_convert(text: *const c_char) -> *mut c_char {
    let text = required(text);
    guarded("paleo_convert", || match text {
        Some(text) => to_json(&PaleoEngine::new().convert(text)),
        None => error_json("Hebrew text is required"),
    })
}

/// Ancient pronunciation as a JSON string. `mode` is "hebrew" (default when
/// null) or "paleo".
#[no_mangle]
pub extern "C" fn paleo_transliterate(text: *const c_char, mode: *const c_char) -> *mut c_char {
    let text = required(text);
    let mode = mode_from(mode);
    guarded("paleo_transliterate", || match (text, mode) {
        (None, _) => error_json("Text is required"),
        (_, None) => error_json("Mode must be 'hebrew' or 'paleo'"),
        (Some(text), Some(mode)) => {
            to_json(&PaleoEngine::new().pronouncer.transliterate(text, mode))
        }
    })
}

/// Speech-ready pronunciation as a JSON string.
#[no_mangle]
pub extern "C" fn paleo_tts(text: *const c_char, mode: *const c_char) -> *mut c_char {
    let text = required(text);
    let mode = mode_from(mode);
    guarded("paleo_tts", || match (text, mode) {
        (None, _) => error_json("Text is required"),
        (_, None) => error_json("Mode must be 'hebrew' or 'paleo'"),
        (Some(text), Some(mode)) => to_json(&PaleoEngine::new().pronouncer.tts_text(text, mode)),
    })
}

/// Letter-by-letter analysis of a Paleo word, or `null` when no letter is
/// recognized.
#[no_mangle]
pub extern "C" fn paleo_analyze(word: *const c_char) -> *mut c_char {
    let word = required(word);
    guarded("paleo_analyze", || match word {
        Some(word) => to_json(&PaleoEngine::new().analyze_word(word)),
        None => error_json("Paleo Hebrew word is required"),
    })
}

#[no_mangle]
pub extern "C" fn paleo_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
