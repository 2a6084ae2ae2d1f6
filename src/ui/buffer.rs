//! Leak-free text reads from an FLTK `TextBuffer`.
//!
//! `TextBuffer::text()` and `selection_text()` in fltk-rs copy the
//! `malloc()`'d C string FLTK returns but never free it. The editor reads the
//! full text on every change, so these go through the C API directly and
//! release the copy.

use fltk::text::TextBuffer;

unsafe extern "C" {
    fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
    fn Fl_Text_Buffer_selection_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
    fn free(ptr: *mut std::ffi::c_void);
}

/// Copy a malloc'd C string into a `String` and free it.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated string allocated with `malloc`
/// that nothing else will free.
unsafe fn take_c_string(ptr: *mut std::ffi::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let result = unsafe { std::ffi::CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned();
    // SAFETY: allocated by FLTK with malloc, ownership was handed to us.
    unsafe { free(ptr as *mut std::ffi::c_void) };
    result
}

pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    // SAFETY: `as_ptr` is the live Fl_Text_Buffer behind `buf`; FLTK returns
    // a fresh malloc'd copy of its contents.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        take_c_string(Fl_Text_Buffer_text(inner))
    }
}

pub fn selection_text_no_leak(buf: &TextBuffer) -> String {
    // SAFETY: as above; an empty selection yields an empty malloc'd string.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        take_c_string(Fl_Text_Buffer_selection_text(inner))
    }
}
