use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

/// Encodes a string as a NUL-terminated UTF-16 buffer for `PCWSTR` params.
pub(crate) fn wide(s: impl AsRef<OsStr>) -> Vec<u16> {
    s.as_ref().encode_wide().chain(std::iter::once(0)).collect()
}

/// Decodes a NUL-terminated UTF-16 string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated UTF-16 string that
/// stays valid for the duration of the call.
pub(crate) unsafe fn from_wide_ptr(ptr: *const u16) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let mut len = 0;
    // SAFETY: the caller guarantees a terminating NUL.
    unsafe {
        while *ptr.add(len) != 0 {
            len += 1;
        }
        String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len))
    }
}

/// Decodes a UTF-16 buffer up to its first NUL (or its end).
pub(crate) fn from_wide_buf(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}
