use ffhelpers_core::HelperResult;
use ffhelpers_core::locale::{CRT_FALLBACK, LocaleInfo};

use windows::Win32::Foundation::LPARAM;
use windows::Win32::Globalization::{
    EnumSystemLocalesEx, GetLocaleInfoEx, LOCALE_ALL, LOCALE_IDEFAULTANSICODEPAGE,
    LOCALE_RETURN_NUMBER, LOCALE_SENGLISHCOUNTRYNAME, LOCALE_SENGLISHLANGUAGENAME,
};
use windows::core::{BOOL, PCWSTR, PWSTR};

use crate::wide::{from_wide_buf, from_wide_ptr, wide};

/// Enumerates every locale the system knows about.
///
/// The invariant locale (empty name) is skipped.
pub fn enumerate_locales() -> HelperResult<Vec<LocaleInfo>> {
    let mut names: Vec<String> = Vec::new();

    // SAFETY: EnumSystemLocalesEx calls our callback synchronously for each
    // locale; the Vec behind LPARAM outlives the call.
    unsafe {
        EnumSystemLocalesEx(
            Some(enum_locale_callback),
            LOCALE_ALL,
            LPARAM(&mut names as *mut _ as isize),
            None,
        )?;
    }

    Ok(names.iter().map(|name| locale_info(name)).collect())
}

unsafe extern "system" fn enum_locale_callback(name: PWSTR, _flags: u32, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Vec<String> passed by enumerate_locales(), and
    // `name` is a NUL-terminated string owned by the OS for this call.
    let names = unsafe { &mut *(lparam.0 as *mut Vec<String>) };
    let name = unsafe { from_wide_ptr(name.0) };
    if !name.is_empty() {
        names.push(name);
    }
    BOOL(1)
}

fn locale_info(name: &str) -> LocaleInfo {
    let wide_name = wide(name);
    let locale = PCWSTR(wide_name.as_ptr());

    LocaleInfo {
        name: name.to_string(),
        language: locale_string(locale, LOCALE_SENGLISHLANGUAGENAME),
        country: locale_string(locale, LOCALE_SENGLISHCOUNTRYNAME),
        code_page: locale_number(locale, LOCALE_IDEFAULTANSICODEPAGE),
    }
}

fn locale_string(locale: PCWSTR, lctype: u32) -> String {
    let mut buffer = [0u16; 260];
    // SAFETY: `locale` is NUL-terminated; the buffer length is passed along.
    let written = unsafe { GetLocaleInfoEx(locale, lctype, Some(&mut buffer[..])) };
    if written <= 0 {
        return String::new();
    }
    from_wide_buf(&buffer)
}

fn locale_number(locale: PCWSTR, lctype: u32) -> u32 {
    // With LOCALE_RETURN_NUMBER the API writes a DWORD into the buffer,
    // which it measures in UTF-16 units.
    let mut buffer = [0u16; 2];
    // SAFETY: as in locale_string; two u16s hold exactly one DWORD.
    let written =
        unsafe { GetLocaleInfoEx(locale, lctype | LOCALE_RETURN_NUMBER, Some(&mut buffer[..])) };
    if written <= 0 {
        return 0;
    }
    u32::from(buffer[0]) | (u32::from(buffer[1]) << 16)
}

/// Thin wrappers over the C runtime's locale state.
pub mod crt {
    use super::*;

    const LC_ALL: i32 = 0;
    const LC_CTYPE: i32 = 2;

    unsafe extern "C" {
        fn _wsetlocale(category: i32, locale: *const u16) -> *mut u16;
    }

    /// Asks the C runtime what it makes of `request`.
    ///
    /// Returns the runtime's `LC_CTYPE` name after applying `request`, or
    /// `"C"` when it was rejected. The runtime is reset to `"C"` before
    /// returning so one lookup cannot leak into the next.
    pub fn resolve(request: &str) -> String {
        let request = wide(request);
        let c = wide(CRT_FALLBACK);
        // SAFETY: both strings are NUL-terminated. _wsetlocale returns a
        // pointer to runtime-owned storage that we copy before the next call.
        unsafe {
            let _ = _wsetlocale(LC_ALL, request.as_ptr());
            let resolved = from_wide_ptr(_wsetlocale(LC_CTYPE, std::ptr::null()));
            let _ = _wsetlocale(LC_ALL, c.as_ptr());
            resolved
        }
    }

    /// Applies the user's environment locale and returns its `LC_CTYPE` name.
    pub fn current() -> String {
        let empty = wide("");
        // SAFETY: see resolve().
        unsafe {
            let _ = _wsetlocale(LC_ALL, empty.as_ptr());
            from_wide_ptr(_wsetlocale(LC_CTYPE, std::ptr::null()))
        }
    }
}
