use std::path::Path;

use ffhelpers_core::HelperResult;

use windows::Win32::System::Environment::GetCommandLineW;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_HIDE;
use windows::core::{PCWSTR, w};

use crate::wide::{from_wide_ptr, wide};

/// Returns this process's raw, unparsed command line.
///
/// `std::env::args` would split and unquote it; the launcher needs the
/// original text to forward arguments exactly.
pub fn command_line() -> String {
    // SAFETY: GetCommandLineW returns a pointer into process memory that
    // is valid and NUL-terminated for the life of the process.
    unsafe { from_wide_ptr(GetCommandLineW().0) }
}

/// Opens `file` through the shell with its window hidden.
///
/// For a `.bat` this starts `cmd.exe` without a visible console.
/// `parameters` is passed verbatim; an empty string passes none.
pub fn shell_open_hidden(file: &Path, parameters: &str) -> HelperResult<()> {
    let file_w = wide(file);
    let params_w = wide(parameters);
    let params = if parameters.is_empty() {
        PCWSTR::null()
    } else {
        PCWSTR(params_w.as_ptr())
    };

    // SAFETY: every string is NUL-terminated and outlives the call.
    let instance = unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            PCWSTR(file_w.as_ptr()),
            params,
            PCWSTR::null(),
            SW_HIDE,
        )
    };

    // ShellExecuteW reports success with a value greater than 32.
    let code = instance.0 as isize;
    if code <= 32 {
        return Err(format!("ShellExecute failed for {} (code {code})", file.display()).into());
    }
    Ok(())
}
