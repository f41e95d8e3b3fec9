use windows::Win32::UI::WindowsAndMessaging::{
    MB_ICONERROR, MB_OK, MESSAGEBOX_STYLE, MessageBoxW,
};
use windows::core::PCWSTR;

use crate::wide::wide;

/// Shows a modal message box with an OK button.
pub fn message_box(text: &str, caption: &str) {
    show(text, caption, MB_OK);
}

/// Shows an error message box. GUI-subsystem helpers have no console,
/// so this is the only way they can tell the user something failed.
pub fn error_box(text: &str) {
    show(text, "Error", MB_OK | MB_ICONERROR);
}

fn show(text: &str, caption: &str, style: MESSAGEBOX_STYLE) {
    let text = wide(text);
    let caption = wide(caption);
    // SAFETY: both strings are NUL-terminated and outlive the call.
    unsafe {
        let _ = MessageBoxW(
            None,
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            style,
        );
    }
}
