use ffhelpers_core::display::{SERVER_CLASS, SHUTDOWN_MESSAGE};
use ffhelpers_core::{DisplayTarget, HelperResult, is_display_of, log_debug};

use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{FindWindowExW, PostMessageW};
use windows::core::PCWSTR;

use crate::wide::wide;
use crate::window::Window;

/// Finds the display window for `target`, if VcXsrv is serving it.
///
/// Only top-level windows are searched, matching both class and the
/// exact title. The hit is read back before it is trusted: a display
/// that exits between the lookup and the read-back counts as absent.
pub fn find_display(target: &DisplayTarget) -> Option<Window> {
    let class = wide(SERVER_CLASS);
    let title = wide(target.title());

    // SAFETY: both buffers are NUL-terminated and outlive the call.
    let found = unsafe {
        FindWindowExW(
            None,
            None,
            PCWSTR(class.as_ptr()),
            PCWSTR(title.as_ptr()),
        )
    };

    let window = match found {
        Ok(hwnd) if !hwnd.is_invalid() => Window::new(hwnd),
        _ => return None,
    };
    if !is_display_of(&window, target) {
        log_debug!("display window for {} vanished after lookup", target.title());
        return None;
    }
    Some(window)
}

/// Posts the shutdown message to a display window.
///
/// The message is queued, not sent: VcXsrv shuts down on its own thread
/// and this call returns immediately.
pub fn post_shutdown(display: &Window) -> HelperResult<()> {
    // SAFETY: PostMessageW only queues a message; a stale HWND fails cleanly.
    unsafe {
        PostMessageW(
            Some(display.hwnd()),
            SHUTDOWN_MESSAGE,
            WPARAM(0),
            LPARAM(0),
        )?;
    }
    Ok(())
}
