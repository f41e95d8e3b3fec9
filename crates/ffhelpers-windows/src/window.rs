use ffhelpers_core::HelperResult;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetClassNameW, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle that identifies a window to the OS.
/// This struct holds that handle and queries the OS lazily for metadata.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl ffhelpers_core::Window for Window {
    fn title(&self) -> HelperResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window text
        // without modifying state. A stale HWND just yields 0.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn class(&self) -> HelperResult<String> {
        // SAFETY: GetClassNameW copies the class name into our buffer.
        // 256 is the maximum class name length in Win32.
        let mut buffer = [0u16; 256];
        let length = unsafe { GetClassNameW(self.hwnd, &mut buffer) };
        if length <= 0 {
            return Err(windows::core::Error::from_win32().into());
        }
        Ok(String::from_utf16_lossy(&buffer[..length as usize]))
    }

    fn process_id(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes the owning PID into `pid`.
        unsafe { GetWindowThreadProcessId(self.hwnd, Some(&mut pid as *mut u32)) };
        pid
    }
}
