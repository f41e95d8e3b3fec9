//! Win32 side of the FontForge helpers.
//!
//! Everything here is Windows-only; on other targets the crate is empty
//! so the workspace (and its core tests) still builds.

/// Hidden launch of scripts via the shell.
#[cfg(windows)]
pub mod shell;

/// Message box reporting for GUI-subsystem helpers.
#[cfg(windows)]
pub mod dialog;

/// Finding the VcXsrv display window and asking it to shut down.
#[cfg(windows)]
pub mod display;

/// Win32 top-level window enumeration.
#[cfg(windows)]
pub mod enumerate;

/// System locale enumeration and C-runtime locale resolution.
#[cfg(windows)]
pub mod locale;

/// Host information (computer name).
#[cfg(windows)]
pub mod system;

/// Window type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
mod wide;

#[cfg(windows)]
pub use enumerate::enumerate_windows;
#[cfg(windows)]
pub use window::Window;
