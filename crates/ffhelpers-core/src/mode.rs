//! Argument modes of the VcXsrv helpers.
//!
//! The distribution's batch scripts pass single-dash words (`-exists`,
//! `-close`, `-wait`) as the first argument. Only that first argument
//! is inspected and it must match exactly.

/// Mode of `VcXsrv_util`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilMode {
    /// Report through the exit code whether the display window exists.
    Exists,
    /// Close the display if it has no client windows left.
    Close,
    /// Wait for the settle delay and exit.
    Settle,
}

impl UtilMode {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("-exists") => Self::Exists,
            Some("-close") => Self::Close,
            _ => Self::Settle,
        }
    }
}

/// Mode of `VcXsrv_close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseMode {
    /// Only wait for the settle delay.
    Wait,
    /// Close the display if it has no client windows left.
    Close,
}

impl CloseMode {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("-wait") => Self::Wait,
            _ => Self::Close,
        }
    }
}

/// Exit code for an existence probe.
///
/// 0 means "exists", the reverse of a boolean, so batch scripts can use
/// `if errorlevel 1`.
pub fn exists_exit_code(exists: bool) -> i32 {
    if exists { 0 } else { 1 }
}
