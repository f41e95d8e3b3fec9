//! Identity of the VcXsrv display window.
//!
//! VcXsrv names its top-level window after the host and the display
//! number it serves, e.g. `VcXsrv Server - Display DESKTOP-1:11.0`.
//! The helpers find it by class and exact title, so both have to be
//! rebuilt here the same way the server builds them.

/// Window class of the VcXsrv display window.
pub const SERVER_CLASS: &str = "VcXsrv/x";

/// Window class of each X client window the server creates.
pub const CLIENT_CLASS: &str = "vcxsrv/x X rl";

/// Display number used when nothing else is configured.
pub const DEFAULT_XPORT: u16 = 11;

/// Environment variable the launcher scripts use to pick the display.
pub const PORT_ENV: &str = "FF_XPORT";

/// Private message VcXsrv treats as "shut down now".
///
/// `WM_USER` is 0x0400; the server listens on `WM_USER + 1002`.
pub const SHUTDOWN_MESSAGE: u32 = 0x0400 + 1002;

/// The display window a helper is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTarget {
    /// DNS host name of this machine. Empty when the lookup failed.
    pub computer_name: String,
    /// X display number (also the TCP port offset).
    pub port: u16,
}

impl DisplayTarget {
    pub fn new(computer_name: impl Into<String>, port: u16) -> Self {
        Self {
            computer_name: computer_name.into(),
            port,
        }
    }

    /// Returns the exact title VcXsrv gives the display window.
    pub fn title(&self) -> String {
        display_title(&self.computer_name, self.port)
    }
}

/// Formats the display window title for the given host and display.
pub fn display_title(computer_name: &str, port: u16) -> String {
    format!("VcXsrv Server - Display {computer_name}:{port}.0")
}

/// Parses a display number.
///
/// The whole value must be a decimal number in `1..=65535`. Leading
/// whitespace and a `+` sign are tolerated; anything trailing is not.
pub fn parse_port(raw: &str) -> Option<u16> {
    let value: i64 = raw.trim_start().parse().ok()?;
    if (1..=65535).contains(&value) {
        u16::try_from(value).ok()
    } else {
        None
    }
}

/// Picks the display number from, in order, the environment value, the
/// configured value, and [`DEFAULT_XPORT`]. Invalid entries are skipped.
pub fn resolve_port(env: Option<&str>, configured: u16) -> u16 {
    if let Some(port) = env.and_then(parse_port) {
        return port;
    }
    if configured != 0 {
        return configured;
    }
    DEFAULT_XPORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_embeds_host_and_display() {
        // Arrange
        let target = DisplayTarget::new("FONTBOX", 11);

        // Act
        let title = target.title();

        // Assert
        assert_eq!(title, "VcXsrv Server - Display FONTBOX:11.0");
    }

    #[test]
    fn title_with_unknown_host_keeps_the_colon() {
        assert_eq!(display_title("", 9), "VcXsrv Server - Display :9.0");
    }

    #[test]
    fn shutdown_message_is_wm_user_offset() {
        assert_eq!(SHUTDOWN_MESSAGE, 2026);
    }

    #[test]
    fn valid_ports_parse() {
        assert_eq!(parse_port("1"), Some(1));
        assert_eq!(parse_port("12"), Some(12));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("  +7"), Some(7));
    }

    #[test]
    fn out_of_range_ports_are_rejected() {
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("-3"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port("99999999999999999999"), None);
    }

    #[test]
    fn garbage_ports_are_rejected() {
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("12abc"), None);
        assert_eq!(parse_port("12 "), None);
        assert_eq!(parse_port("x"), None);
    }

    #[test]
    fn missing_env_and_config_use_default() {
        assert_eq!(resolve_port(None, 0), DEFAULT_XPORT);
        assert_eq!(resolve_port(Some("65536"), 0), DEFAULT_XPORT);
    }

    #[test]
    fn env_port_wins_over_config() {
        assert_eq!(resolve_port(Some("20"), 9), 20);
    }

    #[test]
    fn invalid_env_port_falls_back_to_config() {
        assert_eq!(resolve_port(Some("nope"), 9), 9);
        assert_eq!(resolve_port(None, 9), 9);
    }

    #[test]
    fn zero_config_port_falls_back_to_default() {
        assert_eq!(resolve_port(None, 0), DEFAULT_XPORT);
    }
}
