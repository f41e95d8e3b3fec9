//! Counting the X client windows a display still hosts.
//!
//! VcXsrv creates one top-level window per X client, all owned by the
//! server process and all sharing [`CLIENT_CLASS`]. The display may only
//! be shut down once that count reaches zero.

use crate::display::{CLIENT_CLASS, SERVER_CLASS};
use crate::{DisplayTarget, Window};

/// What the close helper should do with a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// No display window was found.
    NotRunning,
    /// The display still hosts client windows and must be left alone.
    Busy { clients: usize },
    /// The display is idle and can be told to shut down.
    Close,
}

/// Returns whether `window` is an X client window of the server `server_pid`.
///
/// A window whose class cannot be read is not counted.
pub fn is_client_of<W: Window>(window: &W, server_pid: u32) -> bool {
    if window.process_id() != server_pid {
        return false;
    }
    match window.class() {
        Ok(class) => class == CLIENT_CLASS,
        Err(_) => false,
    }
}

/// Returns whether `window` is the display window of `target`.
///
/// Class and title are compared ignoring ASCII case, the way the Win32
/// lookup compares them (host names differ in case between APIs). A
/// window that can no longer be queried does not match.
pub fn is_display_of<W: Window>(window: &W, target: &DisplayTarget) -> bool {
    let class_matches = window
        .class()
        .is_ok_and(|class| class.eq_ignore_ascii_case(SERVER_CLASS));
    class_matches
        && window
            .title()
            .is_ok_and(|title| title.eq_ignore_ascii_case(&target.title()))
}

/// Counts the client windows owned by `server_pid` among `windows`.
pub fn count_clients<W: Window>(server_pid: u32, windows: &[W]) -> usize {
    windows
        .iter()
        .filter(|w| is_client_of(*w, server_pid))
        .count()
}

/// Decides whether the display window `server` may be closed.
///
/// `windows` is the full set of top-level windows on the desktop.
pub fn decide<W: Window>(server: Option<&W>, windows: &[W]) -> CloseDecision {
    let Some(server) = server else {
        return CloseDecision::NotRunning;
    };
    match count_clients(server.process_id(), windows) {
        0 => CloseDecision::Close,
        clients => CloseDecision::Busy { clients },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HelperResult;

    struct FakeWindow {
        pid: u32,
        class: Option<&'static str>,
        title: &'static str,
    }

    impl Window for FakeWindow {
        fn title(&self) -> HelperResult<String> {
            Ok(self.title.to_string())
        }

        fn class(&self) -> HelperResult<String> {
            self.class
                .map(str::to_string)
                .ok_or_else(|| "window vanished".into())
        }

        fn process_id(&self) -> u32 {
            self.pid
        }
    }

    fn win(pid: u32, class: &'static str) -> FakeWindow {
        FakeWindow {
            pid,
            class: Some(class),
            title: "",
        }
    }

    #[test]
    fn counts_only_clients_of_the_server_process() {
        // Arrange
        let windows = vec![
            win(100, SERVER_CLASS),
            win(100, CLIENT_CLASS),
            win(100, CLIENT_CLASS),
            win(200, CLIENT_CLASS),
            win(100, "Notepad"),
        ];

        // Act
        let count = count_clients(100, &windows);

        // Assert
        assert_eq!(count, 2);
    }

    #[test]
    fn class_match_is_exact() {
        let windows = vec![
            win(100, "vcxsrv/x X r1"),
            win(100, "VCXSRV/X X RL"),
            win(100, "vcxsrv/x X rl "),
        ];

        assert_eq!(count_clients(100, &windows), 0);
    }

    #[test]
    fn unreadable_class_is_not_counted() {
        let windows = vec![FakeWindow {
            pid: 100,
            class: None,
            title: "",
        }];

        assert_eq!(count_clients(100, &windows), 0);
    }

    #[test]
    fn no_display_means_not_running() {
        let windows = vec![win(100, CLIENT_CLASS)];

        assert_eq!(decide(None, &windows), CloseDecision::NotRunning);
    }

    #[test]
    fn display_with_clients_is_busy() {
        // Arrange
        let server = win(100, SERVER_CLASS);
        let windows = vec![win(100, SERVER_CLASS), win(100, CLIENT_CLASS)];

        // Act
        let decision = decide(Some(&server), &windows);

        // Assert
        assert_eq!(decision, CloseDecision::Busy { clients: 1 });
    }

    #[test]
    fn idle_display_can_close() {
        // Arrange
        let server = win(100, SERVER_CLASS);
        let windows = vec![
            win(100, SERVER_CLASS),
            win(300, CLIENT_CLASS),
            win(400, "ConsoleWindowClass"),
        ];

        // Act
        let decision = decide(Some(&server), &windows);

        // Assert
        assert_eq!(decision, CloseDecision::Close);
    }

    #[test]
    fn empty_desktop_can_close() {
        let server = win(100, SERVER_CLASS);
        let windows: Vec<FakeWindow> = Vec::new();

        assert_eq!(decide(Some(&server), &windows), CloseDecision::Close);
    }

    #[test]
    fn display_matches_on_class_and_title() {
        // Arrange
        let target = DisplayTarget::new("FONTBOX", 11);
        let display = FakeWindow {
            pid: 100,
            class: Some(SERVER_CLASS),
            title: "VcXsrv Server - Display FONTBOX:11.0",
        };

        // Act / Assert
        assert!(is_display_of(&display, &target));
    }

    #[test]
    fn other_display_number_does_not_match() {
        let target = DisplayTarget::new("FONTBOX", 11);
        let display = FakeWindow {
            pid: 100,
            class: Some(SERVER_CLASS),
            title: "VcXsrv Server - Display FONTBOX:0.0",
        };

        assert!(!is_display_of(&display, &target));
    }

    #[test]
    fn host_name_case_is_ignored() {
        let target = DisplayTarget::new("fontbox", 11);
        let display = FakeWindow {
            pid: 100,
            class: Some(SERVER_CLASS),
            title: "VcXsrv Server - Display FONTBOX:11.0",
        };

        assert!(is_display_of(&display, &target));
    }

    #[test]
    fn matching_title_with_wrong_class_does_not_match() {
        let target = DisplayTarget::new("FONTBOX", 11);
        let impostor = FakeWindow {
            pid: 100,
            class: Some("Notepad"),
            title: "VcXsrv Server - Display FONTBOX:11.0",
        };
        let vanished = FakeWindow {
            pid: 100,
            class: None,
            title: "VcXsrv Server - Display FONTBOX:11.0",
        };

        assert!(!is_display_of(&impostor, &target));
        assert!(!is_display_of(&vanished, &target));
    }
}
