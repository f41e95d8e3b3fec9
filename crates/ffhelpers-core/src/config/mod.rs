mod loader;

use serde::{Deserialize, Serialize};

use crate::display::DEFAULT_XPORT;
use crate::launch::DEFAULT_SCRIPT;
use crate::locale::DEFAULT_OUTPUT;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration shared by all helpers.
///
/// Loaded from `~/.config/ffhelpers/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which VcXsrv display to look for and how long to wait around it.
    pub display: DisplayConfig,
    /// What `run_fontforge` launches.
    pub launcher: LauncherConfig,
    /// Where `showlocale` writes and whether it reports the current locale.
    pub locales: LocalesConfig,
    /// File logging.
    pub log: LogConfig,
}

/// Display lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// X display number. `FF_XPORT` overrides it.
    pub port: u16,
    /// Delay in milliseconds around the close sequence.
    pub settle_ms: u64,
}

/// Launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Script file name, resolved next to the launcher executable.
    pub script: String,
}

/// Locale list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Output file used when no path is given on the command line.
    pub output: String,
    /// Show the current runtime locale in a message box afterwards.
    pub show_current: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_XPORT,
            settle_ms: 500,
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            script: DEFAULT_SCRIPT.into(),
        }
    }
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.into(),
            show_current: true,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges and restores defaults for empty names.
    ///
    /// A zero port is not a display; an empty script name would make the
    /// launcher open its own directory.
    pub fn validate(&mut self) {
        if self.display.port == 0 {
            self.display.port = DEFAULT_XPORT;
        }
        self.display.settle_ms = self.display.settle_ms.min(10_000);
        if self.launcher.script.trim().is_empty() {
            self.launcher.script = DEFAULT_SCRIPT.into();
        }
        if self.locales.output.trim().is_empty() {
            self.locales.output = DEFAULT_OUTPUT.into();
        }
        self.log.max_file_mb = self.log.max_file_mb.clamp(1, 100);
    }

    /// Returns the settle delay as a `Duration`.
    pub fn settle_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.display.settle_ms)
    }
}

#[cfg(test)]
mod tests;
