#![windows_subsystem = "windows"]

use std::ffi::OsString;

use clap::Parser;

/// Write the locales the C runtime supports to a file.
///
/// The output path is the raw command-line tail, spaces and all, so this
/// parser accepts anything and has no flags of its own.
#[derive(Parser)]
#[command(
    name = "showlocale",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

#[cfg(windows)]
fn main() {
    let cli = Cli::parse();
    let config = ffhelpers::startup("showlocale");
    ffhelpers_core::log_debug!("{} command-line word(s)", cli.args.len());

    std::process::exit(ffhelpers::commands::locales::execute(&config));
}

#[cfg(not(windows))]
fn main() {
    let _ = Cli::parse();
    eprintln!("showlocale: {}", ffhelpers::UNSUPPORTED);
    std::process::exit(1);
}
