#![windows_subsystem = "windows"]

use std::ffi::OsString;

use clap::Parser;

/// Start FontForge's batch launcher without a console window.
///
/// Arguments are forwarded to the script exactly as typed, so this parser
/// accepts anything and has no flags of its own.
#[derive(Parser)]
#[command(
    name = "run_fontforge",
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
    let config = ffhelpers::startup("run_fontforge");
    ffhelpers_core::log_debug!("{} argument(s) to forward", cli.args.len());

    std::process::exit(ffhelpers::commands::launch::execute(&config));
}

#[cfg(not(windows))]
fn main() {
    let _ = Cli::parse();
    eprintln!("run_fontforge: {}", ffhelpers::UNSUPPORTED);
    std::process::exit(1);
}
