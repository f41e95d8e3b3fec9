use clap::Parser;

/// Probe or close the VcXsrv display used by FontForge.
#[derive(Parser)]
#[command(
    name = "VcXsrv_util",
    about = "Probe or close the VcXsrv display used by FontForge",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// `-exists` (exit 0 if the display is up, 1 if not) or `-close`
    /// (shut it down once no X clients are left). Anything else just waits.
    /// Only the first word is looked at; the rest is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[cfg(windows)]
fn main() {
    use ffhelpers::commands;
    use ffhelpers_core::UtilMode;

    let cli = Cli::parse();
    let config = ffhelpers::startup("VcXsrv_util");

    let code = match UtilMode::from_arg(cli.args.first().map(String::as_str)) {
        UtilMode::Exists => commands::exists::execute(&config),
        UtilMode::Close => commands::close::execute(&config),
        UtilMode::Settle => {
            commands::settle(&config);
            0
        }
    };
    std::process::exit(code);
}

#[cfg(not(windows))]
fn main() {
    let _ = Cli::parse();
    eprintln!("VcXsrv_util: {}", ffhelpers::UNSUPPORTED);
    std::process::exit(1);
}
