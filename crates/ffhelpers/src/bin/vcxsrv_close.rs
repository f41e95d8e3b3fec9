use clap::Parser;

/// Close the VcXsrv display once FontForge no longer uses it.
#[derive(Parser)]
#[command(
    name = "VcXsrv_close",
    about = "Close the VcXsrv display once no X clients are left",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// `-wait` only waits; anything else closes an idle display.
    /// Only the first word is looked at; the rest is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[cfg(windows)]
fn main() {
    use ffhelpers::commands;
    use ffhelpers_core::CloseMode;

    let cli = Cli::parse();
    let config = ffhelpers::startup("VcXsrv_close");

    let code = match CloseMode::from_arg(cli.args.first().map(String::as_str)) {
        CloseMode::Wait => {
            commands::settle(&config);
            0
        }
        CloseMode::Close => commands::close::execute(&config),
    };
    std::process::exit(code);
}

#[cfg(not(windows))]
fn main() {
    let _ = Cli::parse();
    eprintln!("VcXsrv_close: {}", ffhelpers::UNSUPPORTED);
    std::process::exit(1);
}
