use ffhelpers_core::config::Config;
use ffhelpers_core::launch::{script_path, split_program_name};
use ffhelpers_core::{HelperResult, log_error, log_info};

/// Runs the launcher script beside this executable with its console
/// hidden, forwarding the raw argument tail.
pub fn execute(config: &Config) -> i32 {
    match launch(config) {
        Ok(()) => 0,
        Err(e) => {
            log_error!("launch failed: {e}");
            ffhelpers_windows::dialog::error_box(&format!("Could not start FontForge: {e}"));
            1
        }
    }
}

fn launch(config: &Config) -> HelperResult<()> {
    let exe = std::env::current_exe()?;
    let script = script_path(&exe, &config.launcher.script)
        .ok_or_else(|| format!("no directory for {}", exe.display()))?;

    let command_line = ffhelpers_windows::shell::command_line();
    let arguments = split_program_name(&command_line);

    log_info!("launching {} with [{arguments}]", script.display());
    ffhelpers_windows::shell::shell_open_hidden(&script, arguments)
}
