use std::fs;
use std::path::Path;

use ffhelpers_core::config::Config;
use ffhelpers_core::launch::split_program_name;
use ffhelpers_core::locale::{format_entry, output_path, render};
use ffhelpers_core::{log_debug, log_error, log_info};

use ffhelpers_windows::dialog;
use ffhelpers_windows::locale::{crt, enumerate_locales};
use ffhelpers_windows::shell;

/// Writes every locale the C runtime accepts to a file as
/// `<runtime name> <locale name>` lines.
///
/// The output file is the raw command-line tail, falling back to the
/// configured name.
pub fn execute(config: &Config) -> i32 {
    let command_line = shell::command_line();
    let path = output_path(split_program_name(&command_line), &config.locales.output);

    let locales = match enumerate_locales() {
        Ok(locales) => locales,
        Err(e) => {
            log_error!("locale enumeration failed: {e}");
            Vec::new()
        }
    };

    let mut entries = Vec::with_capacity(locales.len());
    for info in &locales {
        let resolved = crt::resolve(&info.crt_request());
        match format_entry(&resolved, &info.name) {
            Some(entry) => entries.push(entry),
            None => log_debug!("{} rejected by the runtime", info.crt_request()),
        }
    }

    if let Err(e) = write_list(&path, &entries) {
        log_error!("could not write {}: {e}", path.display());
        dialog::message_box("Could not open specified file", "Error");
        return 1;
    }
    log_info!(
        "wrote {} of {} locales to {}",
        entries.len(),
        locales.len(),
        path.display()
    );

    if config.locales.show_current {
        dialog::message_box(&crt::current(), "LC_ALL");
    }
    0
}

fn write_list(path: &Path, entries: &[String]) -> std::io::Result<()> {
    fs::write(path, render(entries))
}
