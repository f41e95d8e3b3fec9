use std::path::{Path, PathBuf};

/// Batch script the launcher runs when nothing else is configured.
pub const DEFAULT_SCRIPT: &str = "fontforge.bat";

/// Returns the argument tail of a raw Windows command line.
///
/// Windows hands a process one unparsed string. The program name ends at
/// the closing quote when it starts with `"`, otherwise at the first space
/// or tab; the whitespace after it is skipped. Whatever remains is passed
/// on untouched so the script sees the arguments exactly as typed.
pub fn split_program_name(command_line: &str) -> &str {
    let rest = if let Some(quoted) = command_line.strip_prefix('"') {
        match quoted.find('"') {
            Some(end) => &quoted[end + 1..],
            None => "",
        }
    } else {
        match command_line.find([' ', '\t']) {
            Some(end) => &command_line[end..],
            None => "",
        }
    };
    rest.trim_start_matches([' ', '\t'])
}

/// Returns the path of `script` in the directory holding `exe`.
pub fn script_path(exe: &Path, script: &str) -> Option<PathBuf> {
    let dir = exe.parent()?;
    if dir.as_os_str().is_empty() {
        return None;
    }
    Some(dir.join(script))
}
