use windows::Win32::System::SystemInformation::{ComputerNameDnsHostname, GetComputerNameExW};
use windows::core::PWSTR;

/// Returns the DNS host name of this machine.
///
/// VcXsrv embeds the same name in its window title. A failed lookup
/// yields an empty string, which still produces a usable title.
pub fn computer_name() -> String {
    let mut buffer = [0u16; 256];
    let mut size = buffer.len() as u32;

    // SAFETY: `size` holds the buffer capacity in characters; on success
    // it is updated to the length written, excluding the NUL.
    let result = unsafe {
        GetComputerNameExW(
            ComputerNameDnsHostname,
            Some(PWSTR(buffer.as_mut_ptr())),
            &mut size,
        )
    };

    match result {
        Ok(()) => String::from_utf16_lossy(&buffer[..size as usize]),
        Err(e) => {
            ffhelpers_core::log_warn!("computer name lookup failed: {e}");
            String::new()
        }
    }
}
