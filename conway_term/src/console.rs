// console.rs - Terminal preparation for the ANSI render stream

/// Turns on escape-sequence processing for stdout on Windows consoles.
/// Other platforms interpret ANSI sequences already.
#[cfg(windows)]
pub fn enable_ansi() {
    use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::GetStdHandle;
    use winapi::um::winbase::STD_OUTPUT_HANDLE;
    use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

    // SAFETY: queries and updates the mode of this process's own stdout handle.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            log::warn!("no console attached to stdout, frames may show raw escapes");
            return;
        }
        let mut mode = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            log::debug!("stdout is not a console, leaving mode alone");
            return;
        }
        if SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) == 0 {
            log::warn!("could not enable virtual terminal processing");
        }
    }
}

#[cfg(not(windows))]
pub fn enable_ansi() {}
