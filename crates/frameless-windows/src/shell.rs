use std::process::Command;
use std::thread;
use std::time::Duration;

use frameless_core::{OsResult, log_info};

use windows::Win32::System::Threading::{OpenProcess, PROCESS_TERMINATE, TerminateProcess};

use crate::scanner;

const SHELL_EXE: &str = "explorer.exe";

/// Terminates and relaunches the shell so the taskbar and desktop icons
/// reposition themselves onto the new primary display.
///
/// This is a fire-and-forget post-action to a successful primary-monitor
/// change. It has its own result so callers can log a failure, but that
/// outcome is never folded into the display operation's status — the
/// display change already succeeded independent of shell cosmetics.
pub fn restart_shell() -> OsResult<()> {
    let pid = scanner::process_id_by_name(SHELL_EXE)
        .ok_or("shell process not found")?;

    // SAFETY: handle opened with the single access right we use and closed
    // immediately after the terminate call.
    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, false, pid)?;
        let result = TerminateProcess(handle, 0);
        let _ = windows::Win32::Foundation::CloseHandle(handle);
        result?;
    }

    // Give the old instance a moment to release the shell's named objects
    // before the new one claims them.
    thread::sleep(Duration::from_millis(500));

    Command::new(SHELL_EXE).spawn()?;
    log_info!("shell restarted (old pid {pid})");
    Ok(())
}
