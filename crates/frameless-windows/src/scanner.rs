use std::collections::HashMap;
use std::mem;
use std::path::PathBuf;

use frameless_core::filters::title_is_presentable;
use frameless_core::{GameCandidate, ScanFilters, log_debug, pick_single};

use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND, LPARAM};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, MODULEENTRY32W, Module32FirstW, Module32NextW, PROCESSENTRY32W,
    Process32FirstW, Process32NextW, TH32CS_SNAPMODULE, TH32CS_SNAPMODULE32, TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION, QueryFullProcessImageNameW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GWL_EXSTYLE, GetWindowLongPtrW, GetWindowThreadProcessId, IsWindowVisible,
    WS_EX_TOOLWINDOW,
};
use windows::core::{BOOL, PWSTR};

use crate::wide::from_wide;
use crate::window::Window;

/// Closes a Win32 handle on drop, so early returns via `?` or filter
/// short-circuits cannot leak snapshots.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: self.0 is a valid handle owned by this guard.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Scans all running processes for game-window candidates.
///
/// Filters run in cheapest-first order and short-circuit: excluded name,
/// main window present, executable outside system and vendor trees, a
/// graphics-API module loaded, non-blank window title. Any OS-level error
/// while inspecting one process (permission denial, process exited
/// mid-scan) skips that process silently; the scan as a whole never fails.
pub fn find_candidates(filters: &ScanFilters) -> Vec<GameCandidate> {
    let main_windows = main_windows_by_pid();
    let mut candidates = Vec::new();

    // SAFETY: the snapshot handle is owned by HandleGuard; PROCESSENTRY32W
    // is stamped with dwSize as the API requires.
    unsafe {
        let Ok(snapshot) = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) else {
            return candidates;
        };
        let _guard = HandleGuard(snapshot);

        let mut entry = PROCESSENTRY32W {
            dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        if Process32FirstW(snapshot, &mut entry).is_err() {
            return candidates;
        }

        loop {
            if let Some(candidate) = inspect_process(&entry, &main_windows, filters) {
                candidates.push(candidate);
            }
            if Process32NextW(snapshot, &mut entry).is_err() {
                break;
            }
        }
    }

    candidates
}

/// Resolves the scan to at most one game.
///
/// With several candidates, the one owning the current foreground window
/// wins; otherwise the first in scan order is returned.
pub fn try_get_single_game(filters: &ScanFilters) -> Option<GameCandidate> {
    let candidates = find_candidates(filters);
    let foreground = Window::foreground().map(|w| w.raw());
    pick_single(candidates, foreground)
}

/// Applies the candidate filters to a single process table entry.
///
/// Returns `None` both for "not a game" and for "could not inspect" — the
/// contract makes no distinction, the process is just absent from results.
fn inspect_process(
    entry: &PROCESSENTRY32W,
    main_windows: &HashMap<u32, usize>,
    filters: &ScanFilters,
) -> Option<GameCandidate> {
    let process_name = from_wide(&entry.szExeFile);
    let pid = entry.th32ProcessID;

    if filters.excludes_name(&process_name) {
        return None;
    }

    let &handle = main_windows.get(&pid)?;

    // Path is optional: permission denials leave it unreadable without
    // disqualifying the process, but a readable path inside a system,
    // packaged-app, or GPU-vendor tree does disqualify it.
    let process_path = query_process_path(pid);
    if let Some(path) = &process_path
        && (filters.is_system_path(path) || filters.is_vendor_path(path))
    {
        return None;
    }

    // The positive signal: the process renders through a GPU API.
    if !has_graphics_module(pid, filters) {
        return None;
    }

    // An unreadable title comes back empty and fails the same filter as
    // a genuinely blank one.
    let window_title = Window::from_raw(handle).title();
    if !title_is_presentable(&window_title) {
        return None;
    }

    log_debug!("candidate: {process_name} (pid {pid}) \"{window_title}\"");

    Some(GameCandidate {
        window_handle: handle,
        process_id: pid,
        process_name,
        process_path,
        window_title: window_title.trim().to_string(),
    })
}

/// Whether the process has loaded any of the configured graphics-API
/// libraries. Snapshot errors count as "no" — the process is skipped.
fn has_graphics_module(pid: u32, filters: &ScanFilters) -> bool {
    // SAFETY: module snapshot handle owned by HandleGuard; MODULEENTRY32W
    // stamped with dwSize. The snapshot can legitimately fail for
    // protected or just-exited processes.
    unsafe {
        let Ok(snapshot) = CreateToolhelp32Snapshot(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid)
        else {
            return false;
        };
        let _guard = HandleGuard(snapshot);

        let mut entry = MODULEENTRY32W {
            dwSize: mem::size_of::<MODULEENTRY32W>() as u32,
            ..Default::default()
        };

        if Module32FirstW(snapshot, &mut entry).is_err() {
            return false;
        }

        loop {
            if filters.is_graphics_module(&from_wide(&entry.szModule)) {
                return true;
            }
            if Module32NextW(snapshot, &mut entry).is_err() {
                return false;
            }
        }
    }
}

/// Reads a process's executable path, if access rights allow.
fn query_process_path(pid: u32) -> Option<PathBuf> {
    // SAFETY: least-privilege open; the handle is closed by the guard.
    // QueryFullProcessImageNameW writes into our buffer and updates len.
    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
        let _guard = HandleGuard(handle);

        let mut buffer = [0u16; 1024];
        let mut len = buffer.len() as u32;
        QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut len,
        )
        .ok()?;

        Some(PathBuf::from(String::from_utf16_lossy(
            &buffer[..len as usize],
        )))
    }
}

/// Maps each process id to its main window handle.
///
/// "Main window" here means the first visible, non-tool top-level window
/// the OS enumerates for that process — the same window the user sees in
/// the taskbar. Processes without one never become candidates.
fn main_windows_by_pid() -> HashMap<u32, usize> {
    let mut map: HashMap<u32, usize> = HashMap::new();

    // SAFETY: EnumWindows runs the callback synchronously on this thread;
    // the map outlives the call and is passed through LPARAM.
    unsafe {
        let _ = EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut map as *mut _ as isize),
        );
    }

    map
}

/// Callback invoked by `EnumWindows` for each top-level window.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the map pointer passed by main_windows_by_pid.
    let map = unsafe { &mut *(lparam.0 as *mut HashMap<u32, usize>) };

    // SAFETY: simple window state queries with a valid HWND.
    unsafe {
        if !IsWindowVisible(hwnd).as_bool() {
            return BOOL(1);
        }
        let ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32;
        if ex_style & WS_EX_TOOLWINDOW.0 != 0 {
            return BOOL(1);
        }

        let mut pid = 0u32;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        if pid != 0 {
            // First enumerated window wins; later ones are secondary.
            map.entry(pid).or_insert(hwnd.0 as usize);
        }
    }

    BOOL(1)
}

/// Finds the first process whose executable name matches, ignoring case.
///
/// Used by the shell-restart post-action to locate Explorer.
pub(crate) fn process_id_by_name(name: &str) -> Option<u32> {
    // SAFETY: same snapshot discipline as find_candidates.
    unsafe {
        let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0).ok()?;
        let _guard = HandleGuard(snapshot);

        let mut entry = PROCESSENTRY32W {
            dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        if Process32FirstW(snapshot, &mut entry).is_err() {
            return None;
        }

        loop {
            if from_wide(&entry.szExeFile).eq_ignore_ascii_case(name) {
                return Some(entry.th32ProcessID);
            }
            if Process32NextW(snapshot, &mut entry).is_err() {
                return None;
            }
        }
    }
}
