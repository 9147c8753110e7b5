use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle — a number that identifies a window to the
/// OS. This struct holds that handle and queries the OS lazily for
/// metadata.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized
    /// integer), as carried by `GameCandidate`.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the handle as a pointer-sized integer.
    pub fn raw(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns the window currently receiving user input focus, if any.
    pub fn foreground() -> Option<Window> {
        // SAFETY: GetForegroundWindow is a simple query; it returns a null
        // HWND when no window has focus (e.g. mid switch, locked session).
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.0.is_null() {
            return None;
        }
        Some(Window::new(hwnd))
    }

    /// Returns the window title.
    ///
    /// The Win32 text APIs report "no title", "unreadable" (hung or
    /// destroyed window), and "empty title" all as zero length, so those
    /// collapse to an empty string here. The scanner's blank-title filter
    /// rejects all of them the same way.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with a valid HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    /// Returns whether the window is currently visible.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_window_reads_as_empty_title() {
        // The text APIs report zero length for a handle that resolves to
        // nothing; the scanner then drops it at the blank-title filter.
        let window = Window::from_raw(0);
        assert_eq!(window.title(), "");
        assert!(!window.is_visible());
    }

    #[test]
    fn raw_round_trips_through_the_handle() {
        let window = Window::from_raw(0x4242);
        assert_eq!(window.raw(), 0x4242);
    }
}
