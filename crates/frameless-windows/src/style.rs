use std::mem;

use frameless_core::{Rect, log_debug, log_warn};

use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetWindowLongPtrW, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER, SWP_SHOWWINDOW,
    SetWindowLongPtrW, SetWindowPos, WS_BORDER, WS_CAPTION, WS_MAXIMIZEBOX, WS_MINIMIZEBOX,
    WS_POPUP, WS_SYSMENU, WS_THICKFRAME, WS_VISIBLE,
};

use crate::window::Window;

/// A window's decoration state, decoded from its raw style bitmask.
///
/// Ephemeral: computed inside a mutation call and discarded. Nothing here
/// is written back to the window — writes go through [`borderless_style`].
#[derive(Debug, Clone, Copy)]
pub struct WindowStyleState {
    raw: u32,
}

impl WindowStyleState {
    pub fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn is_popup(&self) -> bool {
        self.raw & WS_POPUP.0 != 0
    }

    pub fn is_visible(&self) -> bool {
        self.raw & WS_VISIBLE.0 != 0
    }

    /// WS_CAPTION is a two-bit combination, so this is an all-bits test
    /// rather than any-bit.
    pub fn has_title_bar(&self) -> bool {
        self.raw & WS_CAPTION.0 == WS_CAPTION.0
    }

    pub fn is_resizable(&self) -> bool {
        self.raw & WS_THICKFRAME.0 != 0
    }

    /// Whether the window still carries decorations worth stripping.
    pub fn has_border(&self) -> bool {
        self.has_title_bar() || self.is_resizable()
    }
}

/// Computes the borderless form of a style bitmask: every decoration bit
/// (title bar, sizing frame, thin border, system menu, minimize/maximize
/// boxes) cleared, popup set.
pub fn borderless_style(raw: u32) -> u32 {
    let decorations = WS_CAPTION.0
        | WS_THICKFRAME.0
        | WS_BORDER.0
        | WS_SYSMENU.0
        | WS_MINIMIZEBOX.0
        | WS_MAXIMIZEBOX.0;
    (raw & !decorations) | WS_POPUP.0
}

/// Strips a window's decorations and stretches it over its monitor.
///
/// The style write only happens when the window still has a border; an
/// already-popup window goes straight to repositioning. The target
/// rectangle is the full bounds of the monitor nearest the window
/// (`rcMonitor`, not the work area — the taskbar must be covered). The
/// reposition keeps Z-order, does not steal activation, forces a
/// non-client recalculation so the new style takes visual effect, and
/// shows the window.
///
/// Fire-and-forget: some games with proprietary window management revert
/// the style asynchronously, and there is no way to detect that here.
pub fn apply_borderless(window: &Window) {
    let hwnd = window.hwnd();

    // SAFETY: style read/write and repositioning on a valid HWND. The
    // window may be destroyed concurrently, in which case the calls fail
    // harmlessly.
    unsafe {
        let raw = GetWindowLongPtrW(hwnd, GWL_STYLE) as u32;
        let state = WindowStyleState::from_raw(raw);

        if state.has_border() {
            let stripped = borderless_style(raw);
            log_debug!("style 0x{:X}: 0x{raw:08X} -> 0x{stripped:08X}", window.raw());
            SetWindowLongPtrW(hwnd, GWL_STYLE, stripped as isize);
        }

        let Some(bounds) = monitor_bounds(window) else {
            log_warn!("no monitor bounds for window 0x{:X}", window.raw());
            return;
        };

        if let Err(e) = SetWindowPos(
            hwnd,
            None,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED | SWP_SHOWWINDOW,
        ) {
            log_warn!("SetWindowPos failed for 0x{:X}: {e}", window.raw());
        }
    }
}

/// Returns the full bounding rectangle of the monitor nearest the window.
fn monitor_bounds(window: &Window) -> Option<Rect> {
    // SAFETY: MonitorFromWindow with MONITOR_DEFAULTTONEAREST always
    // resolves to some monitor; GetMonitorInfoW fills the struct after we
    // set cbSize as required.
    unsafe {
        let monitor = MonitorFromWindow(window.hwnd(), MONITOR_DEFAULTTONEAREST);
        let mut info = MONITORINFO {
            cbSize: mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if !GetMonitorInfoW(monitor, &mut info).as_bool() {
            return None;
        }

        // rcMonitor is the full rectangle; rcWork would exclude the
        // taskbar, leaving a strip of desktop visible.
        let rc = info.rcMonitor;
        Some(Rect::new(
            rc.left,
            rc.top,
            rc.right - rc.left,
            rc.bottom - rc.top,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WS_OVERLAPPEDWINDOW_BITS: u32 = WS_CAPTION.0
        | WS_SYSMENU.0
        | WS_THICKFRAME.0
        | WS_MINIMIZEBOX.0
        | WS_MAXIMIZEBOX.0;

    #[test]
    fn decorated_window_is_detected_as_bordered() {
        let state = WindowStyleState::from_raw(WS_OVERLAPPEDWINDOW_BITS | WS_VISIBLE.0);
        assert!(state.has_border());
        assert!(state.has_title_bar());
        assert!(state.is_resizable());
        assert!(state.is_visible());
        assert!(!state.is_popup());
    }

    #[test]
    fn resizable_frame_alone_counts_as_border() {
        let state = WindowStyleState::from_raw(WS_THICKFRAME.0);
        assert!(state.has_border());
        assert!(!state.has_title_bar());
    }

    #[test]
    fn popup_window_has_no_border() {
        let state = WindowStyleState::from_raw(WS_POPUP.0 | WS_VISIBLE.0);
        assert!(!state.has_border());
        assert!(state.is_popup());
    }

    #[test]
    fn single_caption_bit_is_not_a_title_bar() {
        // WS_CAPTION is WS_BORDER | WS_DLGFRAME; one bit alone must not
        // read as a full title bar.
        let state = WindowStyleState::from_raw(WS_BORDER.0);
        assert!(!state.has_title_bar());
    }

    #[test]
    fn borderless_clears_decorations_and_sets_popup() {
        let stripped = borderless_style(WS_OVERLAPPEDWINDOW_BITS | WS_VISIBLE.0);
        let state = WindowStyleState::from_raw(stripped);

        assert!(state.is_popup());
        assert!(!state.has_border());
        assert_eq!(stripped & WS_CAPTION.0, 0);
        assert_eq!(stripped & WS_THICKFRAME.0, 0);
        assert_eq!(stripped & WS_BORDER.0, 0);
        assert_eq!(stripped & WS_SYSMENU.0, 0);
        assert_eq!(stripped & WS_MINIMIZEBOX.0, 0);
        assert_eq!(stripped & WS_MAXIMIZEBOX.0, 0);
        // Unrelated bits survive the rewrite.
        assert!(state.is_visible());
    }

    #[test]
    fn borderless_is_idempotent() {
        let once = borderless_style(WS_OVERLAPPEDWINDOW_BITS);
        assert_eq!(borderless_style(once), once);
    }
}
