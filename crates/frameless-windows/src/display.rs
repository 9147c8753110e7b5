use std::mem;

use frameless_core::{MonitorDescriptor, MonitorStatus, log_info, log_warn};

use windows::Win32::Foundation::POINTL;
use windows::Win32::Graphics::Gdi::{
    CDS_GLOBAL, CDS_SET_PRIMARY, CDS_UPDATEREGISTRY, ChangeDisplaySettingsExW, DEVMODEW,
    DISP_CHANGE, DISP_CHANGE_BADMODE, DISP_CHANGE_RESTART, DISP_CHANGE_SUCCESSFUL,
    DISPLAY_DEVICE_ACTIVE, DISPLAY_DEVICE_PRIMARY_DEVICE, DISPLAY_DEVICEW, DM_PELSHEIGHT,
    DM_PELSWIDTH, DM_POSITION, ENUM_CURRENT_SETTINGS, EnumDisplayDevicesW, EnumDisplaySettingsW,
};
use windows::core::PCWSTR;

use crate::shell;
use crate::wide::{from_wide, to_wide};

/// Enumerates all active physical displays.
///
/// Walks the OS display-device table from slot 0 until the query reports no
/// device at the next index. Inactive entries (mirror drivers, detached
/// outputs) are dropped. For each active device the current mode settings
/// are read for resolution and position; when that secondary read fails the
/// device is still reported, with a -1 resolution sentinel and whatever
/// position the zeroed mode struct held.
///
/// Results are in OS enumeration order and rebuilt fresh on every call —
/// displays can be hot-plugged between calls, so nothing is cached.
pub fn enumerate_displays() -> Vec<MonitorDescriptor> {
    let mut displays = Vec::new();

    for index in 0.. {
        let mut device = DISPLAY_DEVICEW {
            cb: mem::size_of::<DISPLAY_DEVICEW>() as u32,
            ..Default::default()
        };

        // SAFETY: EnumDisplayDevicesW fills the struct for the device at
        // the given slot. We set cb as required by the API. A FALSE return
        // means there is no device at this slot, which terminates the walk.
        let found = unsafe { EnumDisplayDevicesW(PCWSTR::null(), index, &mut device, 0) };
        if !found.as_bool() {
            break;
        }

        if device.StateFlags & DISPLAY_DEVICE_ACTIVE == 0 {
            continue;
        }

        let device_id = from_wide(&device.DeviceName);
        let wide_name = to_wide(&device_id);

        let mode = read_current_mode(&wide_name).map(|mode| {
            // SAFETY: for display devices the Anonymous2 arm of the
            // DEVMODEW union is the active one; dmPosition is valid
            // after a successful ENUM_CURRENT_SETTINGS query.
            let pos = unsafe { mode.Anonymous1.Anonymous2.dmPosition };
            (mode.dmPelsWidth, mode.dmPelsHeight, pos.x, pos.y)
        });

        displays.push(descriptor_from(device_id, device.StateFlags, mode));
    }

    displays
}

/// Builds a descriptor from raw device-table state and an optional mode
/// read, `(width, height, x, y)`.
///
/// `None` means the settings query failed: the device is still reported,
/// with the -1 resolution sentinel and the position a zeroed mode struct
/// holds. State flags pass through untouched — the OS is the source of
/// truth, so even inconsistent input (say, two devices both flagged
/// primary mid-transition) comes back exactly as reported.
fn descriptor_from(
    device_id: String,
    state_flags: u32,
    mode: Option<(u32, u32, i32, i32)>,
) -> MonitorDescriptor {
    let (width, height, position_x, position_y) = match mode {
        Some((w, h, x, y)) => (w as i32, h as i32, x, y),
        None => (-1, -1, 0, 0),
    };

    MonitorDescriptor {
        device_id,
        width,
        height,
        position_x,
        position_y,
        is_primary: state_flags & DISPLAY_DEVICE_PRIMARY_DEVICE != 0,
        raw_state_flags: state_flags,
    }
}

/// Changes a display's resolution, leaving every other mode field alone.
///
/// Only the width/height fields are marked as changing in the mode record's
/// field-selector mask; refresh rate, color depth, and position keep their
/// currently-reported values without being flagged, so the driver does not
/// reset them as a side effect. The change is applied globally (all
/// sessions), persisted to the registry.
///
/// Single-shot: transient driver busy-states surface as `Failed` and the
/// caller may retry.
pub fn change_resolution(device_id: &str, width: u32, height: u32) -> MonitorStatus {
    if width == 0 || height == 0 {
        return MonitorStatus::BadMode;
    }

    let wide_name = to_wide(device_id);
    let Some(mut mode) = read_current_mode(&wide_name) else {
        // Could not read current settings; do not attempt a blind write.
        return MonitorStatus::Failed;
    };

    mode.dmPelsWidth = width;
    mode.dmPelsHeight = height;
    mode.dmFields = DM_PELSWIDTH | DM_PELSHEIGHT;

    // SAFETY: the mode struct was stamped with dmSize and filled by the
    // settings read above; the device name buffer outlives the call.
    let result = unsafe {
        ChangeDisplaySettingsExW(
            PCWSTR(wide_name.as_ptr()),
            Some(&raw const mode),
            None,
            CDS_UPDATEREGISTRY | CDS_GLOBAL,
            None,
        )
    };

    let status = map_change_result(result);
    log_info!("change_resolution {device_id} -> {width}x{height}: {status}");
    status
}

/// Promotes a display to primary.
///
/// The OS convention is that the primary display's origin is the
/// virtual-desktop origin, so this writes position (0, 0) with only the
/// position field flagged as changing, requesting registry persistence and
/// primary promotion together.
///
/// An unresolvable device id returns `MonitorNotFound` — the id itself was
/// invalid, distinct from the driver rejecting a change (`Failed`).
///
/// On success Explorer is restarted so the taskbar follows the new primary
/// display. That post-action is best-effort: its failure is logged and
/// dropped, never merged into the returned status — the display change
/// itself already succeeded.
pub fn set_primary_monitor(device_id: &str) -> MonitorStatus {
    let wide_name = to_wide(device_id);
    let Some(mut mode) = read_current_mode(&wide_name) else {
        return MonitorStatus::MonitorNotFound;
    };

    // SAFETY: writing the display arm of the DEVMODEW union; dmFields
    // below declares dmPosition as the only field the driver should read.
    unsafe {
        mode.Anonymous1.Anonymous2.dmPosition = POINTL { x: 0, y: 0 };
    }
    mode.dmFields = DM_POSITION;

    // SAFETY: same contract as in change_resolution.
    let result = unsafe {
        ChangeDisplaySettingsExW(
            PCWSTR(wide_name.as_ptr()),
            Some(&raw const mode),
            None,
            CDS_SET_PRIMARY | CDS_UPDATEREGISTRY,
            None,
        )
    };

    if result != DISP_CHANGE_SUCCESSFUL {
        log_warn!("set_primary_monitor {device_id}: rejected ({})", result.0);
        return MonitorStatus::Failed;
    }

    log_info!("set_primary_monitor {device_id}: success, restarting shell");
    if let Err(e) = shell::restart_shell() {
        log_warn!("shell restart after primary change failed: {e}");
    }

    MonitorStatus::Success
}

/// Reads a device's current mode settings, stamping `dmSize` first.
fn read_current_mode(device_name: &[u16]) -> Option<DEVMODEW> {
    let mut mode = DEVMODEW {
        dmSize: mem::size_of::<DEVMODEW>() as u16,
        ..Default::default()
    };

    // SAFETY: EnumDisplaySettingsW fills the DEVMODEW struct with the
    // device's current settings. FALSE means the name did not resolve.
    let ok = unsafe {
        EnumDisplaySettingsW(
            PCWSTR(device_name.as_ptr()),
            ENUM_CURRENT_SETTINGS,
            &mut mode,
        )
    };

    ok.as_bool().then_some(mode)
}

/// Maps a raw `ChangeDisplaySettingsExW` result code onto the closed
/// status set: 0 success, 1 restart required, -2 bad mode, anything else
/// an unspecified failure.
fn map_change_result(code: DISP_CHANGE) -> MonitorStatus {
    match code {
        DISP_CHANGE_SUCCESSFUL => MonitorStatus::Success,
        DISP_CHANGE_RESTART => MonitorStatus::RestartRequired,
        DISP_CHANGE_BADMODE => MonitorStatus::BadMode,
        _ => MonitorStatus::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Graphics::Gdi::{
        DISP_CHANGE_BADDUALVIEW, DISP_CHANGE_BADFLAGS, DISP_CHANGE_BADPARAM, DISP_CHANGE_FAILED,
        DISP_CHANGE_NOTUPDATED,
    };

    #[test]
    fn result_code_mapping_matches_contract() {
        assert_eq!(
            map_change_result(DISP_CHANGE_SUCCESSFUL),
            MonitorStatus::Success
        );
        assert_eq!(
            map_change_result(DISP_CHANGE_RESTART),
            MonitorStatus::RestartRequired
        );
        assert_eq!(map_change_result(DISP_CHANGE_BADMODE), MonitorStatus::BadMode);
    }

    #[test]
    fn all_other_codes_collapse_to_failed() {
        for code in [
            DISP_CHANGE_FAILED,
            DISP_CHANGE_BADPARAM,
            DISP_CHANGE_BADFLAGS,
            DISP_CHANGE_NOTUPDATED,
            DISP_CHANGE_BADDUALVIEW,
            DISP_CHANGE(42),
        ] {
            assert_eq!(map_change_result(code), MonitorStatus::Failed);
        }
    }

    #[test]
    fn dual_primary_device_state_is_reported_verbatim() {
        // A display switch mid-transition can leave the OS reporting two
        // primaries. The enumerator performs no dedup or correction.
        let flags = DISPLAY_DEVICE_ACTIVE | DISPLAY_DEVICE_PRIMARY_DEVICE;
        let first = descriptor_from(r"\\.\DISPLAY1".into(), flags, Some((1920, 1080, 0, 0)));
        let second = descriptor_from(r"\\.\DISPLAY2".into(), flags, Some((1920, 1080, 1920, 0)));

        assert!(first.is_primary);
        assert!(second.is_primary);
        assert_eq!(first.raw_state_flags, flags);
        assert_eq!(second.raw_state_flags, flags);
        assert_eq!((second.position_x, second.position_y), (1920, 0));
    }

    #[test]
    fn failed_mode_read_keeps_device_with_sentinel_resolution() {
        let d = descriptor_from(r"\\.\DISPLAY1".into(), DISPLAY_DEVICE_ACTIVE, None);

        assert_eq!((d.width, d.height), (-1, -1));
        assert_eq!((d.position_x, d.position_y), (0, 0));
        assert!(!d.is_primary);
        assert_eq!(d.device_id, r"\\.\DISPLAY1");
    }

    #[test]
    fn successful_mode_read_fills_resolution_and_position() {
        let d = descriptor_from(
            r"\\.\DISPLAY2".into(),
            DISPLAY_DEVICE_ACTIVE,
            Some((2560, 1440, -2560, 0)),
        );

        assert_eq!((d.width, d.height), (2560, 1440));
        assert_eq!((d.position_x, d.position_y), (-2560, 0));
    }

    #[test]
    fn zero_dimensions_are_rejected_before_any_os_call() {
        assert_eq!(
            change_resolution(r"\\.\DISPLAY1", 0, 1080),
            MonitorStatus::BadMode
        );
        assert_eq!(
            change_resolution(r"\\.\DISPLAY1", 1920, 0),
            MonitorStatus::BadMode
        );
    }
}
