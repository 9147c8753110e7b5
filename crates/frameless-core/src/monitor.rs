use std::fmt;

/// A physical display as reported by the OS display-device table.
///
/// Descriptors are rebuilt from scratch on every enumeration call and never
/// cached — displays can be hot-plugged between calls. The OS is the source
/// of truth for every field, including `is_primary`: if the OS reports
/// inconsistent state (e.g. two primaries mid-transition), the descriptor
/// reports exactly that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorDescriptor {
    /// Opaque device name the OS uses to address this display
    /// (e.g. `\\.\DISPLAY1`). Stable for the session.
    pub device_id: String,
    /// Current horizontal resolution in pixels, or -1 if the mode
    /// settings could not be read.
    pub width: i32,
    /// Current vertical resolution in pixels, or -1 if unreadable.
    pub height: i32,
    /// Top-left corner in virtual-desktop coordinates. The primary
    /// display sits at (0, 0) by OS convention.
    pub position_x: i32,
    pub position_y: i32,
    /// Whether the OS marks this display as the primary one.
    pub is_primary: bool,
    /// Raw state bitmask from the device table, kept for diagnostics.
    pub raw_state_flags: u32,
}

/// Outcome of a display mutation operation.
///
/// This is a closed set: every mutation maps its OS result code into one of
/// these variants and nothing else escapes the operation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorStatus {
    /// The change was applied.
    Success,
    /// The OS or driver rejected the change for an unspecified reason.
    Failed,
    /// The requested mode is not supported by the device or driver.
    BadMode,
    /// The change was accepted but takes effect only after a reboot.
    RestartRequired,
    /// The device identifier did not resolve to a current display.
    MonitorNotFound,
}

impl MonitorStatus {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::BadMode => "unsupported mode",
            Self::RestartRequired => "applied, restart required",
            Self::MonitorNotFound => "monitor not found",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_is_success() {
        assert!(MonitorStatus::Success.is_success());
        assert!(!MonitorStatus::Failed.is_success());
        assert!(!MonitorStatus::BadMode.is_success());
        assert!(!MonitorStatus::RestartRequired.is_success());
        assert!(!MonitorStatus::MonitorNotFound.is_success());
    }

    #[test]
    fn status_renders_human_readable() {
        assert_eq!(MonitorStatus::BadMode.to_string(), "unsupported mode");
        assert_eq!(
            MonitorStatus::RestartRequired.to_string(),
            "applied, restart required"
        );
    }
}
