/// Display enumeration and mode/primary mutation.
pub mod display;

/// Process scanning and game-candidate detection.
pub mod scanner;

/// Best-effort shell (Explorer) restart after a primary-display change.
pub mod shell;

/// Window style mutation: borderless fullscreen.
pub mod style;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

mod wide;

pub use display::{change_resolution, enumerate_displays, set_primary_monitor};
pub use scanner::{find_candidates, try_get_single_game};
pub use style::apply_borderless;
pub use window::Window;
