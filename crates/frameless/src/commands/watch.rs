use std::sync::Arc;
use std::thread;
use std::time::Duration;

use frameless_core::{GameSlot, ScanFilters, log_info};
use frameless_windows::Window;

/// Runs the polling loop until interrupted.
///
/// A background thread rescans for the game on a period and publishes into
/// the shared slot; the slot only changes when the observed game's identity
/// (window title) differs. The foreground loop reads the slot on each
/// iteration and re-applies borderless when the game changed. All display
/// and window mutations stay on the foreground thread — the scanner thread
/// only observes.
pub fn execute(filters: ScanFilters, interval_secs: u64) {
    let slot = Arc::new(GameSlot::new());
    let interval = Duration::from_secs(interval_secs.max(1));

    let scanner_slot = Arc::clone(&slot);
    thread::spawn(move || {
        loop {
            let observed = frameless_windows::try_get_single_game(&filters);
            if scanner_slot.publish(observed) {
                match scanner_slot.current() {
                    Some(game) => log_info!("detected game: \"{}\"", game.window_title),
                    None => log_info!("game went away"),
                }
            }
            thread::sleep(interval);
        }
    });

    println!("watching for a game every {}s (Ctrl+C to stop)", interval.as_secs());

    let mut applied: Option<String> = None;
    loop {
        match slot.current() {
            Some(game) => {
                if applied.as_deref() != Some(game.window_title.as_str()) {
                    println!("applying borderless to \"{}\"", game.window_title);
                    frameless_windows::apply_borderless(&Window::from_raw(game.window_handle));
                    applied = Some(game.window_title);
                }
            }
            None => {
                if applied.take().is_some() {
                    println!("game exited, waiting for the next one");
                }
            }
        }
        thread::sleep(Duration::from_secs(1));
    }
}
