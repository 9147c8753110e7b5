use std::sync::Mutex;

use crate::GameCandidate;

/// Mutex-guarded single-slot cell holding the currently detected game.
///
/// The polling thread and the foreground control flow both read and
/// conditionally write this slot, so every read-modify-write happens under
/// the lock. A write only lands when the new observation's identity (window
/// title) differs from what the slot holds, so readers can treat "the slot
/// changed" as "the game changed".
#[derive(Debug, Default)]
pub struct GameSlot {
    inner: Mutex<Option<GameCandidate>>,
}

impl GameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a new observation.
    ///
    /// Returns `true` if the slot changed (a different game appeared, the
    /// game went away, or a game appeared where there was none). Identical
    /// observations leave the slot untouched and return `false`.
    pub fn publish(&self, observed: Option<GameCandidate>) -> bool {
        let mut slot = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        let changed = match (&*slot, &observed) {
            (None, None) => false,
            (Some(current), Some(new)) => !current.same_game(new),
            _ => true,
        };

        if changed {
            *slot = observed;
        }
        changed
    }

    /// Returns a snapshot of the current observation.
    pub fn current(&self) -> Option<GameCandidate> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(title: &str) -> GameCandidate {
        GameCandidate {
            window_handle: 0x40,
            process_id: 1234,
            process_name: "game.exe".into(),
            process_path: None,
            window_title: title.into(),
        }
    }

    #[test]
    fn starts_empty() {
        let slot = GameSlot::new();
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn first_observation_is_a_change() {
        let slot = GameSlot::new();
        assert!(slot.publish(Some(game("Doom"))));
        assert_eq!(slot.current().unwrap().window_title, "Doom");
    }

    #[test]
    fn same_title_does_not_rewrite() {
        let slot = GameSlot::new();
        slot.publish(Some(game("Doom")));

        // Same game observed again, even with a different handle.
        let mut again = game("Doom");
        again.window_handle = 0x99;
        assert!(!slot.publish(Some(again)));
        // The original observation is preserved.
        assert_eq!(slot.current().unwrap().window_handle, 0x40);
    }

    #[test]
    fn different_title_replaces() {
        let slot = GameSlot::new();
        slot.publish(Some(game("Doom")));
        assert!(slot.publish(Some(game("Quake"))));
        assert_eq!(slot.current().unwrap().window_title, "Quake");
    }

    #[test]
    fn game_exit_clears_the_slot() {
        let slot = GameSlot::new();
        slot.publish(Some(game("Doom")));
        assert!(slot.publish(None));
        assert_eq!(slot.current(), None);
        // Staying empty is not a change.
        assert!(!slot.publish(None));
    }
}
