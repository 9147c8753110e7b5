use std::path::PathBuf;

/// A running process that looks like a game with a manageable window.
///
/// Candidates are recomputed on every scan. No identity survives across
/// scans except the window title, which callers use to detect "the game
/// changed" between polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCandidate {
    /// Raw OS window handle, pointer-sized. Kept as `usize` so the core
    /// crate stays free of platform handle types.
    pub window_handle: usize,
    pub process_id: u32,
    pub process_name: String,
    /// Executable path, if it was readable. Permission denials leave this
    /// empty without disqualifying the candidate at this stage.
    pub process_path: Option<PathBuf>,
    /// Main window title. Always non-blank — blank titles are filtered
    /// out during scanning.
    pub window_title: String,
}

impl GameCandidate {
    /// Whether two candidates refer to the same game, by title.
    ///
    /// Window handles and PIDs churn as games relaunch; the title is the
    /// only identity the scan contract preserves.
    pub fn same_game(&self, other: &GameCandidate) -> bool {
        self.window_title == other.window_title
    }
}

/// Reduces a scan result to at most one candidate.
///
/// Zero candidates yield `None`, one yields it directly. With several, the
/// candidate whose handle matches the current foreground window wins; when
/// none is foreground, the first in scan order is returned. That fallback is
/// arbitrary — scan order follows OS process enumeration, which is not
/// stable — but it is at least deterministic within a single scan.
pub fn pick_single(
    candidates: Vec<GameCandidate>,
    foreground: Option<usize>,
) -> Option<GameCandidate> {
    if candidates.len() <= 1 {
        return candidates.into_iter().next();
    }

    if let Some(fg) = foreground
        && let Some(hit) = candidates.iter().position(|c| c.window_handle == fg)
    {
        return candidates.into_iter().nth(hit);
    }

    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(handle: usize, title: &str) -> GameCandidate {
        GameCandidate {
            window_handle: handle,
            process_id: handle as u32,
            process_name: format!("game{handle}.exe"),
            process_path: None,
            window_title: title.into(),
        }
    }

    #[test]
    fn empty_scan_yields_none() {
        assert_eq!(pick_single(vec![], Some(0x10)), None);
    }

    #[test]
    fn single_candidate_wins_regardless_of_foreground() {
        let only = candidate(0x20, "Quake");
        let picked = pick_single(vec![only.clone()], Some(0x999));
        assert_eq!(picked, Some(only));
    }

    #[test]
    fn foreground_candidate_beats_scan_order() {
        let list = vec![
            candidate(0x10, "Launcher Game"),
            candidate(0x20, "Focused Game"),
            candidate(0x30, "Background Game"),
        ];
        let picked = pick_single(list, Some(0x20)).unwrap();
        assert_eq!(picked.window_title, "Focused Game");
    }

    #[test]
    fn no_foreground_match_falls_back_to_first() {
        let list = vec![candidate(0x10, "First"), candidate(0x20, "Second")];
        let picked = pick_single(list, Some(0x999)).unwrap();
        assert_eq!(picked.window_title, "First");
    }

    #[test]
    fn unknown_foreground_with_no_candidates_matching() {
        let list = vec![candidate(0x10, "First"), candidate(0x20, "Second")];
        let picked = pick_single(list, None).unwrap();
        assert_eq!(picked.window_title, "First");
    }

    #[test]
    fn same_game_compares_titles_only() {
        let a = candidate(0x10, "Doom");
        let mut b = candidate(0x77, "Doom");
        b.process_id = 4242;
        assert!(a.same_game(&b));
        let c = candidate(0x10, "Doom II");
        assert!(!a.same_game(&c));
    }
}
