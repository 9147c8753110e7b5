use std::path::Path;

use serde::{Deserialize, Serialize};

/// Heuristic data the process scanner matches against.
///
/// These lists are configuration, not compiled-in constants: the scanner
/// takes a `ScanFilters` value, so the heuristics can be extended from
/// `config.toml` (or replaced wholesale in tests) without touching scan
/// logic. Missing sections fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanFilters {
    /// Process names that are never games: shells, system components,
    /// dev tools, browsers, launchers, overlays. Exact match, ignoring
    /// ASCII case.
    pub excluded_names: Vec<String>,
    /// Path fragments marking system or packaged-app directory trees.
    pub system_path_fragments: Vec<String>,
    /// Path fragments marking GPU-vendor and overlay tool directories.
    pub vendor_path_fragments: Vec<String>,
    /// Module (DLL) names whose presence marks a process as rendering
    /// through a GPU API. This is the positive signal; everything else
    /// in this struct is exclusionary.
    pub graphics_modules: Vec<String>,
}

impl Default for ScanFilters {
    fn default() -> Self {
        Self {
            excluded_names: str_vec(&[
                "explorer.exe",
                "searchapp.exe",
                "applicationframehost.exe",
                "shellexperiencehost.exe",
                "systemsettings.exe",
                "textinputhost.exe",
                "taskmgr.exe",
                "devenv.exe",
                "code.exe",
                "rider64.exe",
                "chrome.exe",
                "msedge.exe",
                "firefox.exe",
                "opera.exe",
                "brave.exe",
                "steam.exe",
                "steamwebhelper.exe",
                "epicgameslauncher.exe",
                "galaxyclient.exe",
                "battle.net.exe",
                "upc.exe",
                "discord.exe",
                "obs64.exe",
                "obs32.exe",
                "overwolf.exe",
                "msiafterburner.exe",
                "rtss.exe",
                "gamebar.exe",
                "nvcontainer.exe",
                "nvidia share.exe",
            ]),
            system_path_fragments: str_vec(&[
                "\\windows\\",
                "\\windowsapps\\",
                "\\systemapps\\",
            ]),
            vendor_path_fragments: str_vec(&[
                "nvidia",
                "\\amd\\",
                "\\intel\\",
                "rivatuner",
                "overwolf",
            ]),
            graphics_modules: str_vec(&[
                "d3d8.dll",
                "d3d9.dll",
                "d3d10.dll",
                "d3d10_1.dll",
                "d3d11.dll",
                "d3d12.dll",
                "dxgi.dll",
                "opengl32.dll",
                "vulkan-1.dll",
            ]),
        }
    }
}

impl ScanFilters {
    /// Whether a process name is on the exclusion list.
    pub fn excludes_name(&self, process_name: &str) -> bool {
        self.excluded_names
            .iter()
            .any(|n| n.eq_ignore_ascii_case(process_name))
    }

    /// Whether the executable lives under a system or packaged-apps tree.
    pub fn is_system_path(&self, path: &Path) -> bool {
        Self::path_contains(path, &self.system_path_fragments)
    }

    /// Whether the executable lives under a GPU-vendor/overlay tree.
    pub fn is_vendor_path(&self, path: &Path) -> bool {
        Self::path_contains(path, &self.vendor_path_fragments)
    }

    /// Whether a loaded module name is one of the graphics-API libraries.
    pub fn is_graphics_module(&self, module_name: &str) -> bool {
        self.graphics_modules
            .iter()
            .any(|m| m.eq_ignore_ascii_case(module_name))
    }

    fn path_contains(path: &Path, fragments: &[String]) -> bool {
        let lowered = path.to_string_lossy().to_ascii_lowercase();
        fragments
            .iter()
            .any(|f| lowered.contains(&f.to_ascii_lowercase()))
    }
}

/// Whether a window title survives the blank-title filter.
pub fn title_is_presentable(title: &str) -> bool {
    !title.trim().is_empty()
}

fn str_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
