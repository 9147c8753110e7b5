use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use frameless_core::{ScanFilters, pick_single};
use frameless_windows::Window;

pub fn execute(filters: &ScanFilters) {
    let candidates = frameless_windows::find_candidates(filters);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Process"),
            Cell::new("Title"),
            Cell::new("HWND"),
            Cell::new("Path"),
        ]);

    for c in &candidates {
        let path = c
            .process_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(c.process_id).set_alignment(CellAlignment::Right),
            Cell::new(&c.process_name),
            Cell::new(&c.window_title),
            Cell::new(format!("0x{:X}", c.window_handle)),
            Cell::new(path),
        ]);
    }

    println!("{table}");
    println!("\n{} candidates found", candidates.len());

    let foreground = Window::foreground().map(|w| w.raw());
    match pick_single(candidates, foreground) {
        Some(game) => println!("detected game: \"{}\"", game.window_title),
        None => println!("no game detected"),
    }
}
