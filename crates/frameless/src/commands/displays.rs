use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

pub fn execute() {
    let displays = frameless_windows::enumerate_displays();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Device"),
            Cell::new("Resolution").set_alignment(CellAlignment::Right),
            Cell::new("Position").set_alignment(CellAlignment::Right),
            Cell::new("Primary"),
            Cell::new("Flags"),
        ]);

    for d in &displays {
        let resolution = if d.width < 0 {
            "unreadable".to_string()
        } else {
            format!("{}x{}", d.width, d.height)
        };

        table.add_row(vec![
            Cell::new(&d.device_id),
            Cell::new(resolution).set_alignment(CellAlignment::Right),
            Cell::new(format!("({}, {})", d.position_x, d.position_y))
                .set_alignment(CellAlignment::Right),
            Cell::new(if d.is_primary { "yes" } else { "" }),
            Cell::new(format!("0x{:X}", d.raw_state_flags)),
        ]);
    }

    println!("{table}");
    println!("\n{} active displays", displays.len());
}
