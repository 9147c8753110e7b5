use frameless_core::ScanFilters;
use frameless_windows::Window;

pub fn execute(filters: &ScanFilters) {
    match frameless_windows::try_get_single_game(filters) {
        Some(game) => {
            println!(
                "applying borderless to \"{}\" ({})",
                game.window_title, game.process_name
            );
            frameless_windows::apply_borderless(&Window::from_raw(game.window_handle));
        }
        None => {
            eprintln!("no game detected");
            std::process::exit(1);
        }
    }
}
