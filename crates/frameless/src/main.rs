mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "frameless",
    version,
    about = "Borderless fullscreen and display configuration for legacy games"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List active displays
    Displays,
    /// Change a display's resolution
    SetResolution {
        /// Device name, e.g. \\.\DISPLAY1
        device: String,
        width: u32,
        height: u32,
    },
    /// Make a display the primary one (restarts the shell)
    SetPrimary {
        /// Device name, e.g. \\.\DISPLAY2
        device: String,
    },
    /// List game-window candidates and the detected game
    Detect,
    /// Strip the detected game's window decorations and fill its monitor
    Borderless,
    /// Poll for the game and apply borderless whenever it changes
    Watch {
        /// Seconds between scans
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = frameless_core::config::load();
    frameless_core::log::init(&config.log);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Displays => commands::displays::execute(),
        Commands::SetResolution {
            device,
            width,
            height,
        } => commands::resolution::execute(&device, width, height),
        Commands::SetPrimary { device } => commands::primary::execute(&device),
        Commands::Detect => commands::detect::execute(&config.filters),
        Commands::Borderless => commands::borderless::execute(&config.filters),
        Commands::Watch { interval } => commands::watch::execute(config.filters, interval),
    }
}
