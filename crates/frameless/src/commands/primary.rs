use frameless_core::MonitorStatus;

pub fn execute(device: &str) {
    match frameless_windows::set_primary_monitor(device) {
        MonitorStatus::Success => println!("{device} is now the primary display"),
        MonitorStatus::MonitorNotFound => {
            eprintln!("no display named {device}");
            std::process::exit(1);
        }
        status => {
            eprintln!("could not make {device} primary: {status}");
            std::process::exit(1);
        }
    }
}
