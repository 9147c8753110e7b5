use frameless_core::MonitorStatus;

pub fn execute(device: &str, width: u32, height: u32) {
    let status = frameless_windows::change_resolution(device, width, height);

    match status {
        MonitorStatus::Success => println!("{device} is now {width}x{height}"),
        MonitorStatus::RestartRequired => {
            println!("{device} will be {width}x{height} after a reboot");
        }
        MonitorStatus::BadMode => {
            eprintln!("{device} does not support {width}x{height}");
        }
        MonitorStatus::MonitorNotFound => eprintln!("no display named {device}"),
        MonitorStatus::Failed => eprintln!("resolution change rejected for {device}"),
    }

    if !status.is_success() && status != MonitorStatus::RestartRequired {
        std::process::exit(1);
    }
}
