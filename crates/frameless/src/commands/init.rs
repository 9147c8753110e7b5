pub fn execute() {
    match frameless_core::config::write_default() {
        Ok(Some(path)) => println!("wrote {}", path.display()),
        Ok(None) => {
            let path = frameless_core::config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.toml".into());
            println!("{path} already exists, leaving it alone");
        }
        Err(e) => {
            eprintln!("could not write config: {e}");
            std::process::exit(1);
        }
    }
}
