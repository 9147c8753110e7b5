pub mod borderless;
pub mod detect;
pub mod displays;
pub mod init;
pub mod primary;
pub mod resolution;
pub mod watch;
