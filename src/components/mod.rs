pub mod app;
pub mod offline_banner;
pub mod pull_indicator;

pub use app::{MobileShell, MobileShellProps};
