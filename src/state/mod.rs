pub mod nav;
pub mod shell;
pub mod stepper;

pub use shell::{ShellAction, ShellState};
