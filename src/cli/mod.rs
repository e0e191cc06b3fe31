pub mod command;
pub mod console;
pub mod run;

pub use console::Console;
pub use run::{ContactManager, run_app};
