mod get;
mod process;

pub use get::run_get;
pub use process::run_process;
