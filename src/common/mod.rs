pub mod errors;

pub use errors::CleanError;
