pub mod engine;

pub use engine::{clean, Reporter};
