pub mod cli;
pub mod config;
pub mod document;

pub use cli::*;
pub use config::*;
pub use document::*;
