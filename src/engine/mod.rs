pub mod config;
pub mod duplicates;
pub mod folders;
pub mod loader;
pub mod stats;
pub mod utils;
