pub mod config;
pub mod dashboard;
pub mod error;
pub mod parser;
pub mod types;
pub mod utils;
