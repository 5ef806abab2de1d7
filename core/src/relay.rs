pub mod config;
pub mod supervisor;
