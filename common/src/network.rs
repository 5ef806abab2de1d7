pub mod interface;
pub mod scan;
pub mod subnet;
