pub mod cafes;
pub mod config;
pub mod shared;
