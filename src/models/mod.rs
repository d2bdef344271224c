pub mod advocate;
pub mod config;
