pub mod commands;
pub mod stores;
