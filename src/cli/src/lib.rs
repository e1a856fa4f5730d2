pub mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod process_command;
