//! CLI commands

pub mod generate;
pub mod init;
