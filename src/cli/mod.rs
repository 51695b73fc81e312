//! CLI module for toolrack - command-line interface and subcommands.
//!
//! Provides the entry point with subcommands for listing tools, listing
//! categories, and inspecting a single tool by provider.

pub mod commands;

pub use commands::Cli;
