//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: list tools, optionally filtered by category
//! - categories: list non-empty categories with tool counts
//! - show: show a single tool by provider id

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolrack - tool integration catalog inspector
#[derive(Parser, Debug)]
#[command(name = "toolrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools in the catalog
    List {
        /// Filter by category id (documentation, prometheus, kubernetes, ...)
        #[arg(long)]
        category: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List non-empty categories
    Categories {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single tool by provider id
    Show {
        /// Provider id to look up (exact, case-sensitive)
        provider: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (category overview)
        let cli = Cli::try_parse_from(["toolrack"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["toolrack", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["toolrack", "-c", "/path/to/toolrack.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/toolrack.yml")));
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::try_parse_from(["toolrack", "list"]).unwrap();
        match cli.command {
            Some(Commands::List { category, json }) => {
                assert!(category.is_none());
                assert!(!json);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_with_category_filter() {
        let cli = Cli::try_parse_from(["toolrack", "list", "--category", "prometheus"]).unwrap();
        match cli.command {
            Some(Commands::List { category, .. }) => {
                assert_eq!(category, Some("prometheus".to_string()));
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::try_parse_from(["toolrack", "list", "--json"]).unwrap();
        match cli.command {
            Some(Commands::List { json, .. }) => assert!(json),
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_categories_command() {
        let cli = Cli::try_parse_from(["toolrack", "categories"]).unwrap();
        match cli.command {
            Some(Commands::Categories { json }) => assert!(!json),
            _ => panic!("Expected categories command"),
        }
    }

    #[test]
    fn test_show_command() {
        let cli = Cli::try_parse_from(["toolrack", "show", "prometheus-query"]).unwrap();
        match cli.command {
            Some(Commands::Show { provider, json }) => {
                assert_eq!(provider, "prometheus-query");
                assert!(!json);
            }
            _ => panic!("Expected show command"),
        }
    }

    #[test]
    fn test_show_requires_provider() {
        assert!(Cli::try_parse_from(["toolrack", "show"]).is_err());
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["toolrack", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
