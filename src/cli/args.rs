//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::RenderStyle;

/// Mentorship family trees: rebuild generations from student records and render them aligned
#[derive(Parser, Debug)]
#[command(name = "genealogy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Data directory (default: from config)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the family of a student
    Show {
        /// Student id
        id: u64,
        /// Rendering style (default: from config)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
        /// Hide connector lines
        #[arg(long)]
        no_links: bool,
    },

    /// Find students by name
    Search {
        /// Part of the name, case-insensitive
        name: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_show_with_style_when_parsing_then_captures_options() {
        let cli = Cli::parse_from(["genealogy", "-dd", "show", "42", "--style", "tree", "--no-links"]);
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Show { id, style, no_links }) => {
                assert_eq!(id, 42);
                assert_eq!(style, Some(RenderStyle::Tree));
                assert!(no_links);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
