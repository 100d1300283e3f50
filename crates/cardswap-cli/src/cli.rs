use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cardswap")]
#[command(about = "Fair multi-phase card swap allocator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a team directory, allocate every offered card, print the report
    Swap {
        /// Directory holding the roster and each member's lists
        #[arg(short, long)]
        dir: PathBuf,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override max_award_contribution_distance
        #[arg(long)]
        max_distance: Option<usize>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Fail if any member's exchange does not balance
        #[arg(long)]
        strict: bool,
    },

    /// Expand a list from stdin into one code per line on stdout
    Convert,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_arguments_parse() {
        let cli = Cli::parse_from([
            "cardswap",
            "swap",
            "--dir",
            "team",
            "--max-distance",
            "2",
            "--format",
            "json",
            "--strict",
        ]);
        match cli.command {
            Commands::Swap {
                dir,
                config,
                max_distance,
                format,
                strict,
            } => {
                assert_eq!(dir, PathBuf::from("team"));
                assert!(config.is_none());
                assert_eq!(max_distance, Some(2));
                assert_eq!(format, OutputFormat::Json);
                assert!(strict);
            }
            Commands::Convert => panic!("expected swap"),
        }
    }

    #[test]
    fn convert_takes_no_arguments() {
        let cli = Cli::parse_from(["cardswap", "--log-json", "convert"]);
        assert!(matches!(cli.command, Commands::Convert));
        assert!(cli.log_json);
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
