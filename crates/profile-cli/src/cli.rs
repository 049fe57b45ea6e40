//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Profile Resolver - Merge an inherited profile tree into one flat profile
#[derive(Parser, Debug)]
#[command(name = "profile-resolve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file layered over the global config
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Profile selection shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct WalkArgs {
    /// Profile directory to resolve (defaults to `resolve.profile` in settings)
    #[arg(env = "PROFILE_RESOLVER_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Only read the profile itself, ignoring its `parent` file
    #[arg(long)]
    pub no_recursive: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge a profile and its ancestors and write the result
    ///
    /// Writes one file per recognized file name that ended up with content.
    ///
    /// Examples:
    ///   profile-resolve resolve profiles/default/linux/amd64 -o merged/
    ///   profile-resolve resolve --no-recursive my-profile -o out/
    Resolve {
        #[command(flatten)]
        walk: WalkArgs,

        /// Directory to write merged files into (created if missing)
        #[arg(short, long, env = "PROFILE_RESOLVER_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Print the merged profile without writing anything
    Show {
        #[command(flatten)]
        walk: WalkArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Parse every file of a profile tree and list the profiles visited
    Check {
        #[command(flatten)]
        walk: WalkArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn resolve_with_profile_and_output() {
        let cli = parse(&["profile-resolve", "resolve", "base", "-o", "out"]);
        match cli.command {
            Some(Commands::Resolve { walk, output }) => {
                assert_eq!(walk.profile, Some(PathBuf::from("base")));
                assert!(!walk.no_recursive);
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["profile-resolve", "check", "p", "--verbose", "-c", "s.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
    }

    #[test]
    fn show_json_and_no_recursive() {
        let cli = parse(&["profile-resolve", "show", "--json", "--no-recursive", "p"]);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                walk: WalkArgs {
                    profile: Some(PathBuf::from("p")),
                    no_recursive: true,
                },
                json: true,
            })
        );
    }

    #[test]
    fn no_command_is_accepted() {
        assert!(parse(&["profile-resolve"]).command.is_none());
    }
}
