//! Argument parsing

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use selection_core::DominoOp;
use std::path::PathBuf;

/// One page to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Alphabets {
        json: bool,
    },
    Users {
        json: bool,
    },
    Paragraph {
        reference: Option<String>,
        input: Option<String>,
        json: bool,
    },
    Dominoes {
        tiles: Option<String>,
        ops: Vec<DominoOp>,
        json: bool,
    },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub verbosity: u8,
    pub log_json: bool,
    pub command: Command,
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the result as JSON")
}

/// The `selection` command definition
pub fn command() -> ClapCommand {
    ClapCommand::new("selection")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch-and-transform pages: letter counts, paragraph retyping, domino tiles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding endpoints and timeouts"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Send every request to this host, keeping each endpoint's path"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log verbosity (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            ClapCommand::new("alphabets")
                .about("Fetch random uppercase strings and count each letter")
                .arg(json_flag()),
        )
        .subcommand(
            ClapCommand::new("users")
                .about("List the placeholder users")
                .arg(json_flag()),
        )
        .subcommand(
            ClapCommand::new("paragraph")
                .about("Compare retyped text against the reference paragraph")
                .arg(
                    Arg::new("reference")
                        .long("reference")
                        .help("Use this reference text instead of fetching one"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .help("Retyped text (read from stdin when omitted)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            ClapCommand::new("dominoes")
                .about("Load domino tiles and apply operations in order")
                .arg(
                    Arg::new("tiles")
                        .long("tiles")
                        .help("Use this \", \"-joined tile list instead of fetching one"),
                )
                .arg(
                    Arg::new("ops")
                        .num_args(0..)
                        .value_parser(|s: &str| s.parse::<DominoOp>())
                        .help("sort-asc, sort-desc, flip, dedupe, remove=<tile>, reset"),
                )
                .arg(json_flag()),
        )
}

impl Invocation {
    /// Build from matches produced by [`command`]
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Option<Self> {
        let (name, args) = matches.subcommand()?;
        let json = args.get_flag("json");
        let text = |id: &str| args.get_one::<String>(id).cloned();

        let command = match name {
            "alphabets" => Command::Alphabets { json },
            "users" => Command::Users { json },
            "paragraph" => Command::Paragraph {
                reference: text("reference"),
                input: text("input"),
                json,
            },
            "dominoes" => Command::Dominoes {
                tiles: text("tiles"),
                ops: args
                    .get_many::<DominoOp>("ops")
                    .map(|ops| ops.cloned().collect())
                    .unwrap_or_default(),
                json,
            },
            _ => return None,
        };

        Some(Self {
            config_path: matches.get_one::<PathBuf>("config").cloned(),
            base_url: matches.get_one::<String>("base-url").cloned(),
            verbosity: matches.get_count("verbose"),
            log_json: matches.get_flag("log-json"),
            command,
        })
    }
}
