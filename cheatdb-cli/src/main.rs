//! cheatdb CLI
//!
//! Command-line interface for browsing cheat code databases and building
//! patch files from selected codes.

mod commands;
mod error;
mod settings;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "cheatdb")]
#[command(about = "Browse cheat code databases and build patch files", long_about = None)]
struct Cli {
    /// Database root containing one folder per game (defaults to the saved root, then the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the games in the database
    List,

    /// Show the groups, codes, metadata and credits of one game
    Show {
        /// Game folder name (case-insensitive) or path to a game folder
        game: String,

        /// Print each code's raw body
        #[arg(long)]
        raw: bool,

        /// Print the parsed game as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,
    },

    /// Compose a patch file from selected codes of one game
    Patch {
        /// Game folder name (case-insensitive) or path to a game folder
        game: String,

        /// Code names to include (repeatable; duplicates by name are all included)
        #[arg(short, long = "code")]
        codes: Vec<String>,

        /// Group names whose codes are all included (repeatable)
        #[arg(short, long = "group")]
        groups: Vec<String>,

        /// Include every code of the game
        #[arg(long, conflicts_with_all = ["codes", "groups"])]
        all: bool,

        /// Output file (defaults to a timestamped file in the configured output directory)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the patch instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Normalize code text into two-words-per-line layout
    Normalize {
        /// File to read (defaults to stdin)
        file: Option<PathBuf>,

        /// Only check; fail if the text would change
        #[arg(long)]
        check: bool,
    },

    /// Manage cheatdb settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file and its contents
    Show,

    /// Print the settings file path
    Path,

    /// Save the default database root (omit the path to clear it)
    SetRoot { path: Option<PathBuf> },

    /// Save the default patch output directory (omit the path to clear it)
    SetOutput { path: Option<PathBuf> },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Route `log` output to stdout with bare messages; user-facing output goes through it.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List => {
            let root = settings::resolve_database_root(cli.root);
            commands::list::run_list(&root)
        }
        Commands::Show { game, raw, json } => {
            let root = settings::resolve_database_root(cli.root);
            commands::show::run_show(&root, &game, raw, json)
        }
        Commands::Patch {
            game,
            codes,
            groups,
            all,
            output,
            stdout,
        } => {
            let root = settings::resolve_database_root(cli.root);
            let selection = commands::patch::Selection { codes, groups, all };
            commands::patch::run_patch(&root, &game, &selection, output, stdout)
        }
        Commands::Normalize { file, check } => commands::normalize::run_normalize(file, check),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetRoot { path } => {
                commands::config::run_config_set(settings::PathSetting::DatabaseRoot, path)
            }
            ConfigAction::SetOutput { path } => {
                commands::config::run_config_set(settings::PathSetting::PatchOutputDir, path)
            }
        },
    }
}
