//! # checkcycle CLI
//!
//! Command-line interface for cycling Markdown checkbox markers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use checkcycle::{
    commands::{self, CycleArgs},
    constants::DEFAULT_LINE,
    Direction, StageChoice,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/checkcycle/config   Global stage lists
  .checkcycle                   Project stage lists (searched upward, overrides global)

Defaults:
  stages            = [\"[ ]\", \"[x]\"]
  alternate_stages  = [\"[/]\", \"[?]\"]

Getting Started:
  cbx next todo.md --line 3      Advance the checkbox on line 3
  cbx prev todo.md --line 3      Step it back again
  cbx next --alt todo.md -l 3    Cycle the alternate stages instead
  echo '- [ ] milk' | cbx next   Filter stdin to stdout

Learn more:
  cbx <COMMAND> --help           Show detailed help for a command";

#[derive(Parser)]
#[command(name = "cbx")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Cycle Markdown checkbox markers through configurable stages")]
#[command(
    long_about = "cbx cycles the checkbox markers on one line of a Markdown document through an \
ordered list of stages, such as [ ] -> [x].\n\n\
`next` moves the leftmost marker that is not yet on the last stage one step forward. \
When every marker on the line is already on the last stage, they all wrap back to the \
first. `prev` does the mirror image, right to left. Markers from the alternate stage \
list are recognized too and are promoted to the first stage."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

// Shared by next and prev
#[derive(Args)]
struct CycleCli {
    /// File to edit in place (reads stdin and writes stdout when omitted)
    file: Option<PathBuf>,

    /// Line number to cycle (1-based)
    #[arg(short, long, default_value_t = DEFAULT_LINE)]
    line: usize,

    /// Cycle the alternate stages instead of the primary ones
    #[arg(long)]
    alt: bool,

    /// Use these stages for this run (repeat in order)
    #[arg(long = "stage", value_name = "MARKER")]
    stages: Vec<String>,

    /// Don't print the success message or warnings
    #[arg(short, long)]
    quiet: bool,
}

impl CycleCli {
    fn into_args(self, direction: Direction) -> CycleArgs {
        CycleArgs {
            file: self.file,
            line: self.line,
            direction,
            choice: if self.alt {
                StageChoice::Alternate
            } else {
                StageChoice::Stages
            },
            stages: self.stages,
            quiet: self.quiet,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the checkbox on a line to its next stage
    #[command(
        long_about = "Advance the checkbox on a line to its next stage.\n\n\
Scans the line for every marker of both stage lists and moves the leftmost one that \
is not yet on the last stage. A marker from the other list counts as not done and \
becomes the first stage. If every marker is on the last stage, all of them wrap to \
the first stage.",
        after_help = "Examples:\n  \
cbx next todo.md --line 4             - [ ] a   ->  - [x] a\n  \
cbx next todo.md -l 4                 - [x] a   ->  - [ ] a (wraps)\n  \
cbx next todo.md -l 4 --alt           - [/] a   ->  - [?] a\n  \
cbx next --stage TODO --stage DONE    TODO a    ->  DONE a\n\n\
Without a file, stdin is read and the whole document is written to stdout, unchanged \
if nothing could be cycled or an error occurred."
    )]
    Next(CycleCli),

    /// Step the checkbox on a line back to its previous stage
    #[command(
        long_about = "Step the checkbox on a line back to its previous stage.\n\n\
Mirror image of `next`: moves the rightmost marker that is not on the first stage one \
step back. If every marker is on the first stage, all of them wrap to the last stage.",
        after_help = "Examples:\n  \
cbx prev todo.md --line 4             - [x] a   ->  - [ ] a\n  \
cbx prev todo.md -l 4                 - [ ] a   ->  - [x] a (wraps)"
    )]
    Prev(CycleCli),

    /// Show the effective stage lists
    Stages,

    /// Create a .checkcycle project file in the current directory
    #[command(
        long_about = "Create a .checkcycle project file in the current directory.\n\n\
The file is seeded with the stage lists currently in effect. Commands run anywhere \
below this directory use it instead of the global config."
    )]
    Init,

    /// Create or repair the global config file
    #[command(
        long_about = "Create or repair the global config file.\n\n\
Writes ~/.config/checkcycle/config with commented defaults if it doesn't exist. If it \
does, adds missing keys and drops unknown ones."
    )]
    Setup,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
cbx completions zsh > ~/.zfunc/_cbx\n  \
cbx completions bash > ~/.local/share/bash-completion/completions/cbx")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries document output in filter mode.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Next(args) => commands::cycle(&args.into_args(Direction::Forward)).map(drop),

        Commands::Prev(args) => commands::cycle(&args.into_args(Direction::Backward)).map(drop),

        Commands::Stages => commands::stages(),

        Commands::Init => commands::init(),

        Commands::Setup => commands::setup().map(drop),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
