use anyhow::Result;
use changes::areas::repository::Repository;
use changes::artifacts::core::pager::Output;
use changes::artifacts::core::settings::Settings;
use changes::artifacts::snapshot::revision::{DEFAULT_BASE_REVISION, Revision};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "changes",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Explore uncommitted changes of a git working copy",
    long_about = "Lists staged and unstaged changes as files and changed line ranges, \
    prints the previous version of a changed file, and prepares before/after comparisons.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "CHANGES_ROOT",
        help = "Directory inside the working copy (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "CHANGES_BASE",
        default_value = DEFAULT_BASE_REVISION,
        help = "Revision unstaged files are compared against"
    )]
    base: String,
    #[arg(long, global = true, env = "CHANGES_GIT", default_value = "git", help = "Git executable")]
    git: String,
    #[arg(long, global = true, env = "CHANGES_SCRATCH_DIR", help = "Directory for comparison files")]
    scratch_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "list",
        about = "List changed files and line ranges",
        long_about = "This command prints staged changes first, then unstaged changes, \
        each file followed by the line ranges that changed in its new version."
    )]
    List,
    #[command(
        name = "show",
        about = "Print the previous version of a changed file",
        long_about = "This command prints the content a changed file is compared against: \
        the index copy for files that also have staged changes, the base revision otherwise."
    )]
    Show {
        #[arg(index = 1, help = "Path of the changed file")]
        path: PathBuf,
        #[arg(long, help = "Use the staged record of the file")]
        staged: bool,
        #[arg(long, help = "Compare against the index copy")]
        cached: bool,
    },
    #[command(
        name = "compare",
        about = "Prepare a before/after comparison of a changed file",
        long_about = "This command writes the previous version (and, for staged files, the staged version) \
        to scratch files and prints both sides. Falls back to the file location on failure."
    )]
    Compare {
        #[arg(index = 1, help = "Path of the changed file")]
        path: PathBuf,
        #[arg(long, help = "Use the staged record of the file")]
        staged: bool,
        #[arg(short, long, help = "Line to position at (defaults to the first change)")]
        line: Option<u32>,
    },
    #[command(
        name = "goto",
        about = "Print the location of a changed region",
        long_about = "This command prints path:line:column of a changed file, \
        at its first changed line unless a line is given."
    )]
    Goto {
        #[arg(index = 1, help = "Path of the changed file")]
        path: PathBuf,
        #[arg(long, help = "Use the staged record of the file")]
        staged: bool,
        #[arg(short, long, help = "Line to position at (defaults to the first change)")]
        line: Option<u32>,
    },
    #[command(
        name = "watch",
        about = "Reprint changes on every trigger read from stdin",
        long_about = "This command prints the changes, then refreshes them for every line read from stdin. \
        Bursts of triggers are coalesced into a single refresh."
    )]
    Watch {
        #[arg(
            long,
            env = "CHANGES_DEBOUNCE_MS",
            default_value_t = 300,
            help = "Delay in milliseconds before a trigger refreshes"
        )]
        debounce_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("changes=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let dir = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let mut settings = Settings::discover(&dir, &cli.git)
        .await?
        .with_base_revision(Revision::try_parse(&cli.base)?);
    if let Some(scratch_dir) = &cli.scratch_dir {
        settings = settings.with_scratch_dir(scratch_dir);
    }

    let paging = matches!(cli.command, Commands::List | Commands::Show { .. });
    let output = Output::detect(paging);

    match cli.command {
        Commands::List => {
            let repository = Repository::new(settings, output.writer());
            repository.list().await?
        }
        Commands::Show {
            path,
            staged,
            cached,
        } => {
            let repository = Repository::new(settings, output.writer());
            repository.show(&path, staged, cached).await?
        }
        Commands::Compare { path, staged, line } => {
            let repository = Repository::new(settings, output.writer());
            repository.compare(&path, staged, line).await?
        }
        Commands::Goto { path, staged, line } => {
            let repository = Repository::new(settings, output.writer());
            repository.goto(&path, staged, line).await?
        }
        Commands::Watch { debounce_ms } => {
            let settings = settings.with_debounce(Duration::from_millis(debounce_ms));
            let repository = Arc::new(Repository::new(settings, output.writer()));
            repository.watch().await?
        }
    }

    output.finish()
}
