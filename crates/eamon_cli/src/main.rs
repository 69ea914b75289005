use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use eamon_core::{
    DedupError, DedupPlan, DeletionOutcome, DeletionReport, DirectoryStore, confirm, delete_all,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIRM_PROMPT: &str = "Proceed with deletion? (yes/no): ";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Directory holding the `Eamon Adventure #N - ....do` files.
    #[arg(value_name = "DIR")]
    dir: PathBuf,
    /// Print what would be deleted without prompting.
    #[arg(long, conflicts_with = "json")]
    dry_run: bool,
    /// Print the keep/delete plan as JSON without prompting.
    #[arg(long)]
    json: bool,
    /// Log at debug level to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(dir = %cli.dir.display(), "scanning collection");
    let mut store = DirectoryStore::new(&cli.dir);
    let plan = DedupPlan::scan(&store).unwrap_or_else(|e| {
        match e {
            DedupError::ListDirectory { source, .. } => {
                eprintln!("Error reading {}: {source}", cli.dir.display());
            }
            other => eprintln!("Error reading {}: {other}", cli.dir.display()),
        }
        process::exit(1);
    });

    if cli.json {
        let rendered = serde_json::to_string_pretty(&plan).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    print_summary(&plan);

    if plan.is_empty() {
        println!("No duplicates found to delete");
        return;
    }

    let doomed = plan.delete_filenames();
    println!("Files to be deleted:");
    for name in &doomed {
        println!("  {name}");
    }
    println!();

    if cli.dry_run {
        println!("Dry run: no files deleted");
        return;
    }

    if !ask_to_proceed() {
        println!("Cancelled");
        return;
    }

    let report = run_deletions(&mut store, &doomed);
    println!();
    println!("Deleted {} files", report.deleted_count());
    if report.has_failures() {
        eprintln!("Failed to delete {} files", report.failed_count());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn print_summary(plan: &DedupPlan) {
    println!("Total files: {}", plan.recognized);
    println!("Files to keep: {}", plan.keep.len());
    println!("Files to delete: {}", plan.delete.len());
    println!();
}

fn ask_to_proceed() -> bool {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    confirm(CONFIRM_PROMPT, &mut input, &mut output).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    })
}

fn run_deletions(store: &mut DirectoryStore, filenames: &[&str]) -> DeletionReport {
    delete_all(store, filenames, |outcome| match outcome {
        DeletionOutcome::Deleted(name) => println!("Deleted: {name}"),
        DeletionOutcome::Failed(failure) => {
            eprintln!("Failed to delete {}: {}", failure.filename, failure.source);
        }
    })
}
