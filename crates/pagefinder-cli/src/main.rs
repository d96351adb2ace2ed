use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use pagefinder_core::{InputSelection, PdfBackend, resolve_pdf_paths, search_all};
use pagefinder_pdf_mupdf::MupdfBackend;

mod output;
mod settings;

use settings::{OUTPUT_DIR_ENV, Settings};

/// Offline PDF keyword search - report the pages on which each keyword appears
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["pdf_dir", "pdf_file"])))]
struct Cli {
    /// Directory containing PDF files to search
    #[arg(long)]
    pdf_dir: Option<PathBuf>,

    /// Single PDF file to search
    #[arg(long)]
    pdf_file: Option<PathBuf>,

    /// File with preset keywords (one per line or comma-separated)
    #[arg(long)]
    keywords_file: PathBuf,

    /// Output JSON path (defaults to ./search_results.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write CSV summary to this path
    #[arg(long)]
    output_csv: Option<PathBuf>,

    /// Directory to place outputs (alternative to --output / --output-csv)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip PDFs that cannot be opened instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = pagefinder_core::config_file::load_config();
    let env_output_dir = std::env::var(OUTPUT_DIR_ENV).ok().map(PathBuf::from);
    let settings = Settings::resolve(
        &cli,
        env_output_dir,
        &config,
        std::io::stdout().is_terminal(),
    );
    tracing::debug!(?settings, "resolved settings");

    let backend = MupdfBackend::default();
    run(&cli, &settings, &backend, &mut std::io::stdout())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(
    cli: &Cli,
    settings: &Settings,
    backend: &dyn PdfBackend,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let color = settings.color;

    let keywords = pagefinder_core::load_keywords(&cli.keywords_file)?;
    if keywords.is_empty() {
        writeln!(writer, "No keywords found in the keywords file.")?;
        return Ok(());
    }

    let selection = InputSelection::from_options(cli.pdf_dir.clone(), cli.pdf_file.clone())?;
    let pdf_paths = resolve_pdf_paths(&selection)?;
    if pdf_paths.is_empty() {
        writeln!(writer, "No PDF files found to search.")?;
        return Ok(());
    }

    output::print_search_start(writer, pdf_paths.len(), keywords.len(), color)?;
    tracing::info!(pdfs = pdf_paths.len(), keywords = keywords.len(), "starting search");

    let bar = output::file_progress_bar(pdf_paths.len() as u64)?;
    let outcome = search_all(
        &pdf_paths,
        &keywords,
        backend,
        settings.scan_options,
        |event| output::update_progress(&bar, &event, color),
    );
    bar.finish_and_clear();
    let outcome = outcome?;

    pagefinder_reporting::write_json(&outcome.report, &settings.json_path)?;
    output::print_written(writer, "JSON results", &settings.json_path, color)?;

    if let Some(ref csv_path) = settings.csv_path {
        pagefinder_reporting::write_csv(&outcome.report, csv_path)?;
        output::print_written(writer, "CSV summary", csv_path, color)?;
    }

    output::print_skipped(writer, &outcome.skipped, color)?;

    Ok(())
}
