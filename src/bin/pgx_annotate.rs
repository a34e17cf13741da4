use std::path::PathBuf;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use pharmgkb_annotator::app::App;
use pharmgkb_annotator::config::ConfigLoader;
use pharmgkb_annotator::error::AnnotatorError;
use pharmgkb_annotator::fetcher::ReferenceFetcher;
use pharmgkb_annotator::output::{OutputMode, SummaryOutput};
use pharmgkb_annotator::pharmgkb::PharmGkbHttpClient;

#[derive(Parser)]
#[command(name = "pgx-annotate")]
#[command(about = "Annotate gene symbols with PharmGKB relationships")]
#[command(version, author)]
struct Cli {
    /// File with one gene symbol per line; lines starting with `#` are copied to the output
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Destination CSV file
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// JSON config overriding table URLs, cache directory or comment marker
    #[arg(long)]
    config: Option<String>,

    /// Directory holding the cached reference tables
    #[arg(long)]
    cache_dir: Option<Utf8PathBuf>,

    /// Re-download reference tables even when cached
    #[arg(long)]
    refresh: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(error) = report.downcast_ref::<AnnotatorError>() {
            return ExitCode::from(map_exit_code(error));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &AnnotatorError) -> u8 {
    match error {
        AnnotatorError::InputRead { .. }
        | AnnotatorError::ConfigRead(_)
        | AnnotatorError::ConfigParse(_) => 2,
        AnnotatorError::Http(_)
        | AnnotatorError::HttpStatus { .. }
        | AnnotatorError::Archive { .. }
        | AnnotatorError::MissingArchiveEntry { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ConfigLoader::resolve(cli.config.as_deref())?;
    if let Some(cache_dir) = cli.cache_dir {
        config.cache_dir = cache_dir;
    }

    let client = PharmGkbHttpClient::new()?;
    let fetcher = ReferenceFetcher::new(config, client).with_refresh(cli.refresh);
    let app = App::new(fetcher);
    let summary = app.annotate_file(&cli.input, &cli.output)?;

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    SummaryOutput::print(&summary, mode).into_diagnostic()?;
    Ok(())
}
