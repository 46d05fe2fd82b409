//! docs2md - convert documentation pages and blog posts to Markdown.
//!
//! Usage:
//!   docs2md <URL> [--max-pages N] [--delay SECS] [--variant auto|docs|blog]
//!           [--output DIR] [--author NAME] [--keep-logs] [--stdout] [--json]

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use docs2md::fetch::{Fetch, HttpFetcher};
use docs2md::{crawl, site, DocumentMetadata, Options, Page, SiteVariant};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use url::Url;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "docs_download.log";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Docs for known documentation hosts and `/docs` paths, blog otherwise.
    Auto,
    Docs,
    Blog,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Page to convert; the seed page of a section crawl.
    url: String,
    /// Pages to save. 1 converts a single page, more crawls the section.
    #[arg(short, long, default_value_t = 1)]
    max_pages: usize,
    /// Seconds to wait between fetches of a section crawl.
    #[arg(short, long, default_value_t = 0.5)]
    delay: f64,
    /// Site variant.
    #[arg(long, value_enum, default_value_t = VariantArg::Auto)]
    variant: VariantArg,
    /// Directory receiving the Markdown files.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
    /// Author recorded when a page names none.
    #[arg(long)]
    author: Option<String>,
    /// Write logs to ./logs/docs_download.log.
    #[arg(long)]
    keep_logs: bool,
    /// Print the Markdown of the page instead of writing a file.
    #[arg(long, conflicts_with = "json")]
    stdout: bool,
    /// Print metadata and Markdown of the page as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    metadata: &'a DocumentMetadata,
    markdown: String,
}

fn init_logging(keep_logs: bool) -> Result<(), Box<dyn Error>> {
    if keep_logs {
        fs::create_dir_all(LOG_DIR)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(PathBuf::from(LOG_DIR).join(LOG_FILE))?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| e.to_string())?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn options_from(args: &CliArgs, url: &Url) -> Result<Options, Box<dyn Error>> {
    let variant = match args.variant {
        VariantArg::Auto => site::detect_variant(url),
        VariantArg::Docs => SiteVariant::Docs,
        VariantArg::Blog => SiteVariant::Blog,
    };
    let delay = Duration::try_from_secs_f64(args.delay)
        .map_err(|e| format!("invalid --delay {}: {e}", args.delay))?;

    Ok(Options {
        variant,
        default_author: args.author.clone(),
        max_pages: args.max_pages,
        delay,
        output_dir: args.output.clone(),
        ..Options::for_variant(variant)
    })
}

fn print_page(fetcher: &HttpFetcher, url: &Url, options: &Options, json: bool) -> Result<(), Box<dyn Error>> {
    let fetched = fetcher.fetch(url)?;
    let page = Page::parse(&fetched.text(), fetched.url.clone());
    let doc = docs2md::convert_page(page, options);

    if json {
        let output = JsonOutput {
            source: doc.source.as_str(),
            metadata: &doc.metadata,
            markdown: doc.render(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{doc}");
    }
    Ok(())
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let url = Url::parse(&args.url).map_err(|source| docs2md::Error::InvalidUrl {
        url: args.url.clone(),
        source,
    })?;
    let options = options_from(args, &url)?;
    tracing::info!(url = %url, variant = ?options.variant, max_pages = options.max_pages, "starting");

    let fetcher = HttpFetcher::new()?;
    if args.stdout || args.json {
        return print_page(&fetcher, &url, &options, args.json);
    }

    let report = crawl::download(&fetcher, &url, &options)?;
    for path in &report.saved {
        println!("{}", path.display());
    }
    for failure in &report.failures {
        eprintln!("skipped {}: {}", failure.url, failure.error);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = init_logging(args.keep_logs) {
        eprintln!("Error: could not set up logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "download failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
