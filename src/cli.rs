// src/cli.rs
use std::{env, path::PathBuf};

use thiserror::Error;

use crate::{
    config::options::{ExportFormat, ExportOptions, ExportScope, FetchOptions},
    error::{ExportError, ScrapeError},
    file,
    progress::Progress,
    render::text,
    report::Report,
    scrape,
};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}\n\nRun with --help for usage.")]
    Usage(String),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn usage<T>(msg: impl Into<String>) -> Result<T, CliError> {
    Err(CliError::Usage(msg.into()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Delimited(ExportFormat),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub url: String,
    pub output: OutputFormat,
    pub out: Option<PathBuf>,
    pub export: ExportOptions,
    pub fetch: FetchOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Scrape(Params),
}

pub fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Scrape(params) => scrape_and_print(&params),
    }
}

fn scrape_and_print(params: &Params) -> Result<(), CliError> {
    let mut progress = CliProgress;
    let report = scrape::collect_report(&params.url, &params.fetch, Some(&mut progress))?;

    match (params.output, &params.out) {
        (OutputFormat::Text, None) => print!("{}", render_text(&report, params.export.scope)),
        (OutputFormat::Text, Some(path)) => {
            file::write_text(path, &render_text(&report, params.export.scope))?;
            eprintln!("Wrote {}", path.display());
        }
        (OutputFormat::Delimited(_), None) => {
            print!("{}", crate::csv::report_to_string(&report, &params.export));
        }
        (OutputFormat::Delimited(_), Some(_)) => {
            let path = file::write_export(&params.export, Some(&report))?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn render_text(report: &Report, scope: ExportScope) -> String {
    match scope {
        ExportScope::All => text::render(report),
        ExportScope::Sections => text::render_sections(report),
        ExportScope::Panels => text::render_panels(report.panels()),
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut url: Option<String> = None;
    let mut output = OutputFormat::Text;
    let mut out: Option<PathBuf> = None;
    let mut export = ExportOptions::default();
    let mut fetch = FetchOptions::default();
    let mut scope_set = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--format" => {
                let Some(v) = args.next() else { return usage("Missing value for --format") };
                output = match v.to_ascii_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "csv" => OutputFormat::Delimited(ExportFormat::Csv),
                    "tsv" => OutputFormat::Delimited(ExportFormat::Tsv),
                    other => return usage(format!("Unknown format: {}", other)),
                };
            }
            "-o" | "--out" => {
                let Some(v) = args.next() else { return usage("Missing output path") };
                out = Some(PathBuf::from(v));
            }
            "--sections-only" | "--panels-only" => {
                if scope_set {
                    return usage("--sections-only and --panels-only are exclusive");
                }
                scope_set = true;
                export.scope = if a == "--panels-only" { ExportScope::Panels } else { ExportScope::Sections };
            }
            "--no-headers" => export.include_headers = false,
            "--timeout" => {
                let Some(v) = args.next() else { return usage("Missing value for --timeout") };
                fetch.timeout_secs = match v.parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => return usage(format!("Invalid timeout: {}", v)),
                };
            }
            "--user-agent" => {
                let Some(v) = args.next() else { return usage("Missing value for --user-agent") };
                fetch.user_agent = v;
            }
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => return usage(format!("Unknown arg: {}", flag)),
            _ => {
                if url.is_some() {
                    return usage(format!("Unexpected extra argument: {}", a));
                }
                url = Some(a);
            }
        }
    }

    let Some(url) = url else { return usage("Missing URL") };

    if let OutputFormat::Delimited(fmt) = output {
        export.format = fmt;
    }
    if let Some(path) = &out {
        export.set_path(&path.to_string_lossy());
    }

    Ok(Command::Scrape(Params { url, output, out, export, fetch }))
}

/* ---------- Progress adapter ---------- */
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, url: &str) { eprintln!("Scraping {}", url); }
    fn log(&mut self, msg: &str) { eprintln!("{}", msg); }
}
