use anyhow::{Context, Result};
use clap::Parser;
use markdown_smf::{
    convert_to_smf, load_head, word_report, ConvertError, ConvertOptions, ExitCode, HeadSource,
};
use markdown_smf_config::{Config, ConfigError, HeadSettings, LoadOptions};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Convert a Markdown manuscript read from stdin into Standard Manuscript
/// Format RTF on stdout.
#[derive(Parser)]
#[command(name = "md2smf", version, about, long_about = None)]
pub struct Cli {
    /// File holding the sender's address block (first 7 lines are used)
    #[arg(short = 'f', long, value_name = "PATH")]
    head_file: Option<PathBuf>,

    /// Use Courier New and leave body text untouched
    #[arg(short, long)]
    monospace: bool,

    /// Append chapter names to chapter headings
    #[arg(short, long)]
    chapter_names: bool,

    /// Append part names to part headings
    #[arg(short, long)]
    part_names: bool,

    /// Print the word count and open to-dos instead of converting
    #[arg(short, long)]
    word_count: bool,

    /// Config file to layer over .md2smf.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::ExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::ExitCode::from(exit_code_for(&err) as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(ConvertError::from)
        .context("Failed to read manuscript from stdin")?;

    if cli.word_count {
        return write_stdout(&format!("{}\n", word_report(&text)));
    }

    let mut load = LoadOptions::default();
    if let Some(path) = &cli.config {
        load = load.with_override_path(path.clone());
    }
    let config = Config::load(load)?;
    debug!(layers = config.sources.layers.len(), "configuration loaded");

    let source = match (&cli.head_file, &config.head) {
        (Some(path), _) => HeadSource::File(path.clone()),
        (None, HeadSettings::File(path)) => HeadSource::File(path.clone()),
        (None, HeadSettings::Lines(lines)) => HeadSource::Inline(lines.clone()),
        (None, HeadSettings::Placeholder) => HeadSource::Placeholder,
    };
    let head = load_head(&source).with_context(|| match &source {
        HeadSource::File(path) => format!("Unable to read head file: {}", path.display()),
        _ => "Unable to build head block".to_string(),
    })?;

    let options = ConvertOptions {
        monospace: cli.monospace || config.format.monospace,
        name_chapters: cli.chapter_names || config.format.chapter_names,
        name_parts: cli.part_names || config.format.part_names,
        head: Some(head),
    };

    let rtf = convert_to_smf(&text, &options)?;
    write_stdout(&rtf)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    } else {
        EnvFilter::new(default_level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if let Some(err) = err.downcast_ref::<ConvertError>() {
        return err.exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return ExitCode::Config;
    }
    ExitCode::Io
}

fn write_stdout(output: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match handle.write_all(output.as_bytes()) {
        Ok(_) => {}
        Err(err) if should_ignore_pipe_error(&err) => return Ok(()),
        Err(err) => return Err(err).context("Failed to write output"),
    }

    match handle.flush() {
        Ok(_) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
