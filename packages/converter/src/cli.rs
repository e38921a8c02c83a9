//! Command-line interface for the converter.

use std::fs;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use console::style;

use crate::config::{ConvertOptions, DEFAULT_MAX_DEPTH, DEFAULT_TITLE};
use crate::converter::convert_html_with;
use crate::error::{ConverterError, Result};
use crate::output::save_json;

/// Elementor Converter - Convert HTML pages into Elementor JSON templates.
#[derive(Parser, Debug)]
#[command(name = "elementor-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML file to convert
    pub input: PathBuf,

    /// Where to write the JSON template
    pub output: PathBuf,

    /// Template title (default: input file name without extension)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Image URL used for <img> elements without a src
    #[arg(long, value_name = "URL")]
    pub placeholder_image: Option<String>,

    /// Use sequential ids so repeated runs produce identical output
    #[arg(long)]
    pub stable_ids: bool,

    /// Deepest element nesting to convert; deeper content is dropped
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Ignore elements with this tag and everything inside them (repeatable)
    #[arg(long = "skip-tag", value_name = "TAG")]
    pub skip_tags: Vec<String>,

    /// Write single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Conversion options described by the flags.
    #[must_use]
    pub fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new()
            .with_stable_ids(self.stable_ids)
            .with_max_depth(self.max_depth)
            .with_skip_tags(self.skip_tags.iter().cloned());
        if let Some(url) = &self.placeholder_image {
            options = options.with_placeholder_image(url.clone());
        }
        options
    }

    /// Title from `--title`, falling back to the input file stem.
    #[must_use]
    pub fn resolved_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self
                .input
                .file_stem()
                .map_or_else(|| DEFAULT_TITLE.to_string(), |s| s.to_string_lossy().into_owned()),
        }
    }
}

/// Run the CLI.
///
/// `--help` and `--version` print and exit the process directly. Every other
/// argument problem is returned as [`ConverterError::Usage`].
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(ConverterError::Usage(e.render().to_string())),
    };

    convert_command(&cli)
}

/// Execute the conversion.
fn convert_command(cli: &Cli) -> Result<()> {
    // Validate everything before touching the output
    if !cli.input.exists() {
        return Err(ConverterError::InputNotFound(cli.input.clone()));
    }
    let options = cli.options();
    options.validate()?;

    let html = read_html(&cli.input)?;
    let title = cli.resolved_title();

    tracing::info!(input = %cli.input.display(), title = %title, "Converting");
    let conversion = convert_html_with(&html, &title, &options);
    save_json(&conversion.document, &cli.output, !cli.compact)?;

    let report = conversion.report;
    println!(
        "  Widgets: {}, Containers: {}",
        style(report.widgets).cyan(),
        style(report.containers).cyan()
    );
    if report.is_lossy() {
        println!(
            "  {} {} skipped, {} truncated at depth {}",
            style("Warning:").yellow().bold(),
            report.skipped_elements,
            report.truncated_subtrees,
            options.max_depth
        );
    }
    println!("{} {}", style("Wrote").green().bold(), cli.output.display());

    Ok(())
}

/// Read an HTML file, replacing invalid UTF-8 rather than failing.
fn read_html(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(html) => Ok(html),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Input is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
