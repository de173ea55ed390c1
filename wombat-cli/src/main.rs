//! Wombat CLI
//!
//! Resolves the styles of a rich-text document and prints one style record
//! per node.

mod document;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wombat_style::{ResolverConfig, Stylesheet, compute_styles, list_markers};

/// Wombat: style-cascade resolution for rich-text report elements
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Resolve a document against the built-in tag rules
    wombat report.json

    # Layer a stylesheet over the built-in rules and print JSON
    wombat report.json --stylesheet report.css --format json

    # Use only the given stylesheet, failing on malformed rules
    wombat report.json -s report.css --no-default-rules --strict
"#)]
struct Cli {
    /// JSON description of the document to resolve
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// Tag stylesheet layered over the built-in rules
    #[arg(short, long, value_name = "FILE")]
    stylesheet: Option<PathBuf>,

    /// Resolver configuration (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start from an empty stylesheet instead of the built-in rules
    #[arg(long)]
    no_default_rules: bool,

    /// Reject a malformed stylesheet instead of skipping its bad rules
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not print warnings
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored text output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented tree with the set fields of each node
    Text,
    /// One JSON object per node
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ResolverConfig::default(),
    };
    if cli.no_default_rules {
        config.default_rules = false;
    }
    if cli.quiet {
        config.warnings = false;
    }
    config.apply_warnings();

    let source = fs::read_to_string(&cli.document)
        .with_context(|| format!("failed to read {}", cli.document.display()))?;
    let tree = document::parse_document(&source)
        .with_context(|| format!("invalid document {}", cli.document.display()))?;

    let user = cli
        .stylesheet
        .as_deref()
        .map(|path| load_stylesheet(path, cli.strict))
        .transpose()?;

    let styles = compute_styles(&tree, user.as_ref(), &config);
    let markers = list_markers(&tree, &styles);

    match cli.format {
        Format::Json => println!("{}", report::to_json(&tree, &styles, &markers)?),
        Format::Text => report::print_text(&tree, &styles, &markers, !cli.no_color)?,
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ResolverConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn load_stylesheet(path: &Path, strict: bool) -> Result<Stylesheet> {
    let css = fs::read_to_string(path)
        .with_context(|| format!("failed to read stylesheet {}", path.display()))?;
    if strict {
        Stylesheet::parse_strict(&css).with_context(|| format!("invalid stylesheet {}", path.display()))
    } else {
        Ok(Stylesheet::parse(&css))
    }
}
