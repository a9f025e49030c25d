//! swagdoc — extract OpenAPI annotations from annotated source files.
//!
//! Two ways to name the inputs:
//!
//! - **files mode**: `swagdoc routes/*.js api/*.yaml`
//! - **definition mode**: `swagdoc -d swagger.json`, which validates the
//!   options file and reads the inputs from its `apis` list

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use swagdoc::{render, AnnotationSet, FileAnnotations, Options};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "swagdoc",
    about = "Extract OpenAPI annotations from JSDoc comments and YAML files"
)]
struct Cli {
    /// Input files (glob patterns supported). Defaults to `apis` of the definition.
    files: Vec<String>,

    /// Options file (JSON) with `definition`/`swaggerDefinition` and `apis`
    #[arg(short = 'd', long)]
    definition: Option<PathBuf>,

    /// Text encoding of the input files
    #[arg(short = 'e', long, default_value = swagdoc::DEFAULT_ENCODING)]
    encoding: String,

    /// Output format: json (default), yaml, text
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Print raw yaml/jsdoc channels instead of resolved YAML fragments
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("SWAGDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let options = cli.definition.as_deref().map(load_options).transpose()?;
    let patterns: Vec<String> = match &options {
        Some(value) if cli.files.is_empty() => {
            let opts = Options::new(value)?;
            opts.apis().into_iter().map(str::to_string).collect()
        }
        _ => cli.files.clone(),
    };
    if patterns.is_empty() {
        bail!("no input files: pass files or a definition with 'apis'");
    }

    let renderer = render::create_renderer(&cli.format)?;
    let input_files = expand_globs(&patterns)?;

    let mut results = Vec::with_capacity(input_files.len());
    for path in &input_files {
        let set = swagdoc::extract_annotations(path, Some(&cli.encoding))
            .with_context(|| format!("failed to extract {}", path.display()))?;
        let annotations = if cli.raw {
            set
        } else {
            AnnotationSet {
                yaml: set.yaml_fragments(),
                jsdoc: Vec::new(),
            }
        };
        results.push(FileAnnotations {
            source: path.to_string_lossy().to_string(),
            annotations,
        });
    }

    print!("{}", renderer.render(&results)?);
    Ok(())
}

/// Read and validate the options file.
fn load_options(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read definition: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;

    let opts = Options::new(&value)?;
    if swagdoc::has_empty_property(opts.definition()) {
        tracing::warn!(
            key = opts.definition_key(),
            "definition contains empty objects or arrays"
        );
    }
    Ok(value)
}

/// File extensions recognized as annotation sources.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "coffee", "litcoffee", "yaml", "yml",
];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_supported(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
