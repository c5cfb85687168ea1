//! apidefine — render `@apiDefine` blocks from JSON definition files.
//!
//! - **stdin mode**: `apidefine < definitions.json`
//! - **file mode**: `apidefine -o src/apidoc.js defs/*.json`
//!
//! Each input holds one definition object or an array of them. Blocks are
//! written in file order, then in the order they appear within each file.

use anyhow::{Context, Result};
use apidefine::{DefinitionSet, RawDocument};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "apidefine",
    about = "Generate apidoc @apiDefine comment blocks from JSON definitions"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only render definitions in this group
    #[arg(short = 'g', long)]
    group: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut set = if cli.files.is_empty() {
        stdin_mode()?
    } else {
        file_mode(&cli.files)?
    };

    if let Some(ref group) = cli.group {
        set.retain_group(group);
    }
    debug!(definitions = set.len(), "rendering");

    let mut rendered = Vec::new();
    set.render(&mut rendered)
        .context("failed to render definitions")?;

    match cli.output {
        Some(ref path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(&rendered).context("failed to write stdout")?;
        }
    }

    Ok(())
}

/// Log to stderr so rendered blocks on stdout stay clean.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "apidefine=warn",
        1 => "apidefine=debug",
        _ => "apidefine=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// stdin mode: one definition document, errors are fatal.
fn stdin_mode() -> Result<DefinitionSet> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc: RawDocument =
        serde_json::from_str(&input).context("failed to parse definitions from stdin")?;
    let mut set = DefinitionSet::new();
    set.extend(doc.into_definitions()?);
    Ok(set)
}

/// file mode: unreadable or malformed files are skipped, unsupported kinds
/// are fatal.
fn file_mode(patterns: &[String]) -> Result<DefinitionSet> {
    let mut set = DefinitionSet::new();

    for path in expand_globs(patterns)? {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let doc: RawDocument = match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let definitions = doc
            .into_definitions()
            .with_context(|| format!("invalid definition in {}", path.display()))?;
        debug!(file = %path.display(), count = definitions.len(), "loaded");
        set.extend(definitions);
    }

    Ok(set)
}

/// File extensions recognized as definition files.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Resolve CLI inputs to definition files. Each input is a file, a directory
/// (its `.json` files, one level deep) or a glob pattern.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
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
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Render order follows path order.
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
