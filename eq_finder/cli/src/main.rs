//! Equation Finder CLI
//!
//! Loads a constant catalog, searches every exponent combination in
//! parallel and prints the dimensionless equations close to unity.

use anyhow::{Context, Result};
use clap::Parser;
use eq_finder_core::report::parameter_table;
use eq_finder_core::{ConstantCatalog, Hit, MirrorPolicy, SearchConfig, SearchSession};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "eqfinder")]
#[command(about = "Find dimensionless products of physical constants")]
struct Args {
    /// Constant catalog (text format, or JSON with a .json extension)
    #[arg(default_value = "eqfinder.txt")]
    catalog: PathBuf,

    /// Largest exponent to try (overrides the catalog's MaxExponent)
    #[arg(long)]
    max_exponent: Option<i64>,

    /// Hit window (1/RANGE, RANGE) (overrides the catalog's MagnitudeDeviation)
    #[arg(long)]
    range: Option<f64>,

    /// Report every dimensionless equation regardless of magnitude
    #[arg(long)]
    any_range: bool,

    /// Number of parallel search workers
    #[arg(long, default_value_t = 16)]
    workers: usize,

    /// Search the full space instead of skipping sign-mirrored equations
    #[arg(long)]
    full_space: bool,

    /// Only search these constants (comma-separated symbols)
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Write the session summary as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Do not print individual hits
    #[arg(long)]
    quiet: bool,
}

/// Prints hits to stdout as they arrive
struct PrintSink;

impl eq_finder_core::HitSink for PrintSink {
    fn emit(&self, hit: Hit) {
        // Holding the lock keeps each hit's lines together
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "\n{}", hit);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_writer(io::stderr).with_env_filter(filter).with_target(false).init();

    let loaded = ConstantCatalog::load(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;

    let mut config = SearchConfig::default();
    config.apply_catalog_overrides(&loaded);
    apply_overrides(&mut config, &args);

    let catalog = if args.only.is_empty() {
        loaded.catalog
    } else {
        loaded.catalog.select(&args.only).context("selecting constants")?
    };

    print!("{}", parameter_table(&catalog, &config));

    let session = SearchSession::new(&catalog, config).context("invalid search setup")?;
    info!(
        equations = session.space().num_equations(),
        workers = session.partitions().len(),
        mirror = ?session.config().mirror,
        "searching"
    );

    let summary = if args.quiet {
        session.run(&|_hit: Hit| {})?
    } else {
        session.run(&PrintSink)?
    };

    println!("\nFinished: {}", summary);

    if let Some(path) = &args.json {
        summary
            .to_json_file(path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}

/// Command-line flags win over catalog directives
fn apply_overrides(config: &mut SearchConfig, args: &Args) {
    if let Some(max_exponent) = args.max_exponent {
        config.max_exponent = max_exponent;
    }
    if let Some(range) = args.range {
        config.range = range;
    }
    if args.any_range {
        config.any_range = true;
    }
    if args.full_space {
        config.mirror = MirrorPolicy::Full;
    }
    config.workers = args.workers;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_catalog() {
        let args = Args::parse_from([
            "eqfinder",
            "consts.txt",
            "--max-exponent",
            "3",
            "--range",
            "1.5",
            "--full-space",
            "--workers",
            "2",
            "--only",
            "p,u,c",
        ]);

        let mut config = SearchConfig { max_exponent: 2, range: 1.01, ..Default::default() };
        apply_overrides(&mut config, &args);

        assert_eq!(config.max_exponent, 3);
        assert_eq!(config.range, 1.5);
        assert_eq!(config.mirror, MirrorPolicy::Full);
        assert_eq!(config.workers, 2);
        assert!(!config.any_range);
        assert_eq!(args.only, vec!["p", "u", "c"]);
    }

    #[test]
    fn test_defaults_keep_catalog_values() {
        let args = Args::parse_from(["eqfinder"]);
        let mut config = SearchConfig { max_exponent: 2, range: 1.01, ..Default::default() };
        apply_overrides(&mut config, &args);

        assert_eq!(args.catalog, PathBuf::from("eqfinder.txt"));
        assert_eq!(config.max_exponent, 2);
        assert_eq!(config.range, 1.01);
        assert_eq!(config.workers, 16);
        assert_eq!(config.mirror, MirrorPolicy::Canonical);
    }
}
