//! Hits and session reports
//!
//! The search core hands every hit to a `HitSink`; how hits are shown or
//! stored is up to the sink. Session totals are gathered into a
//! `SearchSummary`, which serializes to JSON.

use crate::catalog::ConstantCatalog;
use crate::error::SearchResult;
use crate::search::{Magnitude, MirrorPolicy, SearchConfig, WorkerReport};
use crate::units::{UNIT_ABBREVIATIONS, UNIT_NAMES};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

/// A dimensionless equation accepted by the hit policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Equation index within the search space
    pub index: u64,

    /// Exponent applied to each constant
    pub exponents: Vec<i64>,

    /// Constant symbols, parallel to `exponents`
    pub symbols: Vec<String>,

    pub magnitude: Magnitude,
}

impl Hit {
    /// Compact form listing only participating constants, e.g. `p u c^2`
    pub fn equation(&self) -> String {
        let mut out = String::new();
        for (symbol, &e) in self.symbols.iter().zip(&self.exponents) {
            if e == 0 {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(symbol);
            if e != 1 {
                let _ = write!(out, "^{}", e);
            }
        }
        out
    }
}

/// Two-row layout: exponents above symbols, then the magnitude
impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.exponents {
            write!(f, "{:>3} ", e)?;
        }
        writeln!(f)?;
        for symbol in &self.symbols {
            write!(f, "{:>3} ", symbol)?;
        }
        write!(f, " = {}", self.magnitude)
    }
}

/// Receiver for hits from concurrently running workers
pub trait HitSink: Sync {
    fn emit(&self, hit: Hit);
}

impl<F> HitSink for F
where
    F: Fn(Hit) + Sync,
{
    fn emit(&self, hit: Hit) {
        self(hit)
    }
}

/// Sink that keeps every hit in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    hits: Mutex<Vec<Hit>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Hits sorted by equation index
    pub fn into_hits(self) -> Vec<Hit> {
        let mut hits = self.hits.into_inner().unwrap_or_else(|e| e.into_inner());
        hits.sort_by_key(|h| h.index);
        hits
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Hit>> {
        // A poisoned lock still holds every hit pushed before the panic
        self.hits.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HitSink for CollectingSink {
    fn emit(&self, hit: Hit) {
        self.lock().push(hit);
    }
}

/// Totals for a finished session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSummary {
    pub constants: Vec<String>,
    pub max_exponent: i64,
    pub range: f64,
    pub any_range: bool,
    pub mirror: MirrorPolicy,
    pub num_equations: u64,

    pub candidates: u64,
    pub dimensionless: u64,
    pub hits: u64,
    pub overflows: u64,
    pub underflows: u64,

    pub elapsed_ms: u128,
    pub workers: Vec<WorkerReport>,
}

impl SearchSummary {
    pub fn new(
        catalog: &ConstantCatalog,
        config: &SearchConfig,
        num_equations: u64,
        workers: Vec<WorkerReport>,
        elapsed_ms: u128,
    ) -> Self {
        Self {
            constants: catalog.symbols().into_iter().map(String::from).collect(),
            max_exponent: config.max_exponent,
            range: config.range,
            any_range: config.any_range,
            mirror: config.mirror,
            num_equations,
            candidates: workers.iter().map(|w| w.candidates).sum(),
            dimensionless: workers.iter().map(|w| w.dimensionless).sum(),
            hits: workers.iter().map(|w| w.hits).sum(),
            overflows: workers.iter().map(|w| w.overflows).sum(),
            underflows: workers.iter().map(|w| w.underflows).sum(),
            elapsed_ms,
            workers,
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SearchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write pretty JSON to `path`
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> SearchResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} dimensionless of {} equations ({} overflowed, {} underflowed) in {} ms",
            self.hits,
            self.dimensionless,
            self.candidates,
            self.overflows,
            self.underflows,
            self.elapsed_ms
        )
    }
}

/// Table of search parameters and constants, printed before a search
pub fn parameter_table(catalog: &ConstantCatalog, config: &SearchConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MaxExponent={}", config.max_exponent);
    if config.any_range {
        let _ = writeln!(out, "MagnitudeDeviation=any");
    } else {
        let _ = writeln!(out, "MagnitudeDeviation={}", config.range);
    }
    out.push('\n');

    let _ = write!(out, "{:<5} {:<12}", "SYM", "MAGNITUDE");
    for unit in UNIT_ABBREVIATIONS {
        let _ = write!(out, " {:>3}", unit);
    }
    out.push_str(" DESCRIPTION\n");

    for constant in catalog {
        let _ = write!(out, "{:<5} {:<12.5e}", constant.symbol, constant.magnitude);
        for power in constant.units.iter() {
            let _ = write!(out, " {:>3}", power);
        }
        let _ = writeln!(out, " {}", constant.description);
    }

    out.push_str("\nUnits:");
    for (abbreviation, name) in UNIT_ABBREVIATIONS.iter().zip(UNIT_NAMES) {
        let _ = write!(out, " {}={}", abbreviation, name);
    }
    out.push('\n');
    out
}
