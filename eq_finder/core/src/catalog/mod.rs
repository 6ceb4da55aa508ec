//! Constant catalogs
//!
//! A catalog is the ordered set of constants a search session works with.
//! Catalogs come from the line-oriented `eqfinder.txt` format or from JSON,
//! and are validated once on construction so the search core can treat
//! them as trusted, read-only input.

pub mod json;
pub mod text;

use crate::units::UnitVector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Maximum number of constants a catalog may hold
pub const MAX_CONSTANTS: usize = 100;

/// Errors raised while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("JSON catalog error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Constant {symbol} has invalid magnitude {magnitude} (must be finite and > 0)")]
    InvalidMagnitude { symbol: String, magnitude: f64 },

    #[error("Constant at position {0} has an empty symbol")]
    EmptySymbol(usize),

    #[error("Duplicate constant symbol: {0}")]
    DuplicateSymbol(String),

    #[error("Too many constants: {0} (limit is {MAX_CONSTANTS})")]
    TooManyConstants(usize),

    #[error("Unknown constant symbol: {0}")]
    UnknownSymbol(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A physical constant with its dimensional signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    /// Short identifier used when printing equations
    pub symbol: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Numeric value in base units (strictly positive)
    pub magnitude: f64,

    /// Powers of each base unit
    pub units: UnitVector,
}

impl Constant {
    pub fn new(symbol: impl Into<String>, magnitude: f64, units: impl Into<UnitVector>) -> Self {
        Self {
            symbol: symbol.into(),
            description: String::new(),
            magnitude,
            units: units.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Ordered, validated set of constants
#[derive(Debug, Clone, Default)]
pub struct ConstantCatalog {
    constants: Vec<Constant>,
    by_symbol: FxHashMap<String, usize>,
}

impl ConstantCatalog {
    /// Build a catalog, rejecting bad magnitudes, empty or repeated symbols
    pub fn new(constants: Vec<Constant>) -> CatalogResult<Self> {
        if constants.len() > MAX_CONSTANTS {
            return Err(CatalogError::TooManyConstants(constants.len()));
        }

        let mut by_symbol = FxHashMap::default();
        for (position, constant) in constants.iter().enumerate() {
            if constant.symbol.is_empty() {
                return Err(CatalogError::EmptySymbol(position));
            }
            if !(constant.magnitude.is_finite() && constant.magnitude > 0.0) {
                return Err(CatalogError::InvalidMagnitude {
                    symbol: constant.symbol.clone(),
                    magnitude: constant.magnitude,
                });
            }
            if by_symbol.insert(constant.symbol.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSymbol(constant.symbol.clone()));
            }
        }

        Ok(Self { constants, by_symbol })
    }

    /// Load a catalog file, choosing the format from the extension
    ///
    /// `.json` files use the JSON format, everything else the text format.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<LoadedCatalog> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let loaded = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json::parse(&contents)?
        } else {
            text::parse(&contents)?
        };

        tracing::debug!(
            path = %path.display(),
            constants = loaded.catalog.len(),
            "loaded constant catalog"
        );
        for constant in loaded.catalog.iter() {
            tracing::trace!(
                symbol = %constant.symbol,
                magnitude = constant.magnitude,
                units = %constant.units,
                "constant"
            );
        }

        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Constant> {
        self.constants.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constant> {
        self.constants.iter()
    }

    pub fn as_slice(&self) -> &[Constant] {
        &self.constants
    }

    /// Look up a constant by symbol
    pub fn by_symbol(&self, symbol: &str) -> Option<&Constant> {
        self.by_symbol.get(symbol).map(|&i| &self.constants[i])
    }

    /// Symbols in catalog order
    pub fn symbols(&self) -> Vec<&str> {
        self.constants.iter().map(|c| c.symbol.as_str()).collect()
    }

    /// Restrict the active set to the named constants
    ///
    /// The result keeps catalog order regardless of the order of `symbols`.
    pub fn select<S: AsRef<str>>(&self, symbols: &[S]) -> CatalogResult<ConstantCatalog> {
        let mut positions = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let symbol = symbol.as_ref();
            let position = *self
                .by_symbol
                .get(symbol)
                .ok_or_else(|| CatalogError::UnknownSymbol(symbol.to_string()))?;
            if !positions.contains(&position) {
                positions.push(position);
            }
        }
        positions.sort_unstable();

        ConstantCatalog::new(positions.into_iter().map(|i| self.constants[i].clone()).collect())
    }
}

impl<'a> IntoIterator for &'a ConstantCatalog {
    type Item = &'a Constant;
    type IntoIter = std::slice::Iter<'a, Constant>;

    fn into_iter(self) -> Self::IntoIter {
        self.constants.iter()
    }
}

/// A catalog plus the search overrides found alongside it
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: ConstantCatalog,

    /// `MaxExponent` directive, if present
    pub max_exponent: Option<i64>,

    /// `MagnitudeDeviation` directive, if present
    pub magnitude_deviation: Option<f64>,
}
