//! Equation Finder Core
//!
//! Exhaustive search for dimensionless products of physical constants

pub mod units;
pub mod catalog; // Constant catalogs (text and JSON loaders)
pub mod search;  // Indexer, unit filter, evaluator, partitions, workers
pub mod report;  // Hits, session summaries, parameter table
pub mod error;

pub use units::{UnitVector, NUM_UNITS, UNIT_NAMES};
pub use catalog::{CatalogError, CatalogResult, Constant, ConstantCatalog, LoadedCatalog};
pub use search::{
    EquationIndexer, ExponentVector, HitPolicy, Magnitude, MirrorPolicy, Outcome, Partition,
    SearchConfig, SearchSession, SearchWorker, WorkerReport, WorkerState,
};
pub use report::{CollectingSink, Hit, HitSink, SearchSummary};
pub use error::{ConfigError, SearchError, SearchResult};
