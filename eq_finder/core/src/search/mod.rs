//! Search module - exhaustive enumeration of exponent vectors
//!
//! Index space -> exponent vector -> unit filter -> magnitude -> hit policy,
//! split across independent workers.

pub mod config;
pub mod filter;
pub mod indexer;
pub mod magnitude;
pub mod partition;
pub mod policy;
pub mod session;
pub mod worker;

pub use config::{MirrorPolicy, SearchConfig};
pub use filter::{is_dimensionless, net_units};
pub use indexer::{EquationIndexer, EquationSpace, ExponentVector};
pub use magnitude::{evaluate, log_magnitude, Magnitude};
pub use partition::{partition, Partition};
pub use policy::{HitPolicy, Outcome};
pub use session::SearchSession;
pub use worker::{SearchWorker, WorkerReport, WorkerState};
