//! Search workers
//!
//! A worker owns one partition and walks it sequentially:
//! `Initializing -> Searching -> Done`. Workers never touch each other's
//! state; the catalog and configuration are shared read-only.

use super::config::SearchConfig;
use super::filter::is_dimensionless;
use super::indexer::{EquationIndexer, EquationSpace};
use super::magnitude::{evaluate, Magnitude};
use super::partition::Partition;
use super::policy::{HitPolicy, Outcome};
use crate::catalog::ConstantCatalog;
use crate::report::{Hit, HitSink};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Initializing,
    Searching,
    Done,
}

/// Counters for one finished worker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerReport {
    pub worker: usize,
    pub start: u64,
    pub stop: u64,

    /// Candidates examined
    pub candidates: u64,

    /// Candidates whose units cancel
    pub dimensionless: u64,

    /// Hits emitted
    pub hits: u64,

    /// Dimensionless candidates whose magnitude overflowed
    pub overflows: u64,

    /// Dimensionless candidates whose magnitude underflowed
    pub underflows: u64,

    pub elapsed_ms: u128,
}

/// Sequential search over one partition
pub struct SearchWorker<'a> {
    partition: Partition,
    catalog: &'a ConstantCatalog,
    policy: HitPolicy,
    indexer: EquationIndexer,
    state: WorkerState,
    progress_interval: u64,
    report: WorkerReport,
}

impl<'a> SearchWorker<'a> {
    pub fn new(
        partition: Partition,
        catalog: &'a ConstantCatalog,
        space: &EquationSpace,
        config: &SearchConfig,
    ) -> Self {
        Self {
            partition,
            catalog,
            policy: HitPolicy::from_config(config),
            indexer: space.indexer(partition),
            state: WorkerState::Initializing,
            progress_interval: config.progress_interval,
            report: WorkerReport {
                worker: partition.worker,
                start: partition.start,
                stop: partition.stop,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Classify the equation under the cursor
    pub fn examine(&self) -> Outcome {
        let constants = self.catalog.as_slice();
        let exponents = self.indexer.exponents();

        if !is_dimensionless(constants, exponents) {
            return Outcome::Rejected;
        }
        if exponents.iter().all(|&e| e == 0) {
            return Outcome::Trivial;
        }
        self.policy.judge(evaluate(constants, exponents))
    }

    /// Run the partition to completion, emitting hits to `sink`
    pub fn run<S: HitSink + ?Sized>(mut self, sink: &S) -> WorkerReport {
        let started = Instant::now();

        loop {
            match self.state {
                WorkerState::Initializing => {
                    debug!(
                        worker = self.partition.worker,
                        start = self.partition.start,
                        stop = self.partition.stop,
                        "worker started"
                    );
                    if self.partition.is_empty() {
                        self.state = WorkerState::Done;
                    } else {
                        self.indexer.reset_from(self.partition.start);
                        self.state = WorkerState::Searching;
                    }
                }
                WorkerState::Searching => {
                    let outcome = self.examine();
                    self.record(outcome, sink);
                    self.log_progress();

                    if !self.indexer.advance() {
                        self.state = WorkerState::Done;
                    }
                }
                WorkerState::Done => break,
            }
        }

        self.report.elapsed_ms = started.elapsed().as_millis();
        debug!(
            worker = self.report.worker,
            candidates = self.report.candidates,
            dimensionless = self.report.dimensionless,
            hits = self.report.hits,
            overflows = self.report.overflows,
            underflows = self.report.underflows,
            "worker finished"
        );
        self.report
    }

    fn record<S: HitSink + ?Sized>(&mut self, outcome: Outcome, sink: &S) {
        self.report.candidates += 1;

        match outcome {
            Outcome::Rejected => {}
            Outcome::Trivial | Outcome::Miss => self.report.dimensionless += 1,
            Outcome::Overflow => {
                self.report.dimensionless += 1;
                self.report.overflows += 1;
                trace!(index = self.indexer.index(), "magnitude overflow");
            }
            Outcome::Underflow => {
                self.report.dimensionless += 1;
                self.report.underflows += 1;
                trace!(index = self.indexer.index(), "magnitude underflow");
            }
            Outcome::Hit(magnitude) => {
                self.report.dimensionless += 1;
                self.report.hits += 1;
                if magnitude.is_overflow() {
                    self.report.overflows += 1;
                } else if magnitude.is_underflow() {
                    self.report.underflows += 1;
                }
                sink.emit(self.hit(magnitude));
            }
        }
    }

    fn hit(&self, magnitude: Magnitude) -> Hit {
        Hit {
            index: self.indexer.index(),
            exponents: self.indexer.exponents().to_vec(),
            symbols: self.catalog.iter().map(|c| c.symbol.clone()).collect(),
            magnitude,
        }
    }

    fn log_progress(&self) {
        if self.progress_interval == 0 || self.report.candidates % self.progress_interval != 0 {
            return;
        }
        let percent = 100.0 * self.report.candidates as f64 / self.partition.len() as f64;
        debug!(
            worker = self.partition.worker,
            percent,
            hits = self.report.hits,
            "progress"
        );
    }
}
