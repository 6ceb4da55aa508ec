//! Search sessions
//!
//! A session checks the configuration against the catalog, splits the index
//! space, runs one worker per partition on its own thread and gathers the
//! worker reports once every thread has been joined.

use super::config::SearchConfig;
use super::indexer::EquationSpace;
use super::partition::{partition, Partition};
use super::worker::{SearchWorker, WorkerReport};
use crate::catalog::ConstantCatalog;
use crate::error::{SearchError, SearchResult};
use crate::report::{CollectingSink, Hit, HitSink, SearchSummary};
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// A validated, ready-to-run search
#[derive(Debug)]
pub struct SearchSession<'a> {
    catalog: &'a ConstantCatalog,
    config: SearchConfig,
    space: EquationSpace,
    partitions: Vec<Partition>,
}

impl<'a> SearchSession<'a> {
    /// Validate `config` for `catalog` and lay out the partitions
    ///
    /// Nothing is searched here; every fatal error surfaces before any
    /// worker exists.
    pub fn new(catalog: &'a ConstantCatalog, config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(SearchError::EmptyCatalog);
        }

        let space = EquationSpace::new(catalog.len(), &config)?;
        let partitions = partition(space.num_equations(), config.workers);

        Ok(Self {
            catalog,
            config,
            space,
            partitions,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn space(&self) -> &EquationSpace {
        &self.space
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Run every worker to completion
    ///
    /// Hits reach `sink` as they are found; order across workers is not
    /// defined.
    pub fn run<S: HitSink>(&self, sink: &S) -> SearchResult<SearchSummary> {
        let started = Instant::now();
        info!(
            constants = self.catalog.len(),
            max_exponent = self.config.max_exponent,
            range = self.config.range,
            any_range = self.config.any_range,
            equations = self.space.num_equations(),
            workers = self.partitions.len(),
            "search started"
        );

        let reports = thread::scope(|scope| -> SearchResult<Vec<WorkerReport>> {
            let mut handles = Vec::with_capacity(self.partitions.len());

            for &part in &self.partitions {
                let worker = SearchWorker::new(part, self.catalog, &self.space, &self.config);
                let handle = thread::Builder::new()
                    .name(format!("eqfinder-worker-{}", part.worker))
                    .spawn_scoped(scope, move || worker.run(sink))
                    .map_err(SearchError::Spawn)?;
                handles.push((part.worker, handle));
            }

            handles
                .into_iter()
                .map(|(id, handle)| handle.join().map_err(|_| SearchError::WorkerPanicked(id)))
                .collect()
        })?;

        let summary = SearchSummary::new(
            self.catalog,
            &self.config,
            self.space.num_equations(),
            reports,
            started.elapsed().as_millis(),
        );

        if summary.overflows > 0 {
            warn!(overflows = summary.overflows, "some dimensionless equations overflowed");
        }
        info!(
            hits = summary.hits,
            candidates = summary.candidates,
            elapsed_ms = summary.elapsed_ms as u64,
            "search finished"
        );

        Ok(summary)
    }

    /// Run and return the hits sorted by equation index
    pub fn collect(&self) -> SearchResult<(Vec<Hit>, SearchSummary)> {
        let sink = CollectingSink::new();
        let summary = self.run(&sink)?;
        Ok((sink.into_hits(), summary))
    }
}
