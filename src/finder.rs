//! Largest blob finder
//!
//! Runs the pipeline end to end: list packed blobs, select the ones worth
//! reporting, resolve their paths and hand back a [`Report`].

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::debug;

use crate::model::SizeMetric;
use crate::report::Report;
use crate::repository::{resolve_paths, GitRunner, PackListing};
use crate::selector::{SelectionCriterion, SortedBlobs};
use crate::util::{format_size, to_kb};

/// Everything a run needs to know, built once from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    pub criterion: SelectionCriterion,
    pub metric: SizeMetric,
    /// Print status lines and progress bars on stderr
    pub verbose: bool,
    /// Print per-phase timings on stderr
    pub profile: bool,
}

impl FinderConfig {
    pub fn new(criterion: SelectionCriterion, metric: SizeMetric) -> Self {
        Self {
            criterion,
            metric,
            verbose: true,
            profile: false,
        }
    }

    /// No status output, used by tests and benchmarks
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    pub fn profiling(mut self) -> Self {
        self.profile = true;
        self
    }
}

/// Finds the largest blobs of a repository
pub struct Finder {
    config: FinderConfig,
}

impl Finder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self, git: &impl GitRunner) -> Result<Report> {
        let total_start = Instant::now();
        let metric = self.config.metric;

        match self.config.criterion {
            SelectionCriterion::Threshold(bytes) => {
                self.log(&format!("Finding objects larger than {}k...", to_kb(bytes)))
            }
            SelectionCriterion::Count(n) => self.log(&format!("Finding the {} largest objects...", n)),
        }

        // Phase 1: List packed blobs
        let phase_start = Instant::now();
        let listing = PackListing::load(git)
            .await
            .context("Failed to list packed objects")?;
        self.profile_phase(&format!("List packed blobs ({} blobs)", listing.len()), phase_start);
        debug!(
            blobs = listing.len(),
            total = %format_size(listing.total_size(metric)),
            metric = metric.label(),
            "loaded pack listing"
        );

        // Phase 2: Sort and select
        let phase_start = Instant::now();
        let sorted = SortedBlobs::new(listing.into_blobs(), metric);
        let available = sorted.len();
        let mut selected = sorted.select(self.config.criterion);
        self.profile_phase(
            &format!("Select ({} of {} blobs by {})", selected.len(), available, metric.label()),
            phase_start,
        );

        // Phase 3: Resolve paths
        if !selected.is_empty() {
            self.log("Finding object paths");
            let phase_start = Instant::now();
            let stats = resolve_paths(git, &mut selected, self.config.verbose)
                .await
                .context("Failed to resolve object paths")?;
            self.profile_phase(
                &format!(
                    "Resolve paths ({} resolved, {} unreachable, {} lines)",
                    stats.resolved, stats.unresolved, stats.lines_scanned
                ),
                phase_start,
            );
        }

        if self.config.profile {
            eprintln!("[PROFILE] TOTAL: {:?}", total_start.elapsed());
        }

        Ok(Report::new(selected, metric))
    }

    fn log(&self, msg: &str) {
        if self.config.verbose {
            eprintln!("{}", msg);
        }
    }

    fn profile_phase(&self, name: &str, start: Instant) {
        if self.config.profile {
            eprintln!("[PROFILE] {}: {:?}", name, start.elapsed());
        }
    }
}
