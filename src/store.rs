//! The array store: the single mutable resource behind the visualizer.
//!
//! [`ArrayStore`] holds the current array together with the state derived from
//! it (last sort time, last search). Each user action maps to one transition:
//!
//! | Transition | Replaces array | Clears time | Clears search |
//! |---|---|---|---|
//! | [`generate`](ArrayStore::generate) | yes | yes | yes |
//! | [`run_sort`](ArrayStore::run_sort) | yes (sorted copy) | no (sets it) | no |
//! | [`run_search`](ArrayStore::run_search) | no | no | no (sets it) |
//!
//! A transition that fails validation returns an error and changes nothing.

use crate::algo;
use crate::core::{Algorithm, StoreConfig, Value};
use crate::error::StoreError;
use crate::search::{self, SearchReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, warn};

/// Whether the store holds an array yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    Populated,
}

/// Draws `size` values uniformly from `[0, config.value_bound())`.
///
/// Fails with [`StoreError::InvalidSize`] if `size` is outside the configured range.
pub fn generate<R: Rng>(
    config: &StoreConfig,
    size: i64,
    rng: &mut R,
) -> Result<Vec<Value>, StoreError> {
    let len = config.validate_size(size)?;
    Ok(draw(config, len, rng))
}

fn draw<R: Rng>(config: &StoreConfig, len: usize, rng: &mut R) -> Vec<Value> {
    (0..len)
        .map(|_| rng.random_range(0..config.value_bound()))
        .collect()
}

/// Owns the current array and its derived display state.
///
/// # Examples
///
/// ```
/// use sortscope::{Algorithm, ArrayStore, StoreState};
///
/// let mut store = ArrayStore::seeded(7);
/// assert_eq!(store.state(), StoreState::Empty);
///
/// store.generate(50).unwrap();
/// store.run_sort(Algorithm::Insertion);
/// assert!(sortscope::is_sorted(store.array()));
///
/// assert!(store.generate(4).is_err());
/// assert_eq!(store.len(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct ArrayStore<R = StdRng> {
    config: StoreConfig,
    rng: R,
    array: Vec<Value>,
    elapsed: Option<Duration>,
    last_sort: Option<Algorithm>,
    search: Option<SearchReport>,
}

impl ArrayStore<StdRng> {
    /// Empty store with the default bounds and an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default(), StdRng::from_os_rng())
    }

    /// Empty store with the default bounds and a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(StoreConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl Default for ArrayStore<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ArrayStore<R> {
    pub fn with_config(config: StoreConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            array: Vec::new(),
            elapsed: None,
            last_sort: None,
            search: None,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn state(&self) -> StoreState {
        if self.array.is_empty() {
            StoreState::Empty
        } else {
            StoreState::Populated
        }
    }

    pub fn array(&self) -> &[Value] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Duration of the most recent sort, cleared by `generate`.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> Option<f64> {
        self.elapsed.map(|d| d.as_secs_f64() * 1000.0)
    }

    /// Most recent sort time in milliseconds with two decimals.
    pub fn elapsed_display(&self) -> Option<String> {
        self.elapsed_ms().map(|ms| format!("{ms:.2}"))
    }

    pub fn last_sort(&self) -> Option<Algorithm> {
        self.last_sort
    }

    /// Result of the most recent search, cleared by `generate`.
    pub fn search_report(&self) -> Option<&SearchReport> {
        self.search.as_ref()
    }

    /// Replaces the array with `size` fresh random values.
    ///
    /// On success the sort time and search results are cleared. On failure
    /// the previous array is kept.
    pub fn generate(&mut self, size: i64) -> Result<&[Value], StoreError> {
        let len = self.config.validate_size(size).inspect_err(|e| {
            warn!(size, error = %e, "rejected array generation");
        })?;
        Ok(self.regenerate(len))
    }

    /// Like [`generate`](Self::generate), but takes the raw text of the size field.
    ///
    /// Blank, non-numeric or fractional text fails with [`StoreError::InvalidSize`].
    pub fn generate_from_input(&mut self, text: &str) -> Result<&[Value], StoreError> {
        let len = self.config.parse_size(text).inspect_err(|e| {
            warn!(input = text, error = %e, "rejected array generation");
        })?;
        Ok(self.regenerate(len))
    }

    fn regenerate(&mut self, len: usize) -> &[Value] {
        self.array = draw(&self.config, len, &mut self.rng);
        self.elapsed = None;
        self.last_sort = None;
        self.search = None;

        debug!(len, "generated array");
        &self.array
    }

    /// Sorts the array with `algorithm`, replacing it with the result.
    ///
    /// Returns the time spent sorting. An empty store stays empty. The last
    /// search result is kept.
    pub fn run_sort(&mut self, algorithm: Algorithm) -> Duration {
        let run = algo::sort(algorithm, &self.array);

        debug!(
            algorithm = algorithm.name(),
            len = run.result.len(),
            elapsed_ms = run.elapsed_ms(),
            "sorted array"
        );

        self.array = run.result;
        self.elapsed = Some(run.elapsed);
        self.last_sort = Some(algorithm);
        run.elapsed
    }

    /// Like [`run_sort`](Self::run_sort), with the algorithm given by name.
    pub fn run_sort_named(&mut self, name: &str) -> Result<Duration, StoreError> {
        let algorithm = name.parse::<Algorithm>().inspect_err(|e| {
            warn!(error = %e, "rejected sort request");
        })?;
        Ok(self.run_sort(algorithm))
    }

    /// Searches the array for the value in `text` and records both outcomes.
    ///
    /// The array itself is not reordered.
    pub fn run_search(&mut self, text: &str) -> Result<&SearchReport, StoreError> {
        let report = search::search(&self.array, text).inspect_err(|e| {
            warn!(error = %e, "rejected search");
        })?;

        debug!(
            search_target = ?report.target,
            linear = %report.linear,
            binary = %report.binary,
            "searched array"
        );

        Ok(&*self.search.insert(report))
    }
}
