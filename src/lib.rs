//! # Sortscope
//!
//! `sortscope` is the engine behind a sorting-algorithm visualizer: it generates random
//! arrays of small integers, sorts them with one of five classic comparison sorts while
//! timing the call, and answers linear and binary search queries over them.
//!
//! The presentation layer (drawing bars, reading buttons and text fields) lives outside
//! this crate. It drives an [`ArrayStore`] and renders whatever the store holds.
//!
//! ## Algorithms
//!
//! | Algorithm | Time | Stable |
//! |---|---|---|
//! | [`bubble_sort`] | O(N²) | yes |
//! | [`selection_sort`] | O(N²) | no |
//! | [`merge_sort`] | O(N log N) | no (ties favor the right run) |
//! | [`quick_sort`] | O(N log N) avg, O(N²) worst | no |
//! | [`insertion_sort`] | O(N²), O(N) on sorted input | yes |
//!
//! Every sort returns a new vector and leaves its input untouched.
//!
//! ## Usage
//!
//! ### Driving the store
//!
//! ```rust
//! use sortscope::{Algorithm, ArrayStore, SearchOutcome};
//!
//! let mut store = ArrayStore::seeded(42);
//! store.generate(100).unwrap();
//!
//! store.run_sort(Algorithm::Quick);
//! println!("sorted in {} ms", store.elapsed_display().unwrap());
//!
//! let report = store.run_search("250").unwrap();
//! if let SearchOutcome::Found(i) = report.linear {
//!     assert_eq!(store.array()[i], 250);
//! }
//! ```
//!
//! ### Calling the algorithms directly
//!
//! ```rust
//! use sortscope::{sort, search, Algorithm, SearchOutcome};
//!
//! let data = [5, 3, 8, 1, 9, 2];
//!
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(sort(algorithm, &data).result, vec![1, 2, 3, 5, 8, 9]);
//! }
//!
//! let report = search(&data, "7").unwrap();
//! assert_eq!(report.linear, SearchOutcome::NotFound);
//! assert_eq!(report.binary, SearchOutcome::NotFound);
//! ```
//!
//! ## Logging
//!
//! Store transitions emit [`tracing`] events: `debug` for completed transitions and
//! `warn` for rejected input. Install any subscriber to see them.

pub mod algo;
pub mod core;
pub mod error;
pub mod search;
pub mod store;

pub use crate::algo::{
    SortRun, bubble_sort, insertion_sort, is_sorted, merge_sort, quick_sort, selection_sort, sort,
};
pub use crate::core::{Algorithm, SearchOutcome, StoreConfig, Value};
pub use crate::error::StoreError;
pub use crate::search::{SearchReport, binary_search, linear_search, search};
pub use crate::store::{ArrayStore, StoreState, generate};

pub mod prelude {
    pub use crate::algo::{SortRun, sort};
    pub use crate::core::{Algorithm, SearchOutcome, StoreConfig, Value};
    pub use crate::error::StoreError;
    pub use crate::search::{SearchReport, search};
    pub use crate::store::{ArrayStore, StoreState};
}
