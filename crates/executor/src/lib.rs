//! Command execution layer for concept matching
//!
//! Every operation is a [`Command`] run by an [`Executor`] and answered with
//! an [`Output`]. The [`Analyzer`] facade wraps the executor with typed
//! methods.
//!
//! ```
//! use std::sync::Arc;
//! use conceptmatch_core::{MatcherKind, ProjectId};
//! use conceptmatch_executor::{Analyzer, MemoryPersistence};
//!
//! let snapshot = r#"{
//!     "concepts": [{ "id": 1, "name": "BatteryPack",
//!                    "attributes": [{ "name": "voltage", "identifier": "V" }] }],
//!     "methods": [{ "id": 10, "name": "getVoltage" }]
//! }"#;
//! let store = MemoryPersistence::new();
//! store.load_json(ProjectId(1), snapshot).unwrap();
//!
//! let analyzer = Analyzer::new(Arc::new(store));
//! analyzer.rebuild_stem_trees(ProjectId(1)).unwrap();
//! let matches = analyzer
//!     .compute_matches(ProjectId(1), MatcherKind::Overlap, Some(0.1))
//!     .unwrap();
//! assert_eq!(matches.len(), 1);
//! ```

pub mod api;
pub mod bridge;
pub mod command;
pub mod convert;
pub mod error;
pub mod executor;
pub mod export;
pub mod handlers;
pub mod output;
pub mod persistence;

pub use api::Analyzer;
pub use bridge::Context;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use export::{export_matches_csv, CSV_HEADER};
pub use output::{ExportSummary, Output, StemCounts};
pub use persistence::{MemoryPersistence, Persistence, ProjectSnapshot};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
