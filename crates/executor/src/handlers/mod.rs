//! Command handlers.
//!
//! Each handler takes the shared [`Context`](crate::Context) plus the
//! command's arguments and returns an [`Output`](crate::Output).
//!
//! - `stems`: stem forest rebuilds
//! - `matching`: matcher runs and the matcher listing
//! - `export`: matcher runs written to CSV

pub mod export;
pub mod matching;
pub mod stems;
