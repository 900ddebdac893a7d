//! CLI operation mode handlers.
//!
//! - [`generate`]: rebuild and persist the snapshot
//! - [`show`]: print the stored snapshot's display projection
//!
//! Output formatting utilities are in [`output`].

pub mod generate;
pub mod output;
pub mod show;
