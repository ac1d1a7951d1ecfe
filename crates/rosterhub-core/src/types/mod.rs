//! Core type definitions used across the RosterHub workspace.

pub mod filter;

pub use filter::RecordFilter;
