//! Roster upload pipeline — file parsing, sync planning, and database apply.

pub mod parser;
pub mod reconciler;
pub mod service;

pub use parser::RosterParser;
pub use reconciler::plan_sync;
pub use service::RosterService;
