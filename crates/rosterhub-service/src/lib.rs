//! # rosterhub-service
//!
//! Business logic service layer for RosterHub. Each service orchestrates
//! repositories and authentication components to implement application-level
//! use cases: roster upload and synchronization, record search and stats,
//! and the member directory.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod bootstrap;
pub mod context;
pub mod member;
pub mod roster;

pub use context::RequestContext;
pub use member::{MemberService, NewMember};
pub use roster::{RosterParser, RosterService, plan_sync};
