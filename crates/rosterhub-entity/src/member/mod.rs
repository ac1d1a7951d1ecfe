//! Member directory domain entities.

pub mod model;

pub use model::{CreateMember, Member, MemberSummary};
