//! Member directory services.

pub mod service;

pub use service::{MemberService, NewMember};
