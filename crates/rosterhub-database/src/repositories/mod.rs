//! Repository implementations for all RosterHub entities.

pub mod member;
pub mod record;
pub mod session;
pub mod user;

pub use member::MemberRepository;
pub use record::RecordRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
