//! Member directory service — registration and listing.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use rosterhub_auth::password::PasswordHasher;
use rosterhub_core::error::AppError;
use rosterhub_core::result::AppResult;
use rosterhub_database::repositories::member::MemberRepository;
use rosterhub_entity::member::{CreateMember, Member, MemberSummary};

/// Data for registering a new member, with the password still in
/// plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password; hashed before storage.
    #[serde(skip_serializing)]
    pub password: String,
    /// Self-reported gender.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Free-text biography.
    pub bio: String,
    /// Skill tags.
    pub skills: Vec<String>,
}

/// Manages the member directory mini-app.
#[derive(Clone)]
pub struct MemberService {
    /// Member repository.
    member_repo: Arc<MemberRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for MemberService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberService").finish()
    }
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(member_repo: Arc<MemberRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { member_repo, hasher }
    }

    /// Registers a new member.
    ///
    /// The password is hashed before storage; the email must be unique.
    pub async fn register(&self, data: NewMember) -> AppResult<Member> {
        if self.member_repo.email_exists(&data.email).await? {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let member = self
            .member_repo
            .create(&CreateMember {
                name: data.name,
                email: data.email,
                password_hash,
                gender: data.gender,
                date_of_birth: data.date_of_birth,
                bio: data.bio,
                skills: data.skills,
            })
            .await?;

        info!(member_id = %member.id, email = %member.email, "Member registered");

        Ok(member)
    }

    /// Lists all members, newest first.
    pub async fn list(&self) -> AppResult<Vec<MemberSummary>> {
        self.member_repo.list_summaries().await
    }
}
