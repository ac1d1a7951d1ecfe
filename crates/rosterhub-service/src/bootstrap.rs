//! Startup seeding — provisions the configured admin login on first boot.

use tracing::{debug, info, warn};

use rosterhub_auth::password::PasswordHasher;
use rosterhub_core::config::BootstrapConfig;
use rosterhub_core::result::AppResult;
use rosterhub_database::repositories::user::UserRepository;
use rosterhub_entity::user::CreateUser;

/// Seeds the bootstrap admin user if it does not exist yet.
///
/// Users are never created through the roster API, so a fresh deployment
/// gets its one login from here. Re-running against an existing user is
/// a no-op.
pub async fn seed_admin(
    user_repo: &UserRepository,
    hasher: &PasswordHasher,
    config: &BootstrapConfig,
) -> AppResult<()> {
    if !config.enabled {
        debug!("Bootstrap seeding disabled");
        return Ok(());
    }

    if user_repo
        .find_by_username(&config.admin_username)
        .await?
        .is_some()
    {
        debug!(username = %config.admin_username, "Bootstrap admin already exists");
        return Ok(());
    }

    let password_hash = hasher.hash_password(&config.admin_password)?;
    let user = user_repo
        .create(&CreateUser {
            username: config.admin_username.clone(),
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, username = %user.username, "Seeded bootstrap admin user");

    if config.admin_password == "admin123" {
        warn!("Bootstrap admin uses the default password; change it in production");
    }

    Ok(())
}
