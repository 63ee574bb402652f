//! Authentication and user administration over the users table.

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use stockroom_infra::{DataPaths, StorageError, load_table, save_table};

use crate::password::{hash_password, verify_password};
use crate::roles::Role;
use crate::user::{Identity, User};

/// Access-guard error.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or a deactivated account. Collapsed into one
    /// variant so login responses don't reveal which usernames exist.
    #[error("unknown or inactive user")]
    UnknownUser,

    #[error("wrong password")]
    WrongPassword,

    #[error("username already taken: {username}")]
    UsernameTaken { username: String },

    #[error("user not found: {username}")]
    UserNotFound { username: String },

    #[error("only an active admin may perform this action")]
    NotAuthorized,

    #[error("an admin cannot deactivate their own account")]
    CannotDeactivateSelf,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Input for account creation. The password is hashed on the way in.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

/// File-backed user store and login front door.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    path: PathBuf,
}

impl AccessGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.users())
    }

    fn load(&self) -> Result<Vec<User>, StorageError> {
        load_table(&self.path)
    }

    fn save(&self, users: &[User]) -> Result<(), StorageError> {
        save_table(&self.path, users)
    }

    /// All accounts, active or not.
    pub fn list(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.load()?)
    }

    /// Create an account. Usernames are unique across active and
    /// deactivated accounts alike.
    pub fn create_user(&self, new: NewUser) -> Result<User, AuthError> {
        let mut users = self.load()?;
        if users.iter().any(|u| u.username == new.username) {
            return Err(AuthError::UsernameTaken {
                username: new.username,
            });
        }

        let user = User {
            username: new.username,
            full_name: new.full_name,
            password_hash: hash_password(&new.password),
            role: new.role,
            created_at: Utc::now(),
            last_login: None,
            active: true,
        };
        users.push(user.clone());
        self.save(&users)?;

        tracing::info!(username = %user.username, role = %user.role, "user created");
        Ok(user)
    }

    /// Verify a username/password pair and stamp `last_login` on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let mut users = self.load()?;
        let user = users
            .iter_mut()
            .find(|u| u.username == username && u.active)
            .ok_or(AuthError::UnknownUser)?;

        if !verify_password(password, &user.password_hash) {
            tracing::warn!(username, "failed login attempt");
            return Err(AuthError::WrongPassword);
        }

        user.last_login = Some(Utc::now());
        let identity = Identity::from(&*user);
        self.save(&users)?;

        tracing::info!(username, role = %identity.role, "login");
        Ok(identity)
    }

    /// Change a password after verifying the current one.
    pub fn change_password(
        &self,
        username: &str,
        current: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let mut users = self.load()?;
        let user = users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or(AuthError::UnknownUser)?;

        if !verify_password(current, &user.password_hash) {
            return Err(AuthError::WrongPassword);
        }

        user.password_hash = hash_password(new_password);
        self.save(&users)?;
        Ok(())
    }

    /// Deactivate an account. Only an active admin may do this, and not to
    /// their own account.
    pub fn deactivate(&self, username: &str, acting: &str) -> Result<(), AuthError> {
        let mut users = self.load()?;

        let is_acting_admin = users
            .iter()
            .any(|u| u.username == acting && u.active && u.role.is_admin());
        if !is_acting_admin {
            return Err(AuthError::NotAuthorized);
        }
        if username == acting {
            return Err(AuthError::CannotDeactivateSelf);
        }

        let user = users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_owned(),
            })?;
        user.active = false;
        self.save(&users)?;

        tracing::info!(username, acting, "user deactivated");
        Ok(())
    }
}
