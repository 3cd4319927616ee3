use crate::db::Store;
use crate::dto::{NewUser, SignupFormData};
use crate::errors::AppError;
use crate::forms::{ValidationErrors, REQUIRED_MESSAGE};
use crate::models::User;

use super::crypto;

pub enum SignupOutcome {
    Created(i64),
    Invalid(ValidationErrors),
}

pub async fn signup(store: &dyn Store, form: &SignupFormData) -> Result<SignupOutcome, AppError> {
    let mut errors = ValidationErrors::default();
    let username = form.username.trim();

    if username.is_empty() {
        errors.add("username", REQUIRED_MESSAGE);
    } else if username.chars().count() > 50 {
        errors.add("username", "Keep the username under 50 characters.");
    }
    if form.pwd.is_empty() {
        errors.add("pwd", REQUIRED_MESSAGE);
    } else if form.pwd.chars().count() < 8 {
        errors.add("pwd", "Use at least 8 characters.");
    }
    if form.pwd_confirm != form.pwd {
        errors.add("pwd_confirm", "Passwords do not match.");
    }
    if errors.is_empty() && store.user_by_username(username).await?.is_some() {
        errors.add("username", "This username is already taken.");
    }
    if !errors.is_empty() {
        return Ok(SignupOutcome::Invalid(errors));
    }

    let id = store
        .create_user(NewUser {
            username: username.to_string(),
            email: form
                .email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            pwd_hash: crypto::sha3_256_hex(&form.pwd),
        })
        .await?;
    log::info!("user {} registered", id);
    Ok(SignupOutcome::Created(id))
}

/// Credential check for login. A missing user and a wrong password are
/// indistinguishable to the caller.
pub async fn authenticate(
    store: &dyn Store,
    username: &str,
    pwd: &str,
) -> Result<Option<User>, AppError> {
    match store.user_by_username(username.trim()).await? {
        Some(user) if user.pwd_hash == crypto::sha3_256_hex(pwd) => Ok(Some(user)),
        _ => Ok(None),
    }
}
