//! Identity resolver - turns a verified credential or an OAuth profile
//! into a single canonical authenticated-identity view.
//!
//! The resolver never creates a duplicate record for an email or provider
//! key that already exists; OAuth logins merge onto the existing record
//! instead.

use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use gk_core::models::user::normalize_email;
use gk_core::{AuthenticatedUser, OAuthProfile, OAuthProvider, User};

use gk_db::{UserRepository, UserUpdate};

/// Registration input for a local email/password account
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Clone)]
pub struct IdentityResolver {
    users: UserRepository,
    passwords: PasswordHasher,
}

impl IdentityResolver {
    pub fn new(users: UserRepository, passwords: PasswordHasher) -> Self {
        Self { users, passwords }
    }

    /// Verify a local email/password credential.
    ///
    /// Unknown email and wrong password collapse into the same error so an
    /// unauthenticated caller cannot probe which accounts exist. The
    /// inactive-account failure is only reachable after the credential
    /// matched.
    pub async fn resolve_local(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<AuthenticatedUser> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AuthError::invalid_credentials());
        };
        let Some(hash) = &user.password_hash else {
            return Err(AuthError::invalid_credentials());
        };

        if !self.passwords.verify(password, hash).await {
            return Err(AuthError::invalid_credentials());
        }

        if !user.is_active {
            return Err(AuthError::inactive_account());
        }

        self.users.record_login(user.id).await?;

        Ok(AuthenticatedUser::from(&user))
    }

    /// Resolve an already-extracted provider profile to a canonical record.
    ///
    /// Three-tier lookup: provider key, then email match (account linking),
    /// then create. Display fields from the profile only ever fill blanks.
    pub async fn resolve_oauth(
        &self,
        provider: OAuthProvider,
        profile: &OAuthProfile,
    ) -> AuthErrorResult<AuthenticatedUser> {
        let existing_by_provider = self
            .users
            .find_by_provider(provider, &profile.provider_id)
            .await?;

        let user = if let Some(user) = existing_by_provider {
            self.fill_blank_fields(&user, profile).await?
        } else if let Some(user) = self.find_by_profile_email(profile).await? {
            self.link_provider(&user, provider, &profile.provider_id)
                .await?
        } else {
            self.create_or_adopt(provider, profile).await?
        };

        if !user.is_active {
            return Err(AuthError::inactive_account());
        }

        self.users.record_login(user.id).await?;

        Ok(AuthenticatedUser::from(&user))
    }

    /// Register a local credential.
    ///
    /// An email that already carries a credential is taken; an email that
    /// exists without one (an OAuth-only account) gets the password
    /// attached to that same record instead of a duplicate.
    pub async fn register_local(
        &self,
        registration: &Registration,
    ) -> AuthErrorResult<AuthenticatedUser> {
        let existing = self.users.find_by_email(&registration.email).await?;

        if let Some(user) = &existing {
            if user.has_local_credential() {
                return Err(AuthError::email_already_registered(&registration.email));
            }
        }

        let password_hash = self.passwords.hash(&registration.password).await?;

        let user = match existing {
            Some(user) => {
                let update = UserUpdate {
                    password_hash: Some(password_hash.clone()),
                    first_name: registration.first_name.clone(),
                    last_name: registration.last_name.clone(),
                    avatar_url: registration.avatar_url.clone(),
                    ..UserUpdate::default()
                };
                self.users.update_profile(user.id, &update).await?;

                User {
                    password_hash: Some(password_hash),
                    first_name: registration.first_name.clone().or(user.first_name),
                    last_name: registration.last_name.clone().or(user.last_name),
                    avatar_url: registration.avatar_url.clone().or(user.avatar_url),
                    ..user
                }
            }
            None => {
                let mut user = User::new(Some(registration.email.clone()));
                user.password_hash = Some(password_hash);
                user.first_name = registration.first_name.clone();
                user.last_name = registration.last_name.clone();
                user.avatar_url = registration.avatar_url.clone();
                // A concurrent registration can land the same email
                // between the lookup and this insert; the loser gets
                // the same answer a sequential duplicate would.
                if let Err(e) = self.users.create(&user).await {
                    if e.is_unique_violation() {
                        return Err(AuthError::email_already_registered(&registration.email));
                    }
                    return Err(e.into());
                }
                user
            }
        };

        self.users.record_login(user.id).await?;

        Ok(AuthenticatedUser::from(&user))
    }

    async fn find_by_profile_email(
        &self,
        profile: &OAuthProfile,
    ) -> AuthErrorResult<Option<User>> {
        match &profile.email {
            Some(email) => Ok(self.users.find_by_email(email).await?),
            None => Ok(None),
        }
    }

    /// Tier 1: the provider key is already linked. Fill any blank display
    /// fields from the incoming profile; never overwrite a populated one.
    async fn fill_blank_fields(
        &self,
        user: &User,
        profile: &OAuthProfile,
    ) -> AuthErrorResult<User> {
        let update = UserUpdate {
            email: fill_blank(&user.email, &profile.email).map(|e| normalize_email(&e)),
            first_name: fill_blank(&user.first_name, &profile.first_name),
            last_name: fill_blank(&user.last_name, &profile.last_name),
            avatar_url: fill_blank(&user.avatar_url, &profile.avatar_url),
            ..UserUpdate::default()
        };

        if !update_is_empty(&update) {
            self.users.update_profile(user.id, &update).await?;
        }

        Ok(User {
            email: update.email.or_else(|| user.email.clone()),
            first_name: update.first_name.or_else(|| user.first_name.clone()),
            last_name: update.last_name.or_else(|| user.last_name.clone()),
            avatar_url: update.avatar_url.or_else(|| user.avatar_url.clone()),
            ..user.clone()
        })
    }

    /// Tier 2: account linking by email match. Attaches the provider key
    /// to a previously local-only or other-provider-only record.
    async fn link_provider(
        &self,
        user: &User,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> AuthErrorResult<User> {
        let mut update = UserUpdate::default();
        let mut linked = user.clone();

        match provider {
            OAuthProvider::Google => {
                update.google_id = Some(provider_id.to_string());
                linked.google_id = Some(provider_id.to_string());
            }
            OAuthProvider::Snapchat => {
                update.snapchat_id = Some(provider_id.to_string());
                linked.snapchat_id = Some(provider_id.to_string());
            }
        }

        self.users.update_profile(user.id, &update).await?;

        Ok(linked)
    }

    /// Tier 3 with a race guard: when a concurrent resolution inserts the
    /// same provider key or email first, the loser's create hits the
    /// unique index; re-run the lookups and merge onto that record.
    async fn create_or_adopt(
        &self,
        provider: OAuthProvider,
        profile: &OAuthProfile,
    ) -> AuthErrorResult<User> {
        let created = match self.create_from_profile(provider, profile).await {
            Err(e) if e.is_unique_violation() => e,
            other => return other,
        };

        if let Some(user) = self
            .users
            .find_by_provider(provider, &profile.provider_id)
            .await?
        {
            return self.fill_blank_fields(&user, profile).await;
        }
        if let Some(user) = self.find_by_profile_email(profile).await? {
            return self
                .link_provider(&user, provider, &profile.provider_id)
                .await;
        }

        Err(created)
    }

    /// Tier 3: first contact - create a fresh record with the provider key
    /// linked, default role, active.
    async fn create_from_profile(
        &self,
        provider: OAuthProvider,
        profile: &OAuthProfile,
    ) -> AuthErrorResult<User> {
        let mut user = User::new(profile.email.clone());
        user.first_name = profile.first_name.clone();
        user.last_name = profile.last_name.clone();
        user.avatar_url = profile.avatar_url.clone();

        match provider {
            OAuthProvider::Google => user.google_id = Some(profile.provider_id.clone()),
            OAuthProvider::Snapchat => user.snapchat_id = Some(profile.provider_id.clone()),
        }

        self.users.create(&user).await?;

        Ok(user)
    }
}

/// Incoming value wins only when the stored one is blank; empty incoming
/// values never land.
fn fill_blank(current: &Option<String>, incoming: &Option<String>) -> Option<String> {
    match (current, incoming) {
        (None, Some(value)) if !value.is_empty() => Some(value.clone()),
        _ => None,
    }
}

fn update_is_empty(update: &UserUpdate) -> bool {
    update.email.is_none()
        && update.password_hash.is_none()
        && update.google_id.is_none()
        && update.snapchat_id.is_none()
        && update.first_name.is_none()
        && update.last_name.is_none()
        && update.avatar_url.is_none()
}
