//! Session domain model.
//!
//! One `Session` value represents the current user context. It is owned
//! exclusively by the top-level app controller and handed to screens
//! read-only; all mutation happens through the `apply_*` methods in response
//! to adapter events or explicit logout.

use serde::{Deserialize, Serialize};

use crate::feed::{AuthUser, ProfileEvent};

/// User role as stored in the profile document.
///
/// `Farmer` is the lowest-privilege default. The original source had two
/// spellings for the "no role found" default (`"user"` in one revision,
/// `"farmer"` in another); this model commits to a single default and
/// accepts both spellings on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Farmer,
    Admin,
}

impl Role {
    /// Parses a stored role string, case-insensitively.
    ///
    /// `"user"` and `"farmer"` both map to [`Role::Farmer`]; anything
    /// unrecognized falls back to the lowest privilege rather than erroring.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "admin" => Self::Admin,
            _ => Self::Farmer,
        }
    }

    /// Capitalized display label for the role chip.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Admin => "Admin",
        }
    }

    /// Stored string form ("farmer"/"admin").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Admin => "admin",
        }
    }
}

/// The current user's authentication/role/identity snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether an identity is signed in.
    pub is_authenticated: bool,
    /// Display name shown in headers. Defaults to "User".
    pub display_name: String,
    /// Avatar URL. Defaults to empty.
    pub avatar_url: String,
    /// Current role. Defaults to the lowest privilege.
    pub role: Role,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            display_name: "User".to_string(),
            avatar_url: String::new(),
            role: Role::default(),
        }
    }
}

impl Session {
    /// Creates the anonymous/default session used at app start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an auth feed emission. `None` means signed out and resets the
    /// session to defaults.
    pub fn apply_auth(&mut self, user: Option<&AuthUser>) {
        match user {
            Some(user) => {
                self.is_authenticated = true;
                if let Some(name) = &user.display_name {
                    self.display_name = name.clone();
                }
                if let Some(url) = &user.photo_url {
                    self.avatar_url = url.clone();
                }
            }
            None => *self = Self::default(),
        }
    }

    /// Applies a cached role hint. Hints never downgrade authentication
    /// state; the authoritative profile value overwrites later.
    pub fn apply_role_hint(&mut self, role: &str) {
        self.role = Role::parse(role);
    }

    /// Applies a profile feed delivery.
    ///
    /// A missing document is tolerated: the role defaults to the lowest
    /// privilege and identity fields are left as-is.
    pub fn apply_profile(&mut self, event: &ProfileEvent) {
        match event {
            ProfileEvent::Snapshot(profile) => {
                if let Some(username) = &profile.username {
                    self.display_name = username.clone();
                }
                if let Some(url) = &profile.photo_url {
                    self.avatar_url = url.clone();
                }
                self.role = profile
                    .role
                    .as_deref()
                    .map(Role::parse)
                    .unwrap_or_default();
            }
            ProfileEvent::NotFound => {
                self.role = Role::default();
            }
        }
    }

    /// Resets to the anonymous defaults on logout.
    pub fn log_out(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ProfileSnapshot;

    #[test]
    fn test_default_session() {
        let session = Session::new();
        assert!(!session.is_authenticated);
        assert_eq!(session.display_name, "User");
        assert_eq!(session.avatar_url, "");
        assert_eq!(session.role, Role::Farmer);
    }

    #[test]
    fn test_role_parse_accepts_both_legacy_spellings() {
        assert_eq!(Role::parse("farmer"), Role::Farmer);
        assert_eq!(Role::parse("user"), Role::Farmer);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("???"), Role::Farmer);
    }

    #[test]
    fn test_apply_auth_sign_in_and_out() {
        let mut session = Session::new();
        session.apply_auth(Some(&AuthUser {
            uid: "u1".to_string(),
            display_name: Some("Aina".to_string()),
            photo_url: None,
        }));
        assert!(session.is_authenticated);
        assert_eq!(session.display_name, "Aina");

        session.apply_auth(None);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_profile_not_found_defaults_role() {
        let mut session = Session::new();
        session.role = Role::Admin;
        session.apply_profile(&ProfileEvent::NotFound);
        assert_eq!(session.role, Role::Farmer);
    }

    #[test]
    fn test_profile_snapshot_overwrites_hint() {
        let mut session = Session::new();
        session.apply_role_hint("admin");
        assert_eq!(session.role, Role::Admin);

        session.apply_profile(&ProfileEvent::Snapshot(ProfileSnapshot {
            username: Some("pakcik".to_string()),
            photo_url: Some("http://img".to_string()),
            role: Some("farmer".to_string()),
        }));
        assert_eq!(session.role, Role::Farmer);
        assert_eq!(session.display_name, "pakcik");
        assert_eq!(session.avatar_url, "http://img");
    }

    #[test]
    fn test_log_out_resets() {
        let mut session = Session::new();
        session.apply_auth(Some(&AuthUser {
            uid: "u1".to_string(),
            display_name: Some("Aina".to_string()),
            photo_url: Some("http://img".to_string()),
        }));
        session.apply_role_hint("admin");
        session.log_out();
        assert_eq!(session, Session::default());
    }
}
