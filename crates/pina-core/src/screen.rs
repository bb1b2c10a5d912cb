//! Screen identifiers for the single-selection navigation model.
//!
//! The app shows exactly one screen at a time. There is no back-stack:
//! "back" is just another explicit transition to a named target screen.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One named, mutually-exclusive view state of the app.
///
/// Exactly one `Screen` is active at any time. The initial screen is
/// [`Screen::Welcome`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Screen {
    /// Landing screen with the sign-in / log-in choice.
    #[default]
    Welcome,
    /// Account creation form.
    SignUp,
    /// Login form.
    LogIn,
    /// Main menu after authentication.
    Home,
    /// Product catalog.
    Product,
    /// Sales announcements, optionally opened on a selected announcement.
    NewSale,
    /// Farm locations.
    Location,
    /// Customer assistant contact screen.
    Assistant,
    /// About LPNM.
    About,
    /// Pine-Bot FAQ chat.
    PineBot,
    /// Mock order tracking.
    OrderTracking,
    /// Farmer dashboard.
    Dashboard,
    /// Weather advisory.
    Weather,
    /// Payment management.
    Payment,
    /// Pineapple price board.
    Price,
    /// Profile editing.
    EditProfile,
    /// Admin dashboard.
    Admin,
    /// Admin product manager.
    ManageProducts,
    /// Admin sale manager.
    ManageSales,
}

impl Screen {
    /// Parses a screen token (e.g. `"newsale"`), case-insensitively.
    ///
    /// Returns `None` for unknown tokens rather than erroring; callers that
    /// need a default fall back to [`Screen::Welcome`] themselves.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }

    #[test]
    fn test_parse_round_trip() {
        for screen in Screen::iter() {
            let token = screen.to_string();
            assert_eq!(Screen::parse(&token), Some(screen), "token {token}");
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Screen::parse("NewSale"), Some(Screen::NewSale));
        assert_eq!(Screen::parse("ORDERTRACKING"), Some(Screen::OrderTracking));
    }

    #[test]
    fn test_parse_unknown_token() {
        assert_eq!(Screen::parse("checkout"), None);
    }

    #[test]
    fn test_all_nineteen_screens() {
        assert_eq!(Screen::iter().count(), 19);
    }
}
