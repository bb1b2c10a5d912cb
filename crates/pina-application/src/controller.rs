//! The top-level app controller.
//!
//! Owns the single [`Session`] and the [`Router`], and is the only place
//! that mutates either. Screens receive read-only views and hand user taps
//! back as [`NavigationAction`]s; adapter events (auth changes, profile
//! deliveries, feed errors) arrive through the `handle_*` methods on the
//! UI-event thread. Nothing here blocks or spawns work.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pina_core::feed::{AuthUser, FeedError, ProfileEvent, RoleCache};
use pina_core::gate::{self, MenuEntry};
use pina_core::navigation::{NavigationAction, Router, SaleIntent};
use pina_core::screen::Screen;
use pina_core::session::Session;

/// A user-visible notice produced by a non-tolerated adapter error. The
/// calling screen decides how to present it; the controller never retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

/// Composes the session, the router, and the gate into the app's single
/// source of navigation truth.
pub struct AppController {
    session: Session,
    router: Router,
    role_cache: Arc<dyn RoleCache + Send + Sync>,
    /// True between a sign-in/sign-up and the first profile delivery; the
    /// window in which permission-denied errors are expected and tolerated.
    awaiting_profile: bool,
}

impl AppController {
    /// Creates a controller with the anonymous default session, starting on
    /// the welcome screen.
    pub fn new(role_cache: Arc<dyn RoleCache + Send + Sync>) -> Self {
        Self {
            session: Session::new(),
            router: Router::new(),
            role_cache,
            awaiting_profile: false,
        }
    }

    /// The screen currently shown.
    pub fn current_screen(&self) -> Screen {
        self.router.current()
    }

    /// Read-only view of the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Menu entries the current session is offered. Advisory: hiding an
    /// entry does not stop a direct [`Self::navigate`] call, matching the
    /// observed behavior of the original app.
    pub fn visible_menu(&self) -> Vec<MenuEntry> {
        gate::visible_menu(&self.session)
    }

    /// Capitalized role label for the role chip.
    pub fn role_label(&self) -> String {
        gate::role_label(&self.session)
    }

    /// Applies a navigation action and returns the new screen.
    pub fn navigate(&mut self, action: NavigationAction) -> Screen {
        let screen = self.router.navigate(action);
        tracing::debug!(screen = %screen, "navigated");
        screen
    }

    /// Peeks at the sale intent carried into the sale screen, if any.
    pub fn carried_sale_intent(&self) -> Option<&SaleIntent> {
        self.router.carried_intent(Screen::NewSale)
    }

    /// Consumes the carried sale intent.
    pub fn take_sale_intent(&mut self) -> Option<SaleIntent> {
        self.router.take_carried_intent(Screen::NewSale)
    }

    /// Applies an auth feed emission.
    ///
    /// On sign-in the cached role is applied immediately as a hint so the
    /// first frame shows a plausible menu; the authoritative profile value
    /// overwrites it when it arrives. On sign-out the session resets.
    pub fn handle_auth_event(&mut self, user: Option<AuthUser>) {
        match user {
            Some(user) => {
                tracing::info!(uid = %user.uid, "auth state: signed in");
                self.session.apply_auth(Some(&user));
                if let Some(hint) = self.role_cache.get() {
                    self.session.apply_role_hint(&hint);
                }
                self.awaiting_profile = true;
            }
            None => {
                tracing::info!("auth state: signed out");
                self.session.apply_auth(None);
                self.awaiting_profile = false;
            }
        }
    }

    /// Applies a profile feed delivery.
    ///
    /// The authoritative role overwrites any cached hint and refreshes the
    /// cache. A missing document is tolerated and defaults the role to the
    /// lowest privilege.
    pub fn handle_profile_event(&mut self, event: ProfileEvent) {
        self.session.apply_profile(&event);
        if let ProfileEvent::Snapshot(_) = &event {
            self.role_cache.set(self.session.role.as_str());
        }
        self.awaiting_profile = false;
    }

    /// Applies an adapter error per the documented policy.
    ///
    /// Permission-denied inside the auth race window is expected (the
    /// profile document may not be readable yet) and is logged, not
    /// surfaced. Everything else becomes a notice for the calling screen;
    /// the controller never retries.
    pub fn handle_feed_error(&mut self, error: FeedError) -> Option<Notice> {
        if error.is_permission_denied() && self.awaiting_profile {
            tracing::warn!(%error, "tolerated feed error during auth race");
            return None;
        }
        Some(Notice {
            message: error.to_string(),
        })
    }

    /// Logs out: session and router reset, role cache cleared.
    pub fn log_out(&mut self) {
        tracing::info!("logging out");
        self.session.log_out();
        self.role_cache.clear();
        self.router.reset();
        self.awaiting_profile = false;
    }
}
