//! Role-aware menu gating.
//!
//! Computes which menu entries a session is offered. Advisory only: it
//! controls what is shown, not what the router will do when asked directly.
//! The router intentionally does not enforce this (see `navigation`), which
//! mirrors the original app.

use serde::{Deserialize, Serialize};

use crate::session::{Role, Session};

/// A menu entry offered on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEntry {
    Product,
    Location,
    AboutUs,
    PineBot,
    Orders,
    Dashboard,
    Weather,
    Payment,
    Admin,
}

/// The entries every session gets, in display order.
const BASE_MENU: [MenuEntry; 8] = [
    MenuEntry::Product,
    MenuEntry::Location,
    MenuEntry::AboutUs,
    MenuEntry::PineBot,
    MenuEntry::Orders,
    MenuEntry::Dashboard,
    MenuEntry::Weather,
    MenuEntry::Payment,
];

/// Returns the menu entries offered to this session.
///
/// Pure and total; the anonymous default session gets the base menu. The
/// Admin entry is appended iff the role is admin.
pub fn visible_menu(session: &Session) -> Vec<MenuEntry> {
    let mut menu = BASE_MENU.to_vec();
    if session.role == Role::Admin {
        menu.push(MenuEntry::Admin);
    }
    menu
}

/// Display label for the role chip (role name, capitalized).
pub fn role_label(session: &Session) -> String {
    session.role.label().to_string()
}
