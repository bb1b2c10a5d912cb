//! Prints the menu entries offered to a role.

use anyhow::Result;

use pina_core::gate;
use pina_core::session::{Role, Session};

pub fn run(role: &str) -> Result<()> {
    let mut session = Session::new();
    session.role = Role::parse(role);

    println!("role: {}", gate::role_label(&session));
    for entry in gate::visible_menu(&session) {
        println!("- {entry:?}");
    }

    Ok(())
}
