//! Prints the screen a navigation action lands on.

use anyhow::{Result, anyhow};

use pina_core::navigation::{NavigationAction, transition};
use pina_core::screen::Screen;

pub fn run(from: &str, action: &str) -> Result<()> {
    let current = Screen::parse(from).ok_or_else(|| anyhow!("unknown screen: {from}"))?;
    let action =
        NavigationAction::parse(action).ok_or_else(|| anyhow!("unknown action: {action}"))?;

    let next = transition(current, &action);
    println!("{current} -> {next}");

    Ok(())
}
