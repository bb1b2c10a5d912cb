pub mod chat;
pub mod menu;
pub mod route;
