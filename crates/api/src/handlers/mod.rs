//! Request handlers, one module per resource.

pub mod activities;
pub mod auth;
pub mod case_handlers;
pub mod cases;
pub mod deadlines;
pub mod notifications;
pub mod opinions;
pub mod parties;
pub mod statistics;
pub mod todos;
pub mod users;
