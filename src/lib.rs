//! Habit Mode game server core.
//!
//! Validates structured client requests (`register_user`, `login`,
//! `retrieve_data`), routes them to per-operation handlers, and answers
//! each with a flat JSON response carrying a numeric `success_code`.
//! The user-account store and the authentication-token subsystem sit
//! behind narrow trait interfaces; in-memory implementations live in
//! [`infrastructure`].

pub mod application;
pub mod dispatch;
pub mod domain;
pub mod infrastructure;
