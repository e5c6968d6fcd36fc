//! # Frontends
//!
//! The field implements suggestion resolution independently from user
//! interaction logic. Frontend is something that implements the user
//! interaction parts: editing, focus tracking and drawing the ghost line.
//!
//! Right now there's only the [tui] frontend which uses <https://docs.rs/tui>
//! with crossterm events.

#[cfg(feature = "tui")]
pub mod tui;
