//! Most of the useful things reexported

pub use crate::editor::*;
pub use crate::field::*;
pub use crate::resolve::*;
pub use crate::utils::*;

#[cfg(feature = "tui")]
pub use crate::frontend::tui::*;
