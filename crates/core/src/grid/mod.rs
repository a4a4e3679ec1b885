//! Cell grid storage, definition loading and coordinate mapping

pub mod cell_grid;
pub mod loader;
pub mod mapper;

// Re-export main types
pub use cell_grid::*;
