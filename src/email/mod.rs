//! HTML notification rendering: field formatting and per-category templates.

pub mod format;
pub mod templates;

pub use templates::FormCategory;
