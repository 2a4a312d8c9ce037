//! Output formats besides the Markdown document itself

pub mod json;
pub mod terminal;
