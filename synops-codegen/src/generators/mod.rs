//! Ready-made generators.

mod filter;
mod html;
mod text;

pub use filter::{FilterGenerator, SynopsisFilter};
pub use html::{HtmlGenerator, escape};
pub use text::TextGenerator;
