//! The presentation page: a text document, its scroll view, and the
//! decorative behaviors that follow the scroll position.
mod document;
mod header;
mod reveal;
mod view;


pub use document::{Document, Section, page_path};
pub use header::{DEFAULT_SHADE_OFFSET, HeaderStyle};
pub use reveal::{DEFAULT_REVEAL_THRESHOLD, RevealTracker};
pub use view::PageView;
