//! Page compositor for the Hromada documents.
//!
//! - [`Theme`]: palette, page frame and resolved fonts
//! - [`Compositor`]: cursor-threaded drawing primitives over any
//!   [`Surface`](hromada_render_core::Surface)
//! - [`LogoCatalog`]: the optional images a run has available
//! - [`Table`]: striped comparison tables

mod blocks;
mod compositor;
mod furniture;
pub mod logos;
mod table;
pub mod theme;

pub use blocks::{CallToAction, ProjectCard, Stat, StatStyle, Step};
pub use compositor::Compositor;
pub use furniture::{CONTACT_EMAIL, SITE_URL, strip_width};
pub use logos::LogoCatalog;
pub use table::{Column, Table};
pub use theme::{HEADER_HEIGHT, TextStyle, Theme, palette};
