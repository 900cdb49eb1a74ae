//! The two fixed-layout documents.
//!
//! Each assembly paints its pages in a literal order through a
//! [`Compositor`]. Page breaks are hard-coded; a page whose content runs
//! past the bottom margin is reported, never reflowed.

pub mod content;
mod deep_dive;
mod leave_behind;

use crate::assets::Assets;
use crate::error::DocsError;
use hromada_compositor::{Compositor, TextStyle, Theme, palette};
use hromada_layout::FontRole;
use hromada_render_core::{DocumentInfo, RenderError, Surface};
use hromada_render_lopdf::PdfSurface;
use std::fmt;
use std::io::{Seek, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Two-page donor leave-behind.
    LeaveBehind,
    /// Six-page institutional deep-dive with a cover.
    DeepDive,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::LeaveBehind, DocumentKind::DeepDive];

    pub fn page_count(self) -> usize {
        match self {
            DocumentKind::LeaveBehind => leave_behind::PAGES,
            DocumentKind::DeepDive => deep_dive::PAGES,
        }
    }

    pub fn info(self) -> DocumentInfo {
        let title = match self {
            DocumentKind::LeaveBehind => content::LEAVE_BEHIND_TITLE,
            DocumentKind::DeepDive => content::DEEP_DIVE_TITLE,
        };
        DocumentInfo::new(title, content::AUTHOR)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::LeaveBehind => write!(f, "leave-behind"),
            DocumentKind::DeepDive => write!(f, "deep-dive"),
        }
    }
}

/// Paints every page of `kind` onto `surface`, leaving the last page open.
pub fn compose<S: Surface + ?Sized>(
    kind: DocumentKind,
    surface: &mut S,
    theme: &Theme,
    assets: &Assets,
) -> Result<(), RenderError> {
    surface.set_info(kind.info());
    let mut c = Compositor::new(surface, theme, &assets.logos);
    match kind {
        DocumentKind::LeaveBehind => leave_behind::compose(&mut c),
        DocumentKind::DeepDive => deep_dive::compose(&mut c),
    }
}

/// Renders `kind` as a PDF into `writer` and hands the writer back.
pub fn render_pdf<W: Write + Seek>(
    kind: DocumentKind,
    writer: W,
    assets: &Assets,
) -> Result<W, DocsError> {
    let theme = Theme::new(assets.fonts.clone());
    let mut surface = PdfSurface::new(writer, theme.page.size)?;
    compose(kind, &mut surface, &theme, assets)?;
    let writer = surface.finish()?;
    log::debug!("Rendered {} ({} pages)", kind, kind.page_count());
    Ok(writer)
}

/// Header bar and footer for content page `page` of `total`. Returns the
/// first baseline below the header.
fn content_page<S: Surface + ?Sized>(
    c: &mut Compositor<'_, S>,
    page: usize,
    total: usize,
) -> Result<f32, RenderError> {
    c.header_bar()?;
    c.footer(page, total);
    Ok(c.theme().content_top())
}

/// Closes the page after reporting where its content ended.
fn end_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>, y: f32) -> Result<(), RenderError> {
    c.check_overflow(y);
    c.surface().show_page()
}

/// Section heading, a one-line note set just above the cursor, and the
/// compact fee table.
fn fee_section<S: Surface + ?Sized>(
    c: &mut Compositor<'_, S>,
    y: f32,
    title: &str,
    note: &str,
) -> f32 {
    let y = c.section_heading(y, title, palette::GREEN);
    let note_style = TextStyle::new(FontRole::BodySemi, 9.0).color(palette::NAVY);
    let left = c.left();
    c.text_at(left, y + 2.0, note, &note_style);
    c.table(y - 14.0, &content::FEE_TABLE)
}
