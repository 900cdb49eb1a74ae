//! Page furniture and image rows: header bar, footer, partner logo strip
//! and the fiscal-sponsor logos.

use crate::compositor::Compositor;
use crate::logos::{CANDID, POCACITO, width_for_height};
use crate::theme::{HEADER_HEIGHT, TextStyle, palette};
use hromada_layout::FontRole;
use hromada_render_core::{RenderError, Surface};
use hromada_types::{Point, Rect, TextAlign};

pub const SITE_URL: &str = "hromadaproject.org";
pub const CONTACT_EMAIL: &str = "contact@hromadaproject.org";

const HEADER_LOGO_SIZE: f32 = 22.0;
const SPONSOR_GAP: f32 = 24.0;

impl<S: Surface + ?Sized> Compositor<'_, S> {
    /// Navy strip across the top of a content page with the mark and
    /// wordmark.
    pub fn header_bar(&mut self) -> Result<(), RenderError> {
        let page = self.theme.page;
        let bar_y = page.height() - HEADER_HEIGHT;
        self.surface.fill_rect(
            Rect::new(0.0, bar_y, page.width(), HEADER_HEIGHT),
            palette::NAVY,
        );
        self.surface.fill_rect(
            Rect::new(0.0, page.height() - 3.0, page.width(), 3.0),
            palette::UKRAINE_BLUE,
        );

        if let Some(logo) = self.logos.primary() {
            let logo_y = bar_y + (HEADER_HEIGHT - HEADER_LOGO_SIZE) / 2.0;
            self.surface.draw_image(
                logo,
                Rect::new(page.left() + 2.0, logo_y, HEADER_LOGO_SIZE, HEADER_LOGO_SIZE),
            )?;
        }

        let wordmark = TextStyle::new(FontRole::Head, 14.0).color(palette::CREAM);
        self.text_at(page.left() + 30.0, bar_y + 12.0, "hromada", &wordmark);
        Ok(())
    }

    /// Rule plus site, e-mail and `page / total` along the bottom margin.
    pub fn footer(&mut self, page_number: usize, total_pages: usize) {
        let page = self.theme.page;
        let y = page.margins.bottom - 18.0;
        self.surface.stroke_line(
            Point::new(page.left(), y + 12.0),
            Point::new(page.right(), y + 12.0),
            0.5,
            palette::CREAM_DARK,
        );

        let style = TextStyle::body(7.0).color(palette::CHARCOAL_60);
        self.text_at(page.left(), y, SITE_URL, &style);
        self.text_at(
            page.center_x(),
            y,
            CONTACT_EMAIL,
            &style.align(TextAlign::Center),
        );
        self.text_at(
            page.right(),
            y,
            &format!("{} / {}", page_number, total_pages),
            &style.align(TextAlign::Right),
        );
    }

    /// Centred row of the named logos at `target_h`.
    ///
    /// Widths come from the native-size table. Logos missing from the
    /// catalog take no space and add no gap; the rest keep their order.
    pub fn logo_strip(
        &mut self,
        y: f32,
        names: &[&str],
        target_h: f32,
        gap: f32,
    ) -> Result<f32, RenderError> {
        let logos = self.logos;
        let present: Vec<_> = names
            .iter()
            .filter_map(|name| logos.get(name).map(|asset| (asset, width_for_height(name, target_h))))
            .collect();

        let total_w = strip_width(present.iter().map(|(_, w)| *w), gap);
        let mut x = self.left() + (self.content_width() - total_w) / 2.0;
        for (asset, w) in present {
            self.surface
                .draw_image(asset, Rect::new(x, y - target_h + 4.0, w, target_h))?;
            x += w + gap;
        }
        Ok(y - target_h - 10.0)
    }

    /// POCACITO logo and the Candid seal, left-aligned at the margin.
    /// Either may be absent; the seal keeps its slot regardless.
    pub fn sponsor_logos(&mut self, y: f32, logo_h: f32) -> Result<f32, RenderError> {
        let logos = self.logos;
        let left = self.left();
        let poc_w = width_for_height(POCACITO, logo_h);
        let candid_w = width_for_height(CANDID, logo_h);
        let image_y = y - logo_h + 2.0;

        if let Some(asset) = logos.get(POCACITO) {
            self.surface
                .draw_image(asset, Rect::new(left, image_y, poc_w, logo_h))?;
        }
        if let Some(asset) = logos.get(CANDID) {
            self.surface.draw_image(
                asset,
                Rect::new(left + poc_w + SPONSOR_GAP, image_y, candid_w, logo_h),
            )?;
        }
        Ok(y - logo_h - 8.0)
    }
}

/// Total width of a strip: every width plus one gap between neighbours.
pub fn strip_width(widths: impl IntoIterator<Item = f32>, gap: f32) -> f32 {
    let (sum, count) = widths
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), w| (sum + w, n + 1));
    if count == 0 {
        0.0
    } else {
        sum + gap * (count - 1) as f32
    }
}
