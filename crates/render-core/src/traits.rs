use crate::error::RenderError;
use crate::types::{DocumentInfo, ImageAsset};
use hromada_layout::FontFace;
use hromada_types::{Color, Point, Rect, Size};

/// A paged canvas in PDF user space (origin bottom-left, points).
///
/// Vector and text operations are infallible at the call site; backends
/// buffer them and surface failures from `show_page` or their own finish
/// step. Image placement can fail on undecodable data.
pub trait Surface {
    fn page_size(&self) -> Size;

    /// 1-based number of the page currently being painted.
    fn current_page(&self) -> usize;

    fn set_info(&mut self, info: DocumentInfo);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Draws a single line of text with its baseline starting at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, font: &FontFace, size: f32, color: Color);

    /// Draws `image` inside `rect`, preserving its aspect ratio and centring
    /// it in the box.
    fn draw_image(&mut self, image: &ImageAsset, rect: Rect) -> Result<(), RenderError>;

    /// Closes the current page and starts a new one.
    fn show_page(&mut self) -> Result<(), RenderError>;
}
