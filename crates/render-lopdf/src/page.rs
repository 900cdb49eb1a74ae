use hromada_types::{Color, Point, Rect};
use lopdf::Object;
use lopdf::content::{Content, Operation};

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Accumulates the content stream of one page, skipping redundant state
/// changes.
pub(crate) struct PageContext {
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, resource_name: &str, size: f32) {
        if self.state.font_name != resource_name || self.state.font_size != size {
            self.op(
                "Tf",
                vec![Object::Name(resource_name.as_bytes().to_vec()), size.into()],
            );
            self.state.font_name = resource_name.to_string();
            self.state.font_size = size;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill_color(color);
        self.op(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        );
        self.op("f", vec![]);
    }

    pub fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if r == 0.0 {
            self.fill_rect(rect, color);
            return;
        }
        self.set_fill_color(color);

        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.top());
        let k = r * KAPPA;
        self.op("m", vec![(x0 + r).into(), y0.into()]);
        self.op("l", vec![(x1 - r).into(), y0.into()]);
        self.curve(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
        self.op("l", vec![x1.into(), (y1 - r).into()]);
        self.curve(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
        self.op("l", vec![(x0 + r).into(), y1.into()]);
        self.curve(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
        self.op("l", vec![x0.into(), (y0 + r).into()]);
        self.curve(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
        self.op("h", vec![]);
        self.op("f", vec![]);
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.set_fill_color(color);
        let (cx, cy, r) = (center.x, center.y, radius);
        let k = r * KAPPA;
        self.op("m", vec![(cx + r).into(), cy.into()]);
        self.curve(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
        self.curve(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
        self.curve(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
        self.curve(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        self.op("h", vec![]);
        self.op("f", vec![]);
    }

    fn curve(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.op(
            "c",
            vec![x1.into(), y1.into(), x2.into(), y2.into(), x3.into(), y3.into()],
        );
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.set_line_width(width);
        self.set_stroke_color(color);
        self.op("m", vec![from.x.into(), from.y.into()]);
        self.op("l", vec![to.x.into(), to.y.into()]);
        self.op("S", vec![]);
    }

    /// Shows an already-encoded string. `text` is a literal (WinAnsi) or hex
    /// (glyph id) string object.
    pub fn show_text(&mut self, origin: Point, font_resource: &str, size: f32, color: Color, text: Object) {
        self.op("BT", vec![]);
        self.set_font(font_resource, size);
        self.set_fill_color(color);
        self.op("Td", vec![origin.x.into(), origin.y.into()]);
        self.op("Tj", vec![text]);
        self.op("ET", vec![]);
    }

    /// Paints an image XObject scaled into `rect`.
    pub fn place_image(&mut self, xobject_resource: &str, rect: Rect) {
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![
                rect.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        );
        self.op("Do", vec![Object::Name(xobject_resource.as_bytes().to_vec())]);
        self.op("Q", vec![]);
    }
}
