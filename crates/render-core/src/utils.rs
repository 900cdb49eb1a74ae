use hromada_types::TextAlign;

/// Left edge of a run of `text_width` anchored at `x` with `align`.
///
/// Centred text is centred on `x`; right-aligned text ends at `x`.
pub fn anchor_x(x: f32, text_width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => x,
        TextAlign::Center => x - text_width / 2.0,
        TextAlign::Right => x - text_width,
    }
}
