/// Horizontal alignment of a painted string relative to its anchor.
///
/// For `Center` the anchor is the midpoint of the available width, for
/// `Right` it is the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}
