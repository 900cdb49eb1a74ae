mod wrapper;

pub use wrapper::{wrap_text, wrap_with};
