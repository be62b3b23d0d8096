// Per-document statistics — word frequencies, style metrics, and
// vocabulary overlap between analyzed texts.

pub mod frequency;
pub mod overlap;
pub mod style;
