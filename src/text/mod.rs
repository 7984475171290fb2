//! Text preparation for single-line labels: normalization, measurement and
//! prefix fitting.

mod fit;
mod measure;
mod normalize;

pub use fit::{Fit, fit_single_line};
pub use measure::{FixedAdvanceMeasurer, TextExtent, TextMeasurer};
pub use normalize::normalize;
