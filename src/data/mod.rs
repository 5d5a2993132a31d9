//! Data module - stream parsing and format variants

mod parser;
mod variant;

pub use parser::{ParseError, SeriesSet, StreamParser};
pub use variant::ChartVariant;
