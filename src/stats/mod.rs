//! Stats module - error computation and summaries

mod calculator;

pub use calculator::{ErrorCalculator, SeriesSummary};
