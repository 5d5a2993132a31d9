//! Charts module - Chart rendering

mod renderer;

pub use renderer::{ChartRenderer, PlotError};
