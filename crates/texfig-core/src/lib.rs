// File: crates/texfig-core/src/lib.rs
// Summary: Core library entry point; exports the figure styling, sizing, tick formatting and rendering API.

pub mod axes;
pub mod colormap;
pub mod config;
pub mod contour;
pub mod cycle;
pub mod error;
pub mod field;
pub mod figure;
pub mod grid;
pub mod layout;
pub mod locale;
pub(crate) mod render;
pub mod scale;
pub mod series;
pub mod size;
pub mod style;
pub mod text;
pub mod ticks;
pub mod types;

pub use axes::{Axis, ScalarFormatter, TickParams};
pub use colormap::{ColorRange, Colormap};
pub use config::{FigureOptions, Metadata};
pub use contour::{contourplot, ContourOptions};
pub use cycle::{LineStyle, PropCycle, Rgb};
pub use error::{FigureError, Result};
pub use field::ScalarField;
pub use figure::{Axes, Figure, RenderOptions};
pub use locale::NumberLocale;
pub use series::Series;
pub use size::{FigureSize, LengthUnit};
pub use style::FigureStyle;
pub use text::TextShaper;
pub use ticks::{AxisValueTable, IndexTickFormatter, TickLabel};
pub use types::FracRect;

/// Style a figure and lay out its axes in one call.
///
/// `width`/`height` are in `unit`; a missing (or zero) dimension is completed with the
/// golden mean, and with neither given the backend default size applies.
pub fn make_figure(opts: &FigureOptions) -> Result<Figure> {
    Figure::make(opts)
}
