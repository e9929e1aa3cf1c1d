//! Plotting utilities for the fbench test functions
//!
//! Everything here is presentation glue around `plotly`:
//!
//! - [`coordinates`]: evaluate a function on a 1-D line or a 2-D mesh grid
//! - [`colormap`]: named colormaps, discrete colour sampling
//! - [`config`]: explicit style structs for lines, contours and surfaces
//! - [`plot`]: add traces for coordinates and optima to a `plotly::Plot`
//! - [`plotter`]: [`FunctionPlotter`] and the predefined plotter sets
//!
//! # Example
//!
//! ```rust
//! use fbench_testfunctions::TestFunction;
//! use fbench_viz::{FunctionPlotter, PlotterOptions};
//!
//! let plotter = FunctionPlotter::for_function(
//!     TestFunction::Sphere,
//!     vec![(-2.0, 2.0), (-2.0, 2.0)],
//!     PlotterOptions { n_grid_points: 11, ..Default::default() },
//! )?;
//! let plots = plotter.plot()?;
//! assert!(plots.plot2d.is_some());
//! assert!(plots.plot3d.is_some());
//! # Ok::<(), fbench_viz::VizError>(())
//! ```

use std::path::PathBuf;

use fbench_testfunctions::VectorError;

pub mod colormap;
pub mod config;
pub mod coordinates;
pub mod plot;
pub mod plotter;

pub use colormap::{Colormap, DiscreteColormapConfig, Palette, Rgba, create_discrete_cmap};
pub use config::{ContourLinesConfig, FilledContourConfig, LineConfig, SurfaceConfig, VizConfig};
pub use coordinates::{CoordinateMatrices, CoordinatePairs, create_coordinates2d, create_coordinates3d};
pub use plot::{create_contour_plot, create_line_plot, create_surface_plot, plot_optima};
pub use plotter::{
    FunctionPlot, FunctionPlotter, PlotCoordinates, PlotterOptions, get_1d_plotter, get_2d_plotter,
};

/// Error type for coordinate construction, configuration and plot output
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error("the total number of bounds must be either 1 or 2, got {0}")]
    InvalidBoundsCount(usize),

    #[error("`with_surface` and `with_contour` cannot both be false")]
    NothingToPlot,

    #[error("unknown colormap '{0}' (expected viridis, YlOrBr or Greys, optionally with a '_r' suffix)")]
    UnknownColormap(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
