//! Plot a scalar-valued function of a 1-vector or a 2-vector
//!
//! [`FunctionPlotter`] owns the function, its plotting domain and every option
//! needed to draw it; there is no implicit state and no partially applied
//! helper. One-dimensional functions become a line plot, two-dimensional
//! functions a surface plot and/or a contour plot.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use fbench_testfunctions::{Optimum, TestFunction, VectorError, get_optima, rosenbrock};
use ndarray::Array1;
use plotly::common::Title;
use plotly::layout::Axis;
use plotly::{Layout, Plot};
use serde::{Deserialize, Serialize};

use crate::VizError;
use crate::config::VizConfig;
use crate::coordinates::{
    CoordinateMatrices, CoordinatePairs, create_coordinates2d, create_coordinates3d,
};
use crate::plot::{create_contour_plot, create_line_plot, create_surface_plot, plot_optima};

/// A function that can be plotted
pub type Objective = Box<dyn Fn(&Array1<f64>) -> Result<f64, VectorError> + Send + Sync>;

/// Options of a [`FunctionPlotter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterOptions {
    /// Generate the surface plot (2-D functions only)
    pub with_surface: bool,
    /// Generate the contour plot (2-D functions only)
    pub with_contour: bool,
    /// Number of grid points on one axis; ignored for an axis whose coordinates are given
    pub n_grid_points: usize,
    pub x_coord: Option<Vec<f64>>,
    pub y_coord: Option<Vec<f64>>,
    pub width: usize,
    pub height: usize,
    pub style: VizConfig,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self {
            with_surface: true,
            with_contour: true,
            n_grid_points: 101,
            x_coord: None,
            y_coord: None,
            width: 800,
            height: 800,
            style: VizConfig::default(),
        }
    }
}

/// Coordinates computed by a plotter: pairs for 1-D, matrices for 2-D
#[derive(Debug, Clone, PartialEq)]
pub enum PlotCoordinates {
    Pairs(CoordinatePairs),
    Matrices(CoordinateMatrices),
}

/// Plots generated by [`FunctionPlotter::plot`]
///
/// `plot2d` holds the line plot (1-D functions) or the contour plot (2-D
/// functions), `plot3d` the surface plot.
#[derive(Clone, Default)]
pub struct FunctionPlot {
    pub plot2d: Option<Plot>,
    pub plot3d: Option<Plot>,
}

// plotly::Plot has no Debug impl
impl fmt::Debug for FunctionPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPlot")
            .field("plot2d", &self.plot2d.is_some())
            .field("plot3d", &self.plot3d.is_some())
            .finish()
    }
}

impl FunctionPlot {
    /// Write each generated plot as `<stem>_2d.html` / `<stem>_3d.html` into `dir`
    pub fn write_html(&self, dir: &Path, stem: &str) -> Result<Vec<PathBuf>, VizError> {
        std::fs::create_dir_all(dir).map_err(|source| VizError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::new();
        for (plot, suffix) in [(&self.plot2d, "2d"), (&self.plot3d, "3d")] {
            if let Some(plot) = plot {
                let path = dir.join(format!("{}_{}.html", stem.replace(' ', "_"), suffix));
                std::fs::write(&path, plot.to_html()).map_err(|source| VizError::Io {
                    path: path.clone(),
                    source,
                })?;
                log::info!("wrote {}", path.display());
                written.push(path);
            }
        }
        Ok(written)
    }
}

/// Plot a scalar-valued function with a 1-vector or 2-vector input
pub struct FunctionPlotter {
    name: String,
    func: Objective,
    bounds: Vec<(f64, f64)>,
    optima: Vec<Optimum>,
    options: PlotterOptions,
}

impl FunctionPlotter {
    /// Create a plotter
    ///
    /// # Arguments
    /// * `name` - Title of the plot
    /// * `func` - Function to plot
    /// * `bounds` - One `(min, max)` pair per element of the input vector
    /// * `options` - Grid and style options
    ///
    /// # Errors
    /// * [`VizError::InvalidBoundsCount`] unless there are 1 or 2 bounds
    /// * [`VizError::NothingToPlot`] if a 2-D plotter has neither surface nor contour
    pub fn new<F>(
        name: impl Into<String>,
        func: F,
        bounds: Vec<(f64, f64)>,
        options: PlotterOptions,
    ) -> Result<Self, VizError>
    where
        F: Fn(&Array1<f64>) -> Result<f64, VectorError> + Send + Sync + 'static,
    {
        validate(&bounds, &options)?;

        let name = name.into();
        log::debug!("new plotter {} with bounds {:?}", name, bounds);
        Ok(Self {
            name,
            func: Box::new(func),
            bounds,
            optima: Vec::new(),
            options,
        })
    }

    /// Create a plotter for a catalogue function, with its known optima marked
    pub fn for_function(
        func: TestFunction,
        bounds: Vec<(f64, f64)>,
        options: PlotterOptions,
    ) -> Result<Self, VizError> {
        let optima = get_optima(bounds.len(), func).unwrap_or_default();
        let plotter = Self::new(func.name(), move |x| func.evaluate(x), bounds, options)?;
        Ok(plotter.with_optima(optima))
    }

    /// Mark `optima` on the 2-D plot
    pub fn with_optima(mut self, optima: Vec<Optimum>) -> Self {
        self.optima = optima;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    pub fn optima(&self) -> &[Optimum] {
        &self.optima
    }

    pub fn options(&self) -> &PlotterOptions {
        &self.options
    }

    /// Replace the options, with the same checks as [`FunctionPlotter::new`]
    pub fn set_options(&mut self, options: PlotterOptions) -> Result<(), VizError> {
        validate(&self.bounds, &options)?;
        self.options = options;
        Ok(())
    }

    /// Evaluate the plotted function
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64, VectorError> {
        (self.func)(x)
    }

    fn axis_coord(&self, given: &Option<Vec<f64>>, (a, b): (f64, f64)) -> Array1<f64> {
        match given {
            Some(coord) => Array1::from(coord.clone()),
            None => Array1::linspace(a.min(b), a.max(b), self.options.n_grid_points),
        }
    }

    /// Evaluate the function on the plotting grid
    pub fn coordinates(&self) -> Result<PlotCoordinates, VizError> {
        let x_coord = self.axis_coord(&self.options.x_coord, self.bounds[0]);
        if self.bounds.len() == 1 {
            let pairs = create_coordinates2d(|x| self.evaluate(x), x_coord)?;
            return Ok(PlotCoordinates::Pairs(pairs));
        }
        let y_coord = self.axis_coord(&self.options.y_coord, self.bounds[1]);
        let matrices = create_coordinates3d(|x| self.evaluate(x), x_coord, Some(y_coord))?;
        Ok(PlotCoordinates::Matrices(matrices))
    }

    /// Generate the plots
    pub fn plot(&self) -> Result<FunctionPlot, VizError> {
        let style = &self.options.style;
        let mut output = FunctionPlot::default();

        match self.coordinates()? {
            PlotCoordinates::Pairs(coord) => {
                let mut plot = Plot::new();
                create_line_plot(&mut plot, &coord, &style.line);
                plot_optima(&mut plot, &self.optima);
                plot.set_layout(self.layout("f(x)"));
                output.plot2d = Some(plot);
            }
            PlotCoordinates::Matrices(coord) => {
                if self.options.with_surface {
                    let mut plot = Plot::new();
                    create_surface_plot(&mut plot, &coord, &style.surface);
                    plot.set_layout(self.layout("y"));
                    output.plot3d = Some(plot);
                }
                if self.options.with_contour {
                    let mut plot = Plot::new();
                    create_contour_plot(&mut plot, &coord, &style.filled_contour, &style.contour_lines);
                    plot_optima(&mut plot, &self.optima);
                    plot.set_layout(self.layout("y"));
                    output.plot2d = Some(plot);
                }
            }
        }
        Ok(output)
    }

    fn layout(&self, y_title: &str) -> Layout {
        Layout::new()
            .title(Title::with_text(self.name.as_str()))
            .width(self.options.width)
            .height(self.options.height)
            .x_axis(Axis::new().title(Title::with_text("x")))
            .y_axis(Axis::new().title(Title::with_text(y_title)))
    }
}

fn validate(bounds: &[(f64, f64)], options: &PlotterOptions) -> Result<(), VizError> {
    if !(1..=2).contains(&bounds.len()) {
        return Err(VizError::InvalidBoundsCount(bounds.len()));
    }
    if bounds.len() == 2 && !options.with_surface && !options.with_contour {
        return Err(VizError::NothingToPlot);
    }
    Ok(())
}

impl fmt::Debug for FunctionPlotter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionPlotter(func={}, bounds={:?})", self.name, self.bounds)
    }
}

/// Predefined plotters for functions with 1-vector input
pub fn get_1d_plotter() -> Result<BTreeMap<String, FunctionPlotter>, VizError> {
    let options = PlotterOptions {
        n_grid_points: 1001,
        ..Default::default()
    };
    let mut plotters = BTreeMap::new();
    for (name, func, bounds) in [
        ("Ackley_1D", TestFunction::Ackley, (-5.0, 5.0)),
        ("Rastrigin_1D", TestFunction::Rastrigin, (-5.0, 5.0)),
    ] {
        let plotter = FunctionPlotter::for_function(func, vec![bounds], options.clone())?;
        plotters.insert(name.to_string(), plotter);
    }
    Ok(plotters)
}

/// Predefined plotters for functions with 2-vector input
pub fn get_2d_plotter() -> Result<BTreeMap<String, FunctionPlotter>, VizError> {
    let options = PlotterOptions::default();
    let mut plotters = BTreeMap::new();
    for (name, func, bound) in [
        ("Ackley_2D", TestFunction::Ackley, (-5.0, 5.0)),
        ("Peaks_2D", TestFunction::Peaks, (-3.0, 3.0)),
        ("Rastrigin_2D", TestFunction::Rastrigin, (-5.12, 5.12)),
        ("Rosenbrock_2D", TestFunction::Rosenbrock, (-2.0, 2.0)),
        ("Sphere_2D", TestFunction::Sphere, (-2.0, 2.0)),
    ] {
        let plotter = FunctionPlotter::for_function(func, vec![bound; 2], options.clone())?;
        plotters.insert(name.to_string(), plotter);
    }

    // log scale makes the banana valley visible
    let log1p = FunctionPlotter::new(
        "Rosenbrock_2D_log1p",
        |x| rosenbrock(x).map(f64::ln_1p),
        vec![(-2.0, 2.0); 2],
        options,
    )?;
    plotters.insert(log1p.name().to_string(), log1p);

    Ok(plotters)
}
