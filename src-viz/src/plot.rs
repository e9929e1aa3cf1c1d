//! Plotly trace builders
//!
//! Each builder appends traces to an existing `Plot`, so several of them can be
//! combined on one figure (e.g. a contour plot with optima on top).

use fbench_testfunctions::Optimum;
use plotly::common::{ColorScale, ColorScaleElement, Line, Marker, MarkerSymbol, Mode};
use plotly::contour::{Coloring, Contour, Contours};
use plotly::surface::{PlaneContours, PlaneProject, Surface, SurfaceContours};
use plotly::{Plot, Scatter};

use crate::config::{ContourLinesConfig, FilledContourConfig, LineConfig, SurfaceConfig};
use crate::coordinates::{CoordinateMatrices, CoordinatePairs};

/// Add a line trace through (x, y) pairs
pub fn create_line_plot(plot: &mut Plot, coord: &CoordinatePairs, config: &LineConfig) {
    let mut line = Line::new().width(config.width);
    if let Some(color) = &config.color {
        line = line.color(color.clone());
    }
    let trace = Scatter::new(coord.x.to_vec(), coord.y.to_vec())
        .mode(Mode::Lines)
        .name("f(x)")
        .line(line);
    plot.add_trace(trace);
}

/// Add a filled contour and superimposed contour lines
pub fn create_contour_plot(
    plot: &mut Plot,
    coord: &CoordinateMatrices,
    filled: &FilledContourConfig,
    lines: &ContourLinesConfig,
) {
    let x = coord.x_axis();
    let y = coord.y_axis();
    let z = coord.z_rows();

    let filled_trace = Contour::new(x.clone(), y.clone(), z.clone())
        .name("f(x, y)")
        .n_contours(filled.levels)
        .color_scale(filled.colormap.to_color_scale())
        .opacity(filled.opacity)
        .show_scale(filled.show_scale)
        .contours(Contours::new().coloring(Coloring::Fill).show_lines(false));
    plot.add_trace(filled_trace);

    // a one-colour scale turns line coloring into plain lines
    let line_scale = ColorScale::Vector(vec![
        ColorScaleElement(0.0, lines.color.clone()),
        ColorScaleElement(1.0, lines.color.clone()),
    ]);
    let line_trace = Contour::new(x, y, z)
        .name("contour lines")
        .n_contours(lines.levels)
        .color_scale(line_scale)
        .opacity(lines.opacity)
        .show_scale(false)
        .contours(Contours::new().coloring(Coloring::Lines))
        .line(Line::new().width(lines.line_width));
    plot.add_trace(line_trace);
}

/// Add a 3-D surface trace
///
/// Edge lines follow the x and y grid directions; floor contours are projected
/// onto the z plane and start at the minimum of z.
pub fn create_surface_plot(plot: &mut Plot, coord: &CoordinateMatrices, config: &SurfaceConfig) {
    let mut contours = SurfaceContours::new();
    if let Some(color) = &config.edge_color {
        let edge = PlaneContours::new().show(true).color(color.clone()).width(1);
        contours = contours.x(edge.clone()).y(edge);
    }
    if config.floor_contours {
        contours = contours.z(
            PlaneContours::new()
                .show(true)
                .use_colormap(true)
                .start(coord.z_min())
                .project(PlaneProject::new().z(true)),
        );
    }

    let trace = Surface::new(coord.z_rows())
        .x(coord.x_axis())
        .y(coord.y_axis())
        .name("f(x, y)")
        .color_scale(config.colormap.to_color_scale())
        .opacity(config.opacity)
        .show_scale(config.show_scale)
        .contours(contours);
    plot.add_trace(trace);
}

/// Add markers for known optima
///
/// 1-D optima are drawn at `(x, f(x))` (on top of a line plot), 2-D optima at
/// `(x1, x2)` (on top of a contour plot). Optima of higher dimension cannot be
/// drawn and are skipped. Returns the number of markers added.
pub fn plot_optima(plot: &mut Plot, optima: &[Optimum]) -> usize {
    let (xs, ys): (Vec<f64>, Vec<f64>) = optima
        .iter()
        .filter_map(|opt| match opt.n {
            1 => Some((opt.x[0], opt.fx)),
            2 => Some((opt.x[0], opt.x[1])),
            _ => None,
        })
        .unzip();

    if xs.len() < optima.len() {
        log::debug!(
            "skipping {} optima of dimension > 2",
            optima.len() - xs.len()
        );
    }
    if xs.is_empty() {
        return 0;
    }

    let count = xs.len();
    let trace = Scatter::new(xs, ys)
        .mode(Mode::Markers)
        .name("Optima")
        .marker(
            Marker::new()
                .color("rgba(255, 255, 255, 1.0)")
                .size(10)
                .line(Line::new().color("rgba(255, 0, 255, 1.0)").width(3.0))
                .symbol(MarkerSymbol::Diamond),
        );
    plot.add_trace(trace);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::{create_coordinates2d, create_coordinates3d};
    use fbench_testfunctions::{TestFunction, get_optima, sphere};
    use ndarray::Array1;
    use serde_json::Value;

    fn traces(plot: &Plot) -> Vec<Value> {
        let json: Value = serde_json::from_str(&plot.to_json()).unwrap();
        json["data"].as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn test_create_line_plot() {
        let coord = create_coordinates2d(|x| sphere(x), [-1.0, 0.0, 1.0]).unwrap();
        let mut plot = Plot::new();
        create_line_plot(&mut plot, &coord, &LineConfig::default());
        let data = traces(&plot);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["type"], "scatter");
        assert_eq!(data[0]["y"], serde_json::json!([1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_create_contour_plot() {
        let coord = create_coordinates3d(|x| sphere(x), [-1.0, 0.0, 1.0], None).unwrap();
        let mut plot = Plot::new();
        create_contour_plot(
            &mut plot,
            &coord,
            &FilledContourConfig::default(),
            &ContourLinesConfig::default(),
        );
        let data = traces(&plot);
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|trace| trace["type"] == "contour"));
    }

    #[test]
    fn test_create_surface_plot() {
        let coord = create_coordinates3d(|x| sphere(x), [-1.0, 0.0, 1.0], None).unwrap();
        let mut plot = Plot::new();
        create_surface_plot(&mut plot, &coord, &SurfaceConfig::default());
        let data = traces(&plot);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["type"], "surface");

        let contours = &data[0]["contours"];
        assert_eq!(contours["x"]["color"], "dimgray");
        assert_eq!(contours["y"]["show"], true);
        assert_eq!(contours["z"]["start"], coord.z_min());
        assert_eq!(contours["z"]["start"], 0.0);
        assert_eq!(contours["z"]["project"]["z"], true);
    }

    #[test]
    fn test_create_surface_plot_without_contours() {
        let coord = create_coordinates3d(|x| sphere(x), [-1.0, 0.0, 1.0], None).unwrap();
        let config = SurfaceConfig {
            edge_color: None,
            floor_contours: false,
            ..Default::default()
        };
        let mut plot = Plot::new();
        create_surface_plot(&mut plot, &coord, &config);
        let data = traces(&plot);
        assert!(data[0]["contours"]["x"].is_null());
        assert!(data[0]["contours"]["z"].is_null());
    }

    #[test]
    fn test_plot_optima() {
        let mut plot = Plot::new();
        let sinc_optima = get_optima(1, TestFunction::Sinc).unwrap();
        assert_eq!(plot_optima(&mut plot, &sinc_optima), 2);

        let peaks_optima = get_optima(2, TestFunction::Peaks).unwrap();
        assert_eq!(plot_optima(&mut plot, &peaks_optima), 2);
        assert_eq!(traces(&plot).len(), 2);
    }

    #[test]
    fn test_plot_optima_skips_high_dimensional_points() {
        let mut plot = Plot::new();
        let optima = vec![fbench_testfunctions::Optimum::new(Array1::zeros(3), 0.0)];
        assert_eq!(plot_optima(&mut plot, &optima), 0);
        assert!(traces(&plot).is_empty());
    }
}
