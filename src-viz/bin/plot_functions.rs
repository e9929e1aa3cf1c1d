use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use fbench_env::get_plots_dir;
use fbench_testfunctions::{TestFunction, get_function_metadata};
use fbench_viz::{FunctionPlotter, PlotterOptions, VizConfig, get_1d_plotter, get_2d_plotter};

/// CLI arguments for plotting test functions
#[derive(Parser)]
#[command(name = "plot_functions")]
#[command(about = "Plot the fbench test functions as HTML line, contour and surface plots")]
struct Args {
    /// Functions to plot (comma-separated); plots every predefined plotter if empty
    #[arg(short, long, value_delimiter = ',')]
    functions: Vec<TestFunction>,

    /// Number of grid points along each axis
    #[arg(short = 'n', long)]
    grid_points: Option<usize>,

    /// Do not generate surface plots
    #[arg(long)]
    no_surface: bool,

    /// Do not generate contour plots
    #[arg(long)]
    no_contour: bool,

    /// Output directory for HTML files (default: $FBENCH_DIR/data_generated/plots or ./plots)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JSON file overriding the plot style
    #[arg(long)]
    style: Option<PathBuf>,

    /// List the available functions and exit
    #[arg(long)]
    list: bool,
}

fn list_functions() {
    let metadata = get_function_metadata();
    for func in TestFunction::ALL {
        if let Some(meta) = metadata.get(func.name()) {
            println!(
                "{:<12} dims={:?} bounds={:?} multimodal={}  {}",
                meta.name, meta.dimensions, meta.bounds, meta.multimodal, meta.description
            );
        }
    }
}

fn build_plotters(
    args: &Args,
    options: &PlotterOptions,
) -> Result<BTreeMap<String, FunctionPlotter>, Box<dyn std::error::Error>> {
    if args.functions.is_empty() {
        let mut plotters = get_1d_plotter()?;
        plotters.append(&mut get_2d_plotter()?);
        for plotter in plotters.values_mut() {
            let mut custom = plotter.options().clone();
            custom.with_surface = options.with_surface;
            custom.with_contour = options.with_contour;
            custom.style = options.style.clone();
            if let Some(n) = args.grid_points {
                custom.n_grid_points = n;
            }
            plotter.set_options(custom)?;
        }
        return Ok(plotters);
    }

    let mut plotters = BTreeMap::new();
    for func in &args.functions {
        let bounds = func.metadata().bounds;
        let key = format!("{}_{}D", func.name(), bounds.len());
        plotters.insert(key, FunctionPlotter::for_function(*func, bounds, options.clone())?);
    }
    Ok(plotters)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        list_functions();
        return Ok(());
    }

    let style = match &args.style {
        Some(path) => VizConfig::from_json_file(path)?,
        None => VizConfig::default(),
    };
    let mut options = PlotterOptions {
        with_surface: !args.no_surface,
        with_contour: !args.no_contour,
        style,
        ..Default::default()
    };
    if let Some(n) = args.grid_points {
        options.n_grid_points = n;
    }

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => get_plots_dir()?,
    };

    let plotters = build_plotters(&args, &options)?;
    log::info!(
        "plotting {} functions into {}",
        plotters.len(),
        output_dir.display()
    );

    for (name, plotter) in &plotters {
        let plots = plotter.plot()?;
        let files = plots.write_html(&output_dir, name)?;
        println!("{}: {} file(s)", name, files.len());
    }
    Ok(())
}
