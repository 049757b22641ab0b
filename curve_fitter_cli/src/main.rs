use std::io;

use clap::{Parser, Subcommand};
use log::info;

use curve_fitter::datagen::{sample_points, write_series_csv, GeneratorConfig, IntervalKind};
use curve_fitter::geometry::Point;
use curve_fitter::interpolate::SineInterpolator;
use curve_fitter::io::{
    parse_coords, read_points_csv, read_points_csv_columns, write_points_csv,
};
use curve_fitter::render::write_plot_svg;
use curve_fitter::styles::{PlotConfig, Theme};

fn print_sample(p: Point) {
    println!("{:.3},{:.3}", p.x, p.y);
}

/// Options shared by the commands that render a fitted curve.
#[derive(clap::Args)]
struct PlotArgs {
    /// Number of samples generated per segment.
    #[arg(long, default_value_t = 250)]
    points_per_segment: usize,
    /// Plot title.
    #[arg(long)]
    title: Option<String>,
    /// Use the light color theme instead of the dark default.
    #[arg(long)]
    light: bool,
    /// Draw grid lines.
    #[arg(long)]
    grid: bool,
}

impl PlotArgs {
    fn config(&self, x_label: Option<String>, y_label: Option<String>) -> PlotConfig {
        let mut cfg = PlotConfig::default().with_labels(x_label, y_label);
        if self.light {
            cfg.theme = Theme::Light;
        }
        cfg.show_grid = self.grid;
        if let Some(title) = &self.title {
            cfg.title = title.clone();
        }
        cfg
    }
}

fn fit_and_render(
    points: &[Point],
    output: &str,
    cfg: &PlotConfig,
    points_per_segment: usize,
    samples_csv: Option<&str>,
) -> io::Result<usize> {
    let curve = SineInterpolator::new(points_per_segment).interpolate(points)?;
    if let Some(path) = samples_csv {
        write_points_csv(path, &curve.vertices)?;
    }
    write_plot_svg(output, &curve, points, cfg)?;
    info!("rendered {} samples to {}", curve.vertices.len(), output);
    Ok(curve.vertices.len())
}

#[derive(Parser)]
#[command(name = "curve_fitter_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a curve through points from a CSV file and render it to an SVG plot.
    Fit {
        input: String,
        output: String,
        /// Name of the x column (defaults to the first column).
        #[arg(long)]
        x_column: Option<String>,
        /// Name of the y column (defaults to the second column).
        #[arg(long)]
        y_column: Option<String>,
        /// Also write the curve samples to this CSV file.
        #[arg(long)]
        samples_csv: Option<String>,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Fit a curve through points given as a coordinate string like "(1, 2), (3, 4)".
    FitCoords {
        coords: String,
        output: String,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Print interpolated curve samples for points from a CSV file.
    Samples {
        input: String,
        #[arg(long, default_value_t = 250)]
        points_per_segment: usize,
    },
    /// Generate a synthetic day-cycle data CSV.
    Generate {
        output: String,
        /// Total period in hours.
        #[arg(long, default_value_t = 24.0)]
        period: f64,
        /// Number of data points.
        #[arg(long, default_value_t = 25)]
        points: usize,
        /// Interval distribution: regular, random or weighted.
        #[arg(long, default_value = "regular")]
        intervals: String,
        /// Base value of the generated series.
        #[arg(long, default_value_t = 18.0)]
        base_temp: f64,
        /// Amplitude of the generated series.
        #[arg(long, default_value_t = 7.0)]
        amplitude: f64,
        /// Standard deviation of the added noise.
        #[arg(long, default_value_t = 1.2)]
        noise: f64,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Regenerate the demo data set, fit it and render the plot.
    Demo {
        output: String,
        /// Where the regenerated demo CSV is written.
        #[arg(long, default_value = "data_points.csv")]
        data_csv: String,
    },
}

fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Fit {
            input,
            output,
            x_column,
            y_column,
            samples_csv,
            plot,
        } => {
            match read_points_csv_columns(&input, x_column.as_deref(), y_column.as_deref()) {
                Ok((points, x_name, y_name)) => {
                    let cfg = plot.config(Some(x_name), Some(y_name));
                    match fit_and_render(
                        &points,
                        &output,
                        &cfg,
                        plot.points_per_segment,
                        samples_csv.as_deref(),
                    ) {
                        Ok(n) => println!("Wrote {} ({} samples)", output, n),
                        Err(e) => eprintln!("Error fitting {}: {}", input, e),
                    }
                }
                Err(e) => eprintln!("Error reading {}: {}", input, e),
            }
        }
        Commands::FitCoords {
            coords,
            output,
            plot,
        } => match parse_coords(&coords) {
            Ok(points) => {
                let cfg = plot.config(None, None);
                match fit_and_render(&points, &output, &cfg, plot.points_per_segment, None) {
                    Ok(n) => println!("Wrote {} ({} samples)", output, n),
                    Err(e) => eprintln!("Error fitting coordinates: {}", e),
                }
            }
            Err(e) => eprintln!("Error parsing coordinates: {}", e),
        },
        Commands::Samples {
            input,
            points_per_segment,
        } => match read_points_csv(&input) {
            Ok(points) => {
                match SineInterpolator::new(points_per_segment).interpolate(&points) {
                    Ok(curve) => {
                        for v in &curve.vertices {
                            print_sample(*v);
                        }
                    }
                    Err(e) => eprintln!("Error fitting {}: {}", input, e),
                }
            }
            Err(e) => eprintln!("Error reading {}: {}", input, e),
        },
        Commands::Generate {
            output,
            period,
            points,
            intervals,
            base_temp,
            amplitude,
            noise,
            seed,
        } => match IntervalKind::from_name(&intervals) {
            Some(interval) => {
                let cfg = GeneratorConfig {
                    period_hours: period,
                    num_points: points,
                    interval,
                    base_value: base_temp,
                    amplitude,
                    noise_std: noise,
                    seed,
                };
                match write_series_csv(&output, &cfg) {
                    Ok(series) => println!(
                        "CSV file '{}' created with {} data points across {} hours",
                        output,
                        series.len(),
                        period
                    ),
                    Err(e) => eprintln!("Error writing {}: {}", output, e),
                }
            }
            None => eprintln!("Unknown interval distribution: {}", intervals),
        },
        Commands::Demo { output, data_csv } => {
            let gen_cfg = GeneratorConfig::default();
            if let Err(e) = write_series_csv(&data_csv, &gen_cfg) {
                eprintln!("Error writing {}: {}", data_csv, e);
            }
            match read_points_csv_columns(&data_csv, None, None) {
                Ok((points, x_name, y_name)) => {
                    let mut cfg = PlotConfig::default().with_labels(Some(x_name), Some(y_name));
                    cfg.title = "Sine Interpolation".to_string();
                    cfg.show_grid = true;
                    match fit_and_render(&points, &output, &cfg, 250, None) {
                        Ok(n) => println!("Wrote {} ({} samples)", output, n),
                        Err(e) => eprintln!("Error fitting {}: {}", data_csv, e),
                    }
                }
                Err(e) => {
                    eprintln!(
                        "CSV file '{}' not found ({}). Using sample points instead.",
                        data_csv, e
                    );
                    let points = sample_points();
                    let mut cfg = PlotConfig::default();
                    cfg.title = "Smooth Sine Interpolation Demo".to_string();
                    cfg.show_grid = true;
                    match fit_and_render(&points, &output, &cfg, 250, None) {
                        Ok(n) => println!("Wrote {} ({} samples)", output, n),
                        Err(e) => eprintln!("Error fitting sample points: {}", e),
                    }
                }
            }
        }
    }
}
