//! Synthetic demo-data generation.
//!
//! Produces a day-cycle temperature series: time points distributed over a
//! period, a sine base signal, and optional Gaussian measurement noise.
//! Seeded generation is reproducible, which the demo and tests rely on.

use std::f64::consts::PI;
use std::fs::File;
use std::io::{self, Write};

use log::info;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;

use crate::geometry::Point;

/// Distribution of generated time points over the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalKind {
    /// Evenly spaced, both period endpoints included.
    #[default]
    Regular,
    /// Uniform draws plus the period endpoint.
    Random,
    /// Uniform draws bucketed by day part, more points in waking hours.
    Weighted,
}

impl IntervalKind {
    /// Parses a distribution name. Case insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "regular" => Some(Self::Regular),
            "random" => Some(Self::Random),
            "weighted" => Some(Self::Weighted),
            _ => None,
        }
    }
}

/// Configuration for a generated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub period_hours: f64,
    pub num_points: usize,
    pub interval: IntervalKind,
    pub base_value: f64,
    pub amplitude: f64,
    pub noise_std: f64,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            period_hours: 24.0,
            num_points: 25,
            interval: IntervalKind::Regular,
            base_value: 18.0,
            amplitude: 7.0,
            noise_std: 1.2,
            seed: None,
        }
    }
}

/// Day parts as fractions of a 24 hour cycle, with their sampling weights.
const DAY_PARTS: [(f64, f64, f64); 4] = [
    (0.0, 6.0, 0.15),  // early morning
    (6.0, 12.0, 0.30), // morning
    (12.0, 18.0, 0.30), // afternoon
    (18.0, 24.0, 0.25), // night
];

fn regular_times(period: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| period * i as f64 / (n - 1) as f64)
        .collect()
}

fn draw(rng: &mut Pcg32, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn random_times(period: f64, n: usize, rng: &mut Pcg32) -> Vec<f64> {
    let mut times: Vec<f64> = (0..n.saturating_sub(1))
        .map(|_| draw(rng, 0.0, period))
        .collect();
    times.push(period);
    times.sort_by(f64::total_cmp);
    times
}

fn weighted_times(period: f64, n: usize, rng: &mut Pcg32) -> Vec<f64> {
    let scale = period / 24.0;
    let mut counts: Vec<usize> = DAY_PARTS
        .iter()
        .map(|(_, _, w)| 1usize.max((w * n as f64) as usize))
        .collect();

    // Balance truncation so the bucket counts sum to exactly n.
    let mut diff = n as i64 - counts.iter().sum::<usize>() as i64;
    let len = counts.len();
    let mut i = 0;
    while diff != 0 {
        if diff > 0 {
            counts[i % len] += 1;
            diff -= 1;
        } else if counts[i % len] > 0 {
            counts[i % len] -= 1;
            diff += 1;
        }
        i += 1;
    }

    let mut times = Vec::with_capacity(n);
    for ((start, end, _), count) in DAY_PARTS.iter().zip(&counts) {
        let (lo, hi) = (start * scale, end * scale);
        for _ in 0..*count {
            times.push(draw(rng, lo, hi));
        }
    }
    times.sort_by(f64::total_cmp);
    times
}

/// Generates a series of `(time, value)` points for `cfg`.
pub fn generate_series(cfg: &GeneratorConfig) -> Vec<Point> {
    let mut rng = match cfg.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_entropy(),
    };

    let times = match cfg.interval {
        IntervalKind::Regular => regular_times(cfg.period_hours, cfg.num_points),
        IntervalKind::Random => random_times(cfg.period_hours, cfg.num_points, &mut rng),
        IntervalKind::Weighted => weighted_times(cfg.period_hours, cfg.num_points, &mut rng),
    };

    let noise = Normal::new(0.0, cfg.noise_std).ok();
    times
        .into_iter()
        .map(|t| {
            let base =
                cfg.base_value + cfg.amplitude * (2.0 * PI * t / cfg.period_hours - PI / 2.0).sin();
            let eps = noise.as_ref().map_or(0.0, |d| d.sample(&mut rng));
            Point::new(t, base + eps)
        })
        .collect()
}

/// Generates a series and writes it as a headered CSV file.
pub fn write_series_csv(path: &str, cfg: &GeneratorConfig) -> io::Result<Vec<Point>> {
    let points = generate_series(cfg);
    let mut file = File::create(path)?;
    writeln!(file, "Time (hours),Temperature (°C)")?;
    for p in &points {
        writeln!(file, "{},{}", p.x, p.y)?;
    }
    info!("wrote {} generated points to {}", points.len(), path);
    Ok(points)
}

/// Built-in fallback demo points used when no data file is available.
pub fn sample_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 5.0),
        Point::new(2.0, 0.0),
        Point::new(4.0, 10.0),
        Point::new(6.0, 5.0),
        Point::new(8.0, 0.0),
    ]
}
