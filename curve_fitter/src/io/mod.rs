//! File input and output helpers for point data.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::geometry::Point;

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*([^,]+)\s*,\s*([^)]+)\s*\)").expect("coordinate regex"));

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}

/// Reads a file into a vector of lines.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    BufReader::new(File::open(path)?).lines().collect()
}

/// Extracts `(x, y)` pairs from free text such as `(1, 2), (3, 4)`.
///
/// Text outside parenthesized pairs is ignored; a pair whose fields do not
/// parse as numbers is an error.
pub fn parse_coords(text: &str) -> io::Result<Vec<Point>> {
    let mut pts = Vec::new();
    for cap in COORD_RE.captures_iter(text) {
        let x = parse_field(&cap[1])?;
        let y = parse_field(&cap[2])?;
        pts.push(Point::new(x, y));
    }
    Ok(pts)
}

fn parse_field(field: &str) -> io::Result<f64> {
    field.trim().parse::<f64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("coordinate '{}': {}", field.trim(), e),
        )
    })
}

fn parse_xy(parts: &[&str]) -> Result<Point, String> {
    if parts.len() < 2 {
        return Err("expected two comma-separated values".to_string());
    }
    let x = parts[0].trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = parts[1].trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

/// Reads a CSV file of `x,y` pairs into [`Point`]s.
///
/// Blank lines are skipped. A first data line that does not parse as
/// numbers is treated as a header row; any later malformed line is an
/// error carrying its line number.
pub fn read_points_csv(path: &str) -> io::Result<Vec<Point>> {
    let lines = read_lines(path)?;
    let mut pts = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        match parse_xy(&parts) {
            Ok(p) => pts.push(p),
            Err(e) => {
                if pts.is_empty() && idx == first_content_line(&lines) {
                    continue; // header row
                }
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: {}", idx + 1, e),
                ));
            }
        }
    }
    info!("read {} points from {}", pts.len(), path);
    Ok(pts)
}

fn first_content_line(lines: &[String]) -> usize {
    lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(0)
}

/// Reads a headered CSV file, selecting the x and y columns by name.
///
/// `x_column`/`y_column` default to the first and second column. Returns
/// the points together with the resolved column names, which callers use
/// as axis labels.
pub fn read_points_csv_columns(
    path: &str,
    x_column: Option<&str>,
    y_column: Option<&str>,
) -> io::Result<(Vec<Point>, String, String)> {
    let lines = read_lines(path)?;
    let header_idx = first_content_line(&lines);
    let header: Vec<String> = lines
        .get(header_idx)
        .map(|l| l.split(',').map(|c| c.trim().to_string()).collect())
        .unwrap_or_default();
    if header.len() < 2 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "CSV file must have at least 2 columns, found {}",
                header.len()
            ),
        ));
    }

    let x_name = x_column.unwrap_or(&header[0]);
    let y_name = y_column.unwrap_or(&header[1]);
    let x_idx = column_index(&header, x_name)?;
    let y_idx = column_index(&header, y_name)?;

    let mut pts = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(header_idx + 1) {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() <= x_idx.max(y_idx) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected {} columns", idx + 1, header.len()),
            ));
        }
        let x = parts[x_idx].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        let y = parts[y_idx].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        pts.push(Point::new(x, y));
    }
    info!("read {} points from {}", pts.len(), path);
    Ok((pts, x_name.to_string(), y_name.to_string()))
}

fn column_index(header: &[String], name: &str) -> io::Result<usize> {
    header.iter().position(|c| c == name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("column '{}' not found in CSV file", name),
        )
    })
}

/// Writes points as `x,y` lines.
pub fn write_points_csv(path: &str, points: &[Point]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for p in points {
        writeln!(file, "{},{}", p.x, p.y)?;
    }
    Ok(())
}

/// Writes points as a JSON array.
pub fn write_points_json(path: &str, points: &[Point]) -> io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, points)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Reads points from a JSON array written by [`write_points_json`].
pub fn read_points_json(path: &str) -> io::Result<Vec<Point>> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
