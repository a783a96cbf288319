//! Coordinate-list board files.
//!
//! Each line holds one live cell as `x,y`, 0-indexed, with `x` the row and
//! `y` the column:
//!
//! ```text
//! 23,42
//! 1,4
//! 2,65
//! ```

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

lazy_static! {
    // The sign is captured so negatives are reported as out of bounds
    // instead of being read as their absolute value.
    static ref COORDINATE: Regex = Regex::new(r"(-?\d+),(-?\d+)").unwrap();
}

/// Parse one line of a board file.
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_line(
    line: &str,
    line_no: usize,
    width: usize,
    height: usize,
) -> Result<Option<(usize, usize)>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || LifeError::MalformedCoordinate {
        line: line_no,
        text: line.to_string(),
    };

    let caps = COORDINATE.captures(line).ok_or_else(malformed)?;
    let x: i64 = caps[1].parse().map_err(|_| malformed())?;
    let y: i64 = caps[2].parse().map_err(|_| malformed())?;

    let in_range = |v: i64, bound: usize| usize::try_from(v).ok().filter(|&v| v < bound);

    match (in_range(x, width), in_range(y, height)) {
        (Some(x), Some(y)) => Ok(Some((x, y))),
        _ => Err(LifeError::OutOfBoundsCoordinate {
            x,
            y,
            width,
            height,
        }),
    }
}

/// Read a board file into a new `width × height` grid
pub fn load<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Result<Grid> {
    let path = path.as_ref();
    let mut grid = Grid::new(width, height)?;

    let file = File::open(path).map_err(|source| LifeError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = 0usize;
    // Raw lines: bytes around a coordinate need not be valid UTF-8
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| LifeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let line = String::from_utf8_lossy(&line);

        if let Some((x, y)) = parse_line(&line, index + 1, width, height)? {
            grid.set(x, y, true);
            records += 1;
        }
    }

    log::debug!(
        "Loaded {:?}: {} records, {} live cells on {}x{}",
        path,
        records,
        grid.live_count(),
        width,
        height
    );

    Ok(grid)
}

/// Write every live cell of `grid` as an `x,y` line, row-major
pub fn write_cells<W: Write>(grid: &Grid, mut writer: W) -> io::Result<()> {
    for (x, y) in grid.live_cells() {
        writeln!(writer, "{},{}", x, y)?;
    }
    Ok(())
}

/// Write `grid` to `path`, creating or truncating it
pub fn save<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| LifeError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_cells(grid, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::debug!("Saved {} live cells to {:?}", grid.live_count(), path);

    Ok(())
}
