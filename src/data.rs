//! Ray data files.
//!
//! The first line holds the ideal reflected direction, each following
//! line one diffused ray.  Numbers are separated by whitespace; only
//! the first two columns of a line are used but every column must be
//! a number.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};
use log::{debug, info};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// End point of the segment drawn from the origin.
    pub direction: (f64, f64),
    /// Scattered points, in file order.
    pub points: Vec<(f64, f64)>,
}

/// Parse the numbers of line `line` (1-based) and return its first two.
fn parse_pair(line: usize, text: &str) -> Result<(f64, f64)> {
    let mut found = 0;
    let mut pair = [0.; 2];
    for token in text.split_whitespace() {
        let v: f64 = token.parse().map_err(|_| Error::Parse {
            line, token: token.to_string() })?;
        if found < 2 {
            pair[found] = v;
        }
        found += 1;
    }
    if found < 2 {
        return Err(Error::MissingColumns { line, found })
    }
    Ok((pair[0], pair[1]))
}

impl Dataset {
    pub fn new(direction: (f64, f64), points: Vec<(f64, f64)>) -> Self {
        Dataset { direction, points }
    }

    /// Read a dataset from `reader`.
    pub fn parse(reader: impl BufRead) -> Result<Dataset> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(l) => l?,
            None => return Err(Error::Empty),
        };
        let direction = parse_pair(1, &header)?;
        let mut points = Vec::new();
        for (i, l) in lines.enumerate() {
            points.push(parse_pair(i + 2, &l?)?);
        }
        debug!("parsed direction {:?} and {} points", direction, points.len());
        Ok(Dataset { direction, points })
    }

    /// Read the dataset stored in the file `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let d = Self::parse(BufReader::new(File::open(path)?))?;
        info!("read {} points from {}", d.points.len(), path.display());
        Ok(d)
    }

    /// Write the dataset in the format read by [`Dataset::parse`].
    pub fn write(&self, mut w: impl Write) -> Result<()> {
        let (x, y) = self.direction;
        writeln!(w, "{} {}", x, y)?;
        for (x, y) in &self.points {
            writeln!(w, "{} {}", x, y)?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write(BufWriter::new(File::create(path)?))?;
        info!("wrote {} points to {}", self.points.len(), path.display());
        Ok(())
    }

    /// First coordinates of the points.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    /// Second coordinates of the points.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Dataset> {
        Dataset::parse(s.as_bytes())
    }

    #[test]
    fn header_becomes_direction() -> Result<()> {
        let d = parse("0.7071 0.7071\n0.5 0.1\n")?;
        assert_eq!(d.direction, (0.7071, 0.7071));
        Ok(())
    }

    #[test]
    fn points_keep_file_order() -> Result<()> {
        let d = parse("1 0\n0.3 0.2\n-0.5 0.9\n0.1 -0.4\n")?;
        assert_eq!(d.points, vec![(0.3, 0.2), (-0.5, 0.9), (0.1, -0.4)]);
        assert_eq!(d.xs(), vec![0.3, -0.5, 0.1]);
        assert_eq!(d.ys(), vec![0.2, 0.9, -0.4]);
        Ok(())
    }

    #[test]
    fn extra_columns_are_ignored() -> Result<()> {
        let d = parse("1 2 3 4\n\t5   6 7\n8 9 1e3 -0.5\n")?;
        assert_eq!(d.direction, (1., 2.));
        assert_eq!(d.points, vec![(5., 6.), (8., 9.)]);
        Ok(())
    }

    #[test]
    fn header_only() -> Result<()> {
        let d = parse("0.5 -0.5")?;
        assert_eq!(d.direction, (0.5, -0.5));
        assert!(d.points.is_empty());
        Ok(())
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse(""), Err(Error::Empty)));
    }

    #[test]
    fn bad_token_reports_line() {
        match parse("1 1\n0.5 0.5\n0.2 abc\n") {
            Err(Error::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn unused_column_must_still_be_a_number() {
        assert!(matches!(parse("1 1 x\n"),
                         Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn short_and_blank_lines() {
        assert!(matches!(parse("1\n"),
                         Err(Error::MissingColumns { line: 1, found: 1 })));
        assert!(matches!(parse("1 1\n\n2 2\n"),
                         Err(Error::MissingColumns { line: 2, found: 0 })));
    }

    #[test]
    fn written_data_reads_back() -> Result<()> {
        let d = Dataset::new((0.70710678, 0.70710678),
                             vec![(0.25, -1e-3), (-0.125, 0.5)]);
        let mut buf = Vec::new();
        d.write(&mut buf)?;
        assert_eq!(String::from_utf8(buf.clone()).unwrap(),
                   "0.70710678 0.70710678\n0.25 -0.001\n-0.125 0.5\n");
        assert_eq!(Dataset::parse(&buf[..])?, d);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let r = Dataset::from_file("target/there-is-no-such-file.txt");
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
