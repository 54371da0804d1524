use std::fmt::{Display, Formatter};
use pyo3::PyErr;

/// Possible errors when reading, generating or plotting ray data.
#[derive(Debug)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    NoMatplotlib,
    /// The path contains an elelement that is not a directory or does
    /// not exist.
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    PermissionError,
    /// Other Python errors.
    Python(PyErr),
    /// Reading or writing a data file failed.
    Io(std::io::Error),
    /// A token of the data file is not a floating point number.
    /// Lines are numbered from 1.
    Parse { line: usize, token: String },
    /// A line of the data file holds fewer than two numbers.
    MissingColumns { line: usize, found: usize },
    /// The data file has no header line.
    Empty,
    /// The standard deviation of the diffusion is negative or not
    /// finite.
    InvalidSpread(f64),
    /// A direction given to the generator has zero length.
    ZeroVector,
    /// Invalid command line.
    Usage(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoMatplotlib =>
                write!(f, "The matplotlib library has not been found.\n\
Please install it.  See https://matplotlib.org/\n\
If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554"),
            Error::FileNotFoundError =>
                write!(f, "A path contains an element that is not a \
                           directory or does not exist"),
            Error::PermissionError =>
                write!(f, "Permission denied to access or create the \
                           filesystem path"),
            Error::Python(e) =>
                write!(f, "Python error: {}", e),
            Error::Io(e) =>
                write!(f, "I/O error: {}", e),
            Error::Parse { line, token } =>
                write!(f, "line {}: {:?} is not a number", line, token),
            Error::MissingColumns { line, found } =>
                write!(f, "line {}: expected at least 2 numbers, found {}",
                       line, found),
            Error::Empty =>
                write!(f, "the data file is empty (no header line)"),
            Error::InvalidSpread(s) =>
                write!(f, "invalid diffusion spread {} (must be finite \
                           and non-negative)", s),
            Error::ZeroVector =>
                write!(f, "the incident direction and the surface normal \
                           must be non-zero"),
            Error::Usage(msg) =>
                write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Python(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PyErr> for Error {
    fn from(e: PyErr) -> Self { Error::Python(e) }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::Io(e) }
}

pub type Result<T> = std::result::Result<T, Error>;
