//! Thin bindings to the parts of [Matplotlib][] needed to draw ray
//! diagrams: one axes per figure, line plots, scatter plots, axis
//! limits, display and export.
//!
//! The interface stays close to Matplotlib's explicit one while
//! keeping a Rust flavor.
//!
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use log::debug;
use numpy::PyArray1;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::{PyDict, PyModule},
};
use crate::error::{Error, Result};

macro_rules! getattr {
    ($py: ident, $lib: expr, $f: literal) => {
        $lib.getattr($py, intern!($py, $f))
    };
}

macro_rules! meth {
    ($obj: expr, $m: ident, $py: ident -> $args: expr) => {
        Python::with_gil(|$py| {
            $obj.call_method1($py, intern!($py, stringify!($m)), $args)
        })
    };
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
        })
    };
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import(py, intern!(py, $m)).map(|m| m.into()))
}}

lazy_static! {
    static ref PYPLOT: std::result::Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

/// Select the Matplotlib backend, e.g. "Agg" to render without a
/// display.  Must be called before any figure is created.
pub fn use_backend(name: &str) -> Result<()> {
    Python::with_gil(|py| {
        let mpl = PyModule::import(py, intern!(py, "matplotlib"))
            .map_err(|_| Error::NoMatplotlib)?;
        mpl.call_method1(intern!(py, "use"), (name,))?;
        debug!("matplotlib backend set to {}", name);
        Ok(())
    })
}

/// Values that can be copied into a one dimensional `numpy.ndarray`.
///
/// The array owns its data so Matplotlib artists may keep it alive
/// after the Rust buffer is gone (e.g. until [`show`] returns).
pub trait Data {
    fn to_numpy(&self, py: Python<'_>) -> PyObject;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        PyArray1::from_slice_bound(py, self.as_ref()).into_any().unbind()
    }
}

#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

impl Figure {
    /// Add a single axes covering the figure.
    pub fn subplots(&self) -> Result<Axes> {
        Python::with_gil(|py| {
            let ax = self.fig.call_method0(py, intern!(py, "subplots"))?;
            Ok(Axes { ax })
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }

    /// Release the figure from pyplot so it is not displayed by
    /// [`show`] and its memory can be reclaimed.
    pub fn close(self) -> Result<()> {
        let pyplot = pymod!(PYPLOT)?;
        Python::with_gil(|py| {
            getattr!(py, pyplot, "close")?.call1(py, (self.fig,))?;
            Ok(())
        })
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Write the figure to `path`.  The format is deduced from the
    /// file extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.call_method(
                py, intern!(py, "savefig"),
                (path.as_ref(),), Some(kwargs)
            ).map_err(|e| {
                if e.is_instance_of::<PyFileNotFoundError>(py) {
                    Error::FileNotFoundError
                } else if e.is_instance_of::<PyPermissionError>(py) {
                    Error::PermissionError
                } else {
                    Error::Python(e)
                }
            })
        })?;
        Ok(())
    }
}

/// Create a new pyplot figure.
pub fn figure() -> Result<Figure> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = getattr!(py, pyplot, "figure")?.call0(py)?;
        Ok(Figure { fig })
    })
}

/// Create a figure with a single axes.
///
/// # Example
///
/// ```no_run
/// use reflection_plot::mpl;
/// let (fig, mut ax) = mpl::subplots()?;
/// ax.xy(&[0., 1.], &[0., 1.]).plot()?;
/// fig.save().to_file("target/diagonal.pdf")?;
/// # Ok::<(), reflection_plot::Error>(())
/// ```
pub fn subplots() -> Result<(Figure, Axes)> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Display all open figures and block until their windows are closed.
pub fn show() -> Result<()> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        getattr!(py, pyplot, "show")?.call0(py)?;
        Ok(())
    })
}


impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    // The mutable borrow reflects that the final `.plot()` mutates the
    // underlying Python object.
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        XY { axes: self, options: PlotOptions::new(), x, y }
    }

    /// Draw a marker at each (`x[i]`, `y[i]`).
    // FIXME: Do we want to check that `x` and `y` have the same
    // dimension?  Better error message?
    pub fn scatter<D>(&mut self, x: &D, y: &D) -> Result<&mut Self>
    where D: Data + ?Sized {
        meth!(self.ax, scatter, py -> (x.to_numpy(py), y.to_numpy(py)))?;
        Ok(self)
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    /// Place a legend listing the labelled artists.
    pub fn legend(&mut self) -> Result<&mut Self> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }

    /// Whether the axes carry a legend.
    pub fn has_legend(&self) -> Result<bool> {
        Python::with_gil(|py| {
            let l = self.ax.call_method0(py, intern!(py, "get_legend"))?;
            Ok(!l.is_none(py))
        })
    }

    pub fn set_xlim(&mut self, lim: (f64, f64)) -> Result<&mut Self> {
        meth!(self.ax, set_xlim, (lim,))?;
        Ok(self)
    }

    pub fn set_ylim(&mut self, lim: (f64, f64)) -> Result<&mut Self> {
        meth!(self.ax, set_ylim, (lim,))?;
        Ok(self)
    }

    pub fn get_xlim(&self) -> Result<(f64, f64)> {
        self.get_lim("get_xlim")
    }

    pub fn get_ylim(&self) -> Result<(f64, f64)> {
        self.get_lim("get_ylim")
    }

    fn get_lim(&self, m: &str) -> Result<(f64, f64)> {
        Python::with_gil(|py| {
            let lim = self.ax.call_method0(py, m)?;
            Ok(lim.extract(py)?)
        })
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    label: &'a str,
    linewidth: Option<f64>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", label: "", linewidth: None }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<&'py PyDict> {
        let kwargs = PyDict::new(py);
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        if let Some(w) = self.linewidth {
            kwargs.set_item("linewidth", w)?
        }
        Ok(kwargs)
    }
}

/// A line plot being configured; see [`Axes::xy`].
pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    /// Matplotlib format string, e.g. "r." for red dots.
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<()> {
        Python::with_gil(|py| {
            let xn = self.x.to_numpy(py);
            let yn = self.y.to_numpy(py);
            let kwargs = self.options.kwargs(py)?;
            self.axes.ax.call_method(py, intern!(py, "plot"),
                                     (xn, yn, self.options.fmt),
                                     Some(kwargs))?;
            Ok(())
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_basic_pdf() -> Result<()> {
        use_backend("Agg")?;
        let (fig, mut ax) = subplots()?;
        dbg!(&fig);
        ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
        fig.save().to_file("target/a_basic.pdf")?;
        fig.close()
    }

    #[test]
    fn line_options_and_scatter() -> Result<()> {
        use_backend("Agg")?;
        let (fig, mut ax) = subplots()?;
        ax.xy(&[0., 0.5], &[0., 0.5]).fmt("r-").label("ray")
            .linewidth(2.).plot()?;
        ax.scatter(&[0.1, 0.2, 0.3], &[0.3, 0.2, 0.1])?
            .set_title("scatter")?;
        fig.save().dpi(50.).to_file("target/line_options.png")?;
        fig.close()
    }

    #[test]
    fn legend_of_labelled_line() -> Result<()> {
        use_backend("Agg")?;
        let (fig, mut ax) = subplots()?;
        ax.xy(&[0., 1.], &[0., 1.]).label("diagonal").plot()?;
        assert!(!ax.has_legend()?);
        ax.legend()?;
        assert!(ax.has_legend()?);
        fig.close()
    }

    #[test]
    fn limits_are_kept() -> Result<()> {
        use_backend("Agg")?;
        let (fig, mut ax) = subplots()?;
        ax.scatter(&[10., -30.], &[5., 7.])?;
        ax.set_xlim((-2., 3.))?.set_ylim((0.5, 0.75))?;
        assert_eq!(ax.get_xlim()?, (-2., 3.));
        assert_eq!(ax.get_ylim()?, (0.5, 0.75));
        fig.close()
    }

    #[test]
    fn save_to_missing_directory() -> Result<()> {
        use_backend("Agg")?;
        let (fig, mut ax) = subplots()?;
        ax.scatter(&[0.], &[0.])?;
        let r = fig.save().to_file("target/no/such/dir/plot.png");
        assert!(matches!(r, Err(Error::FileNotFoundError)));
        fig.close()
    }
}
