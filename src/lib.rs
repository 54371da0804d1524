//! Plot ray reflection data with [Matplotlib][].
//!
//! A data file holds the ideal reflected direction of a ray on its
//! first line and diffused rays on the following ones.  [`plot`] draws
//! a segment from the origin to that direction and a scatter of the
//! diffused rays on the square [-1.2, 1.2]² viewport; [`reflection`]
//! generates such files.
//!
//! Usage
//! -----
//!
//! ```no_run
//! use reflection_plot::{mpl, plot};
//! let (_fig, _ax) = plot::render("data.txt")?;
//! mpl::show()?;
//! # Ok::<(), reflection_plot::Error>(())
//! ```
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod config;
pub mod data;
mod error;
pub mod logging;
pub mod mpl;
pub mod plot;
pub mod reflection;

pub use data::Dataset;
pub use error::{Error, Result};
