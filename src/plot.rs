//! Ray diagram: a segment from the origin to the ideal reflected
//! direction and the diffused rays as a scatter, on a fixed square
//! viewport.

use std::path::Path;
use log::debug;
use crate::{
    data::Dataset,
    error::Result,
    mpl::{self, Axes, Figure},
};

/// Limits of both axes, whatever the range of the data.
pub const VIEWPORT: (f64, f64) = (-1.2, 1.2);

/// Everything drawn on the axes, in plotting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Abscissas of the segment from the origin.
    pub ray_x: [f64; 2],
    pub ray_y: [f64; 2],
    pub scatter_x: Vec<f64>,
    pub scatter_y: Vec<f64>,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub title: Option<String>,
}

impl Scene {
    pub fn from_dataset(d: &Dataset) -> Scene {
        let (dx, dy) = d.direction;
        Scene {
            ray_x: [0., dx],
            ray_y: [0., dy],
            scatter_x: d.xs(),
            scatter_y: d.ys(),
            xlim: VIEWPORT,
            ylim: VIEWPORT,
            title: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw the scene on a new figure.
    pub fn draw(&self) -> Result<(Figure, Axes)> {
        let (fig, mut ax) = mpl::subplots()?;
        ax.xy(&self.ray_x, &self.ray_y).label("ideal reflection").plot()?;
        ax.scatter(&self.scatter_x, &self.scatter_y)?.legend()?;
        // After the artists, or autoscaling overrides them.
        ax.set_xlim(self.xlim)?.set_ylim(self.ylim)?;
        if let Some(t) = &self.title {
            ax.set_title(t)?;
        }
        debug!("drew {} points", self.scatter_x.len());
        Ok((fig, ax))
    }
}

/// Read the data file `path` and draw it.
pub fn render(path: impl AsRef<Path>) -> Result<(Figure, Axes)> {
    let d = Dataset::from_file(path)?;
    Scene::from_dataset(&d).draw()
}
