//! Synthetic ray data: the mirror reflection of an incident ray and a
//! set of rays diffused around it with a Gaussian angular deviation.

use std::f64::consts::PI;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use crate::{
    data::Dataset,
    error::{Error, Result},
};

type Vec2 = (f64, f64);

fn dot(u: Vec2, v: Vec2) -> f64 {
    u.0 * v.0 + u.1 * v.1
}

fn normalize(v: Vec2) -> Vec2 {
    let n = dot(v, v).sqrt();
    (v.0 / n, v.1 / n)
}

/// Rotate `v` counter-clockwise by `a` radians.
fn rotate(v: Vec2, a: f64) -> Vec2 {
    let (s, c) = a.sin_cos();
    (v.0 * c - v.1 * s, v.0 * s + v.1 * c)
}

/// Mirror reflection of the direction `v` on a surface of unit
/// normal `n`.
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    let k = 2. * dot(v, n);
    (v.0 - k * n.0, v.1 - k * n.1)
}

#[derive(Debug, Clone)]
pub struct Generator {
    incident: Vec2, // unit
    normal: Vec2,   // unit
    count: usize,
    spread: f64,
}

impl Default for Generator {
    fn default() -> Self {
        Generator {
            incident: normalize((1., -1.)),
            normal: (0., 1.),
            count: 10,
            spread: 1.,
        }
    }
}

impl Generator {
    pub fn new() -> Self { Self::default() }

    /// Set the incident direction and the surface normal.  Both must
    /// be non-zero; they are normalized.
    pub fn surface(mut self, incident: Vec2, normal: Vec2) -> Result<Self> {
        let (i, n) = (normalize(incident), normalize(normal));
        if !(i.0.is_finite() && i.1.is_finite()
             && n.0.is_finite() && n.1.is_finite()) {
            return Err(Error::ZeroVector)
        }
        self.incident = i;
        self.normal = n;
        Ok(self)
    }

    /// Number of diffused rays.
    #[must_use]
    pub fn count(mut self, n: usize) -> Self {
        self.count = n;
        self
    }

    /// Standard deviation (in radians) of the angular deviation.
    pub fn spread(mut self, s: f64) -> Result<Self> {
        if !(s.is_finite() && s >= 0.) {
            return Err(Error::InvalidSpread(s))
        }
        self.spread = s;
        Ok(self)
    }

    /// Direction of the ideal (specular) reflection.
    pub fn ideal(&self) -> Vec2 {
        reflect(self.incident, self.normal)
    }

    /// Angle of `v` measured counter-clockwise from the surface, in
    /// (-π, π].  Rays leaving the surface have an angle in (0, π).
    pub fn angle(&self, v: Vec2) -> f64 {
        let n = self.normal;
        let t = (n.1, -n.0);
        dot(v, n).atan2(dot(v, t))
    }

    /// Return the ideal reflection as direction and `count` diffused
    /// rays as points.  A deviation that would send a ray through the
    /// surface is replaced by no deviation.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Dataset>
    where R: Rng + ?Sized {
        let ideal = self.ideal();
        let theta = self.angle(ideal);
        let normal = Normal::new(0., self.spread)
            .map_err(|_| Error::InvalidSpread(self.spread))?;
        let mut clamped = 0;
        let points = (0 .. self.count).map(|_| {
            let mut d = normal.sample(&mut *rng);
            let a = theta + d;
            if a <= 0. || a >= PI {
                d = 0.;
                clamped += 1;
            }
            rotate(ideal, d)
        }).collect();
        debug!("generated {} rays, {} deviations clamped",
               self.count, clamped);
        Ok(Dataset::new(ideal, points))
    }
}
