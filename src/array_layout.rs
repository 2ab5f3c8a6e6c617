//! Antenna layouts on the ground plane.
//!
//! Every generator returns an `(n, 2)` array of `(x, y)` positions in metres.

use std::f64::consts::PI;

use ndarray::{Array1, Array2};

use rand::Rng;

/// One antenna dropped uniformly inside an `x_lims` by `y_lims` box centred on
/// the origin.
pub fn random_antenna_pos<R>(rng: &mut R, x_lims: f64, y_lims: f64) -> Array1<f64>
where
    R: Rng + ?Sized,
{
    let x = rng.gen::<f64>() * x_lims - x_lims / 2.0;
    let y = rng.gen::<f64>() * y_lims - y_lims / 2.0;
    Array1::from(vec![x, y])
}

/// `n_antenna` antennas equally spaced in angle on a circle of radius `r`,
/// the first one on the +x axis.
pub fn radial_antenna_arr(n_antenna: usize, r: f64) -> Array2<f64> {
    Array2::from_shape_fn((n_antenna, 2), |(i, j)| {
        let angle = 2.0 * PI / n_antenna as f64 * i as f64;
        if j == 0 {
            angle.cos() * r
        } else {
            angle.sin() * r
        }
    })
}

/// Three arms at `alpha_deg`, `alpha_deg + 120` and `alpha_deg + 240` degrees,
/// each carrying `n_antenna` antennas at `(k+1) * r / n_antenna`. Arm 1 comes
/// first in the output, then arm 2, then arm 3.
pub fn y_antenna_arr(n_antenna: usize, r: f64, alpha_deg: f64) -> Array2<f64> {
    let step = r / n_antenna as f64;
    let mut ants = Array2::<f64>::zeros((3 * n_antenna, 2));
    for (arm, angle) in [alpha_deg, alpha_deg + 120.0, alpha_deg + 240.0]
        .iter()
        .map(|a| a.to_radians())
        .enumerate()
    {
        let (s, c) = angle.sin_cos();
        for i in 0..n_antenna {
            let d = (i + 1) as f64 * step;
            ants[(arm * n_antenna + i, 0)] = d * c;
            ants[(arm * n_antenna + i, 1)] = d * s;
        }
    }
    ants
}

pub fn random_antenna_arr<R>(rng: &mut R, n_antenna: usize, x_lims: f64, y_lims: f64) -> Array2<f64>
where
    R: Rng + ?Sized,
{
    let mut ants = Array2::<f64>::zeros((n_antenna, 2));
    for mut row in ants.rows_mut() {
        row.assign(&random_antenna_pos(rng, x_lims, y_lims));
    }
    ants
}
