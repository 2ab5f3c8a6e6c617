//! Earth-rotation synthesis of the (u,v) track.

use log::debug;
use ndarray::{array, s, Array2, ArrayView2};

use crate::constants::{
    DEFAULT_DEC_DEG, DEFAULT_DELTA_T_H, DEFAULT_LAT_DEG, DEFAULT_T0_H, DEFAULT_TRACK_TIME_H,
    HOUR_ANGLE_RAD_PER_HOUR,
};

/// Site and source geometry of one observation track. Angles are in
/// radians, times in hours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObsGeometry {
    pub array_latitude: f64,
    pub source_declination: f64,
    pub track_time: f64,
    pub delta_t: f64,
    pub t_0: f64,
}

impl Default for ObsGeometry {
    fn default() -> Self {
        ObsGeometry {
            array_latitude: DEFAULT_LAT_DEG.to_radians(),
            source_declination: DEFAULT_DEC_DEG.to_radians(),
            track_time: DEFAULT_TRACK_TIME_H,
            delta_t: DEFAULT_DELTA_T_H,
            t_0: DEFAULT_T0_H,
        }
    }
}

impl ObsGeometry {
    /// `floor(track_time / delta_t)`, or zero when that is negative or NaN.
    pub fn n_samples(&self) -> usize {
        let n = (self.track_time / self.delta_t).floor();
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Hour angle of the `k`-th sample, in hours.
    pub fn hour_angle(&self, k: usize) -> f64 {
        self.t_0 + k as f64 * self.delta_t
    }
}

/// Local (north, east) baseline to the equatorial (x, y, z) frame.
pub fn baseline_to_xyz_matrix(array_latitude: f64) -> Array2<f64> {
    let (s_lat, c_lat) = array_latitude.sin_cos();
    array![[-s_lat, 0.0], [0.0, -1.0], [c_lat, 0.0]]
}

/// (x, y, z) to (u, v) at hour angle `h` (hours).
pub fn uv_projection_matrix(h: f64, source_declination: f64) -> Array2<f64> {
    let (s_h, c_h) = (h * HOUR_ANGLE_RAD_PER_HOUR).sin_cos();
    let (s_dec, c_dec) = source_declination.sin_cos();
    array![
        [s_h, -c_h, 0.0],
        [-s_dec * c_h, -s_dec * s_h, c_dec]
    ]
}

/// Project `baselines` (rows of `(dx, dy)`) onto the (u,v) plane at every
/// sample of the track.
///
/// Each timestep contributes a contiguous block of `baselines.nrows()` rows,
/// in timestep order.
pub fn uv_time_int(baselines: ArrayView2<f64>, geom: &ObsGeometry) -> Array2<f64> {
    let nbl = baselines.nrows();
    let n_samples = geom.n_samples();
    debug!(
        "uv track: {} baselines x {} samples (dt = {} h, t0 = {} h)",
        nbl, n_samples, geom.delta_t, geom.t_0
    );

    // (dx, dy) -> (dy, dx): the transform below expects (north, east)
    let swapped = baselines.slice(s![.., ..;-1]);
    let b = baseline_to_xyz_matrix(geom.array_latitude);

    let mut track = Array2::<f64>::zeros((nbl * n_samples, 2));
    for k in 0..n_samples {
        let p = uv_projection_matrix(geom.hour_angle(k), geom.source_declination).dot(&b);
        let mut block = track.slice_mut(s![k * nbl..(k + 1) * nbl, ..]);
        for (mut uv, bl) in block.rows_mut().into_iter().zip(swapped.rows()) {
            uv[0] = p[(0, 0)] * bl[0] + p[(0, 1)] * bl[1];
            uv[1] = p[(1, 0)] * bl[0] + p[(1, 1)] * bl[1];
        }
    }
    track
}
