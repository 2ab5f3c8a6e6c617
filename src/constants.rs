use std::f64::consts::PI;

/// Hour-angle hours to radians. One hour of hour angle is taken as π/12 rad;
/// the track geometry depends on this exact scaling.
pub const HOUR_ANGLE_RAD_PER_HOUR: f64 = PI / 12.0;

pub const DEFAULT_UV_DIM: usize = 128;

/// Half-width of the uv range used when every track point sits at the origin
/// (or the track is empty).
pub const MIN_UV_EXTENT: f64 = 0.5;

pub const DEFAULT_X_LIMS: f64 = 1000.0;
pub const DEFAULT_Y_LIMS: f64 = 1000.0;

pub const DEFAULT_LAT_DEG: f64 = 35.0;
pub const DEFAULT_DEC_DEG: f64 = 35.0;
pub const DEFAULT_TRACK_TIME_H: f64 = 8.0;
pub const DEFAULT_DELTA_T_H: f64 = 5.0 / 60.0;
pub const DEFAULT_T0_H: f64 = -2.0;
