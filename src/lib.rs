//! Interferometric uv-coverage and dirty-beam simulation.
//!
//! antenna layout -> baselines -> Earth-rotation (u,v) track -> uv grid ->
//! sampling mask -> dirty beam, or a masked sky spectrum -> dirty image.

pub mod array_cfg;
pub mod array_layout;
pub mod axis_convention;
pub mod baseline;
pub mod constants;
pub mod error;
pub mod fft;
pub mod imaging;
pub mod logging;
pub mod pipeline;
pub mod uv_grid;
pub mod uv_track;

pub use crate::{
    array_cfg::{AntCfg, ArrayCfg, ObsCfg, SimCfg, SkyCfg, SourceCfg},
    array_layout::{random_antenna_arr, random_antenna_pos, radial_antenna_arr, y_antenna_arr},
    axis_convention::{fftshift2, ifftshift2, uv_display_orientation},
    baseline::get_baselines,
    error::UvSimError,
    imaging::{get_beam, get_obs_sky, get_obs_sky_abs, get_obs_uv, get_sky_uv},
    pipeline::{run_pipeline, PipelineProducts},
    uv_grid::{get_uv_mask, get_uv_plane, normalize_uv_plane, resample_mask, uv_extent},
    uv_track::{uv_time_int, ObsGeometry},
};
