//! The whole chain, from antenna positions to the dirty beam.

use std::path::Path;

use log::{debug, info};
use ndarray::{Array2, ArrayView2};
use ndarray_npy::write_npy;

use crate::{
    axis_convention::ifftshift2,
    baseline::get_baselines,
    error::UvSimError,
    imaging::get_beam,
    uv_grid::{get_uv_mask, get_uv_plane},
    uv_track::{uv_time_int, ObsGeometry},
};

/// Every intermediate product of one run.
#[derive(Clone, Debug)]
pub struct PipelineProducts {
    pub antennas: Array2<f64>,
    pub baselines: Array2<f64>,
    pub uv_track: Array2<f64>,
    pub uv_plane: Array2<f64>,
    pub uv_mask: Array2<f64>,
    /// Origin-centred; `ifftshift2` it for display.
    pub beam: Array2<f64>,
}

impl PipelineProducts {
    /// Write every product as `<prefix>_<name>.npy` inside `dir`. The beam is
    /// written display-centred.
    pub fn write_npy<P: AsRef<Path>>(&self, dir: P, prefix: &str) -> Result<(), UvSimError> {
        let dir = dir.as_ref();
        let beam = ifftshift2(self.beam.view());
        for (name, arr) in [
            ("ants", &self.antennas),
            ("baselines", &self.baselines),
            ("uv_track", &self.uv_track),
            ("uv_plane", &self.uv_plane),
            ("uv_mask", &self.uv_mask),
            ("beam", &beam),
        ] {
            let path = dir.join(format!("{}_{}.npy", prefix, name));
            debug!("writing {}", path.display());
            write_npy(&path, arr)?;
        }
        Ok(())
    }
}

pub fn run_pipeline(ants: ArrayView2<f64>, geom: &ObsGeometry, uv_dim: usize) -> PipelineProducts {
    let baselines = get_baselines(ants);
    let uv_track = uv_time_int(baselines.view(), geom);
    let uv_plane = get_uv_plane(uv_track.view(), uv_dim);
    let uv_mask = get_uv_mask(uv_plane.view());
    let beam = get_beam(uv_mask.view());
    info!(
        "{} antennas, {} baselines, {} uv samples, {} of {} uv cells sampled",
        ants.nrows(),
        baselines.nrows(),
        uv_track.nrows(),
        uv_mask.iter().filter(|&&m| m > 0.0).count(),
        uv_mask.len()
    );
    PipelineProducts {
        antennas: ants.to_owned(),
        baselines,
        uv_track,
        uv_plane,
        uv_mask,
        beam,
    }
}
