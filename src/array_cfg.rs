use std::{fs::File, path::Path};

use ndarray::Array2;

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use serde::{Deserialize, Serialize};

use crate::{
    array_layout::{radial_antenna_arr, random_antenna_arr, y_antenna_arr},
    constants::{
        DEFAULT_DEC_DEG, DEFAULT_DELTA_T_H, DEFAULT_LAT_DEG, DEFAULT_T0_H, DEFAULT_TRACK_TIME_H,
        DEFAULT_UV_DIM, DEFAULT_X_LIMS, DEFAULT_Y_LIMS,
    },
    error::UvSimError,
    uv_track::ObsGeometry,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AntCfg {
    pub pos: (f64, f64),
}

/// How the antennas are laid out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArrayCfg {
    Radial {
        #[serde(default = "default_radial_n")]
        n_antenna: usize,
        #[serde(default = "default_radial_r")]
        r: f64,
    },
    Y {
        #[serde(default = "default_y_n")]
        n_antenna: usize,
        #[serde(default = "default_y_r")]
        r: f64,
        #[serde(default)]
        alpha_deg: f64,
    },
    Random {
        #[serde(default = "default_radial_n")]
        n_antenna: usize,
        #[serde(default = "default_x_lims")]
        x_lims: f64,
        #[serde(default = "default_y_lims")]
        y_lims: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    Explicit {
        ants: Vec<AntCfg>,
    },
}

fn default_radial_n() -> usize {
    3
}
fn default_radial_r() -> f64 {
    300.0
}
fn default_y_n() -> usize {
    5
}
fn default_y_r() -> f64 {
    500.0
}
fn default_x_lims() -> f64 {
    DEFAULT_X_LIMS
}
fn default_y_lims() -> f64 {
    DEFAULT_Y_LIMS
}

impl Default for ArrayCfg {
    fn default() -> Self {
        ArrayCfg::Radial {
            n_antenna: default_radial_n(),
            r: default_radial_r(),
        }
    }
}

impl ArrayCfg {
    /// Antenna positions, `(n, 2)`. Unseeded random layouts draw from the
    /// thread RNG.
    pub fn antennas(&self) -> Array2<f64> {
        self.antennas_with_rng(&mut thread_rng())
    }

    /// As [ArrayCfg::antennas], with unseeded random layouts drawn from `rng`.
    pub fn antennas_with_rng<R>(&self, rng: &mut R) -> Array2<f64>
    where
        R: Rng + ?Sized,
    {
        match self {
            ArrayCfg::Radial { n_antenna, r } => radial_antenna_arr(*n_antenna, *r),
            ArrayCfg::Y {
                n_antenna,
                r,
                alpha_deg,
            } => y_antenna_arr(*n_antenna, *r, *alpha_deg),
            ArrayCfg::Random {
                n_antenna,
                x_lims,
                y_lims,
                seed: Some(seed),
            } => random_antenna_arr(&mut StdRng::seed_from_u64(*seed), *n_antenna, *x_lims, *y_lims),
            ArrayCfg::Random {
                n_antenna,
                x_lims,
                y_lims,
                seed: None,
            } => random_antenna_arr(rng, *n_antenna, *x_lims, *y_lims),
            ArrayCfg::Explicit { ants } => {
                let mut result = Array2::<f64>::zeros((ants.len(), 2));
                for (mut row, AntCfg { pos }) in result.rows_mut().into_iter().zip(ants.iter()) {
                    row[0] = pos.0;
                    row[1] = pos.1;
                }
                result
            }
        }
    }
}

/// Observation track, in degrees and hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObsCfg {
    pub lat_deg: f64,
    pub dec_deg: f64,
    pub track_time_h: f64,
    pub delta_t_h: f64,
    pub t0_h: f64,
}

impl Default for ObsCfg {
    fn default() -> Self {
        ObsCfg {
            lat_deg: DEFAULT_LAT_DEG,
            dec_deg: DEFAULT_DEC_DEG,
            track_time_h: DEFAULT_TRACK_TIME_H,
            delta_t_h: DEFAULT_DELTA_T_H,
            t0_h: DEFAULT_T0_H,
        }
    }
}

impl From<&ObsCfg> for ObsGeometry {
    fn from(cfg: &ObsCfg) -> Self {
        ObsGeometry {
            array_latitude: cfg.lat_deg.to_radians(),
            source_declination: cfg.dec_deg.to_radians(),
            track_time: cfg.track_time_h,
            delta_t: cfg.delta_t_h,
            t_0: cfg.t0_h,
        }
    }
}

/// A Gaussian blob on the synthetic sky; positions and width in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceCfg {
    pub x: f64,
    pub y: f64,
    pub sigma: f64,
    pub amp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyCfg {
    pub size: usize,
    pub sources: Vec<SourceCfg>,
}

impl Default for SkyCfg {
    fn default() -> Self {
        SkyCfg {
            size: 256,
            sources: vec![
                SourceCfg {
                    x: 128.0,
                    y: 128.0,
                    sigma: 4.0,
                    amp: 1.0,
                },
                SourceCfg {
                    x: 80.0,
                    y: 170.0,
                    sigma: 10.0,
                    amp: 0.5,
                },
            ],
        }
    }
}

impl SkyCfg {
    /// `size x size` image, row index is `y`, column index is `x`.
    pub fn render(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.size, self.size), |(i, j)| {
            self.sources
                .iter()
                .map(|s| {
                    let dx = j as f64 - s.x;
                    let dy = i as f64 - s.y;
                    s.amp * (-(dx * dx + dy * dy) / (2.0 * s.sigma.powi(2))).exp()
                })
                .sum()
        })
    }
}

/// Everything one simulation run needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimCfg {
    #[serde(default)]
    pub array: ArrayCfg,
    #[serde(default)]
    pub obs: ObsCfg,
    #[serde(default = "default_uv_dim")]
    pub uv_dim: usize,
    #[serde(default)]
    pub sky: Option<SkyCfg>,
}

fn default_uv_dim() -> usize {
    DEFAULT_UV_DIM
}

impl Default for SimCfg {
    fn default() -> Self {
        SimCfg {
            array: ArrayCfg::default(),
            obs: ObsCfg::default(),
            uv_dim: DEFAULT_UV_DIM,
            sky: None,
        }
    }
}

impl SimCfg {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, UvSimError> {
        let mut cfgfile = File::open(path)?;
        let cfg: SimCfg = serde_yaml::from_reader(&mut cfgfile)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), UvSimError> {
        let mut outfile = File::create(path)?;
        serde_yaml::to_writer(&mut outfile, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), UvSimError> {
        if self.uv_dim == 0 {
            return Err(UvSimError::InvalidConfig("uv_dim must be positive".into()));
        }
        if !(self.obs.track_time_h > 0.0) || !(self.obs.delta_t_h > 0.0) {
            return Err(UvSimError::InvalidConfig(format!(
                "track_time_h ({}) and delta_t_h ({}) must be positive",
                self.obs.track_time_h, self.obs.delta_t_h
            )));
        }
        if let Some(sky) = &self.sky {
            if sky.size == 0 {
                return Err(UvSimError::InvalidConfig("sky size must be positive".into()));
            }
        }
        Ok(())
    }

    pub fn geometry(&self) -> ObsGeometry {
        ObsGeometry::from(&self.obs)
    }
}
