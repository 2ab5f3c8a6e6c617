//! Dirty beams and simulated observations.

use num::Complex;

use ndarray::{Array2, ArrayView2};

use crate::{
    axis_convention::{fftshift2, ifftshift2},
    error::UvSimError,
    fft::{fft2_real, ifft2, ifft2_real},
};

/// Point-spread function of a uv sampling mask: `|ifft2(mask)|`, peak at
/// `[0, 0]`.
pub fn get_beam(uv_mask: ArrayView2<f64>) -> Array2<f64> {
    ifft2_real(uv_mask).mapv(|x| x.norm())
}

/// Unshifted spectrum of a sky image.
pub fn get_sky_uv(sky: ArrayView2<f64>) -> Array2<Complex<f64>> {
    fft2_real(sky)
}

/// Centre the spectrum and keep only what the mask samples.
///
/// `mask` must already have the spectrum's shape and be centred (see
/// [crate::uv_grid::resample_mask]).
pub fn get_obs_uv(
    sky_uv: ArrayView2<Complex<f64>>,
    mask: ArrayView2<f64>,
) -> Result<Array2<Complex<f64>>, UvSimError> {
    if sky_uv.dim() != mask.dim() {
        return Err(UvSimError::ShapeMismatch {
            mask: mask.dim(),
            spectrum: sky_uv.dim(),
        });
    }
    let mut obs_uv = fftshift2(sky_uv);
    obs_uv
        .iter_mut()
        .zip(mask.iter())
        .for_each(|(v, &m)| *v = v.scale(m));
    Ok(obs_uv)
}

/// Dirty image of an observed, centred spectrum, left complex.
pub fn get_obs_sky(obs_uv: ArrayView2<Complex<f64>>) -> Array2<Complex<f64>> {
    ifft2(ifftshift2(obs_uv).view())
}

/// Magnitude of [get_obs_sky].
pub fn get_obs_sky_abs(obs_uv: ArrayView2<Complex<f64>>) -> Array2<f64> {
    get_obs_sky(obs_uv).mapv(|x| x.norm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn test_sky() -> Array2<f64> {
        Array2::from_shape_fn((16, 12), |(i, j)| {
            let di = i as f64 - 7.0;
            let dj = j as f64 - 4.0;
            (-(di * di + dj * dj) / 6.0).exp() + if (i, j) == (3, 9) { 2.0 } else { 0.0 }
        })
    }

    #[test]
    fn full_mask_gives_delta_beam() {
        let mask = Array2::<f64>::ones((32, 32));
        let beam = get_beam(mask.view());
        assert_eq!(beam.shape(), &[32, 32]);
        assert_abs_diff_eq!(beam[(0, 0)], 1.0, epsilon = 1e-12);
        for ((i, j), &b) in beam.indexed_iter() {
            if (i, j) != (0, 0) {
                assert!(b < 1e-12);
            }
        }
    }

    #[test]
    fn unmasked_observation_recovers_sky() {
        let sky = test_sky();
        let sky_uv = get_sky_uv(sky.view());
        let full = Array2::<f64>::ones(sky.dim());
        let obs_uv = get_obs_uv(sky_uv.view(), full.view()).unwrap();
        let dirty = get_obs_sky(obs_uv.view());
        for (d, s) in dirty.iter().zip(sky.iter()) {
            assert_abs_diff_eq!(d.re, *s, epsilon = 1e-10);
            assert_abs_diff_eq!(d.im, 0.0, epsilon = 1e-10);
        }
        let dirty_abs = get_obs_sky_abs(obs_uv.view());
        for (d, s) in dirty_abs.iter().zip(sky.iter()) {
            assert_abs_diff_eq!(*d, s.abs(), epsilon = 1e-10);
        }
    }

    #[test]
    fn dc_only_mask_gives_mean() {
        let sky = test_sky();
        let mut mask = Array2::<f64>::zeros(sky.dim());
        // DC sits at the centre of a shifted spectrum
        mask[(8, 6)] = 1.0;
        let obs_uv = get_obs_uv(get_sky_uv(sky.view()).view(), mask.view()).unwrap();
        let dirty = get_obs_sky_abs(obs_uv.view());
        let mean = sky.mean().unwrap();
        for d in dirty.iter() {
            assert_abs_diff_eq!(*d, mean, epsilon = 1e-10);
        }
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let sky_uv = get_sky_uv(test_sky().view());
        let mask = Array2::<f64>::ones((8, 8));
        match get_obs_uv(sky_uv.view(), mask.view()) {
            Err(UvSimError::ShapeMismatch { mask, spectrum }) => {
                assert_eq!(mask, (8, 8));
                assert_eq!(spectrum, (16, 12));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other.map(|a| a.dim())),
        }
    }
}
