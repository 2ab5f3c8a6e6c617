use approx::assert_abs_diff_eq;

use ndarray::Array2;

use rand::{rngs::StdRng, SeedableRng};

use uv_beam_simulator::{
    fftshift2, get_baselines, get_beam, get_obs_sky_abs, get_obs_uv, get_sky_uv, get_uv_mask,
    get_uv_plane, radial_antenna_arr, random_antenna_arr, resample_mask, run_pipeline,
    uv_time_int, ObsGeometry, SkyCfg, SourceCfg,
};

#[test]
fn radial_three_antenna_beam() {
    let ants = radial_antenna_arr(3, 300.0);
    assert_abs_diff_eq!(ants[(0, 0)], 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ants[(1, 0)], -150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ants[(1, 1)], 259.8, epsilon = 0.01);
    assert_abs_diff_eq!(ants[(2, 0)], -150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ants[(2, 1)], -259.8, epsilon = 0.01);

    let baselines = get_baselines(ants.view());
    assert_eq!(baselines.nrows(), 6);

    let track = uv_time_int(baselines.view(), &ObsGeometry::default());
    assert_eq!(track.nrows(), 6 * 96);

    let plane = get_uv_plane(track.view(), 64);
    assert_abs_diff_eq!(plane.sum(), (6 * 96) as f64);
    let mask = get_uv_mask(plane.view());
    let beam = get_beam(mask.view());
    assert_eq!(beam.shape(), &[64, 64]);
    assert!(beam.iter().all(|x| x.is_finite()));

    // The beam peaks at the origin with the sampled fraction of the plane.
    let filled = mask.sum() / mask.len() as f64;
    assert_abs_diff_eq!(beam[(0, 0)], filled, epsilon = 1e-12);
    assert!(beam.iter().all(|&b| b <= beam[(0, 0)] + 1e-12));
}

#[test]
fn pipeline_matches_stages() {
    let ants = random_antenna_arr(&mut StdRng::seed_from_u64(2024), 8, 1000.0, 1000.0);
    let geom = ObsGeometry::default();
    let products = run_pipeline(ants.view(), &geom, 32);
    assert_eq!(products.baselines.nrows(), 56);
    assert_eq!(products.uv_track.nrows(), 56 * 96);
    assert_eq!(products.uv_plane.shape(), &[32, 32]);
    assert_eq!(products.uv_mask, get_uv_mask(products.uv_plane.view()));
    assert_eq!(products.beam, get_beam(products.uv_mask.view()));
}

#[test]
fn single_antenna_does_not_panic() {
    let ants = radial_antenna_arr(1, 300.0);
    let products = run_pipeline(ants.view(), &ObsGeometry::default(), 16);
    assert_eq!(products.baselines.nrows(), 0);
    assert_eq!(products.uv_track.nrows(), 0);
    assert_abs_diff_eq!(products.uv_plane.sum(), 0.0);
    assert!(products.beam.iter().all(|&b| b == 0.0));
}

#[test]
fn baselines_are_symmetric_in_the_uv_plane() {
    // Every (u, v) has its (-u, -v) partner, so the track extent is reached
    // on both sides.
    let ants = radial_antenna_arr(5, 400.0);
    let track = uv_time_int(get_baselines(ants.view()).view(), &ObsGeometry::default());
    let max_u = track.column(0).iter().cloned().fold(f64::MIN, f64::max);
    let min_u = track.column(0).iter().cloned().fold(f64::MAX, f64::min);
    assert_abs_diff_eq!(max_u, -min_u, epsilon = 1e-9);
}

#[test]
fn observing_a_sky() {
    let products = run_pipeline(radial_antenna_arr(6, 300.0).view(), &ObsGeometry::default(), 32);
    let sky = SkyCfg {
        size: 64,
        sources: vec![SourceCfg {
            x: 30.0,
            y: 20.0,
            sigma: 3.0,
            amp: 1.0,
        }],
    }
    .render();
    let sky_uv = get_sky_uv(sky.view());
    assert!(get_obs_uv(sky_uv.view(), products.uv_mask.view()).is_err());

    let mask = resample_mask(products.uv_mask.view(), sky.dim());
    let obs_uv = get_obs_uv(sky_uv.view(), mask.view()).unwrap();
    let dirty = get_obs_sky_abs(obs_uv.view());
    assert_eq!(dirty.shape(), sky.shape());
    assert!(dirty.iter().all(|x| x.is_finite()));

    // A full mask gives back the sky.
    let full = Array2::<f64>::ones(sky.dim());
    let obs_uv = get_obs_uv(sky_uv.view(), full.view()).unwrap();
    for (d, s) in get_obs_sky_abs(obs_uv.view()).iter().zip(sky.iter()) {
        assert_abs_diff_eq!(*d, *s, epsilon = 1e-9);
    }
    assert_eq!(fftshift2(full.view()), full);
}
