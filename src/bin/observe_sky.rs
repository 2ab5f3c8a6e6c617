use std::error::Error;

use clap::{Arg, Command};

use log::info;

use ndarray_npy::write_npy;

use uv_beam_simulator::{
    get_obs_sky_abs, get_obs_uv, get_sky_uv, logging::setup_logging,
    resample_mask, run_pipeline, SimCfg, UvSimError,
};

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("observe_sky")
        .about("dirty image of a synthetic sky seen through an array's uv coverage")
        .arg(
            Arg::new("cfg")
                .short('c')
                .long("cfg")
                .takes_value(true)
                .value_name("yaml")
                .required(true)
                .help("simulation config with a sky section"),
        )
        .arg(
            Arg::new("outprefix")
                .short('o')
                .long("out")
                .takes_value(true)
                .value_name("prefix")
                .required(true)
                .help("output file prefix"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .multiple_occurrences(true)
                .help("more logging"),
        )
        .get_matches();

    setup_logging(matches.occurrences_of("verbosity"))?;

    let cfg = SimCfg::from_yaml_file(matches.value_of("cfg").unwrap_or_default())?;
    let sky_cfg = cfg
        .sky
        .as_ref()
        .ok_or_else(|| UvSimError::InvalidConfig("no sky section in config".into()))?;
    let prefix = matches.value_of("outprefix").unwrap_or_default();

    let products = run_pipeline(cfg.array.antennas().view(), &cfg.geometry(), cfg.uv_dim);

    let sky = sky_cfg.render();
    let sky_uv = get_sky_uv(sky.view());
    let mask = resample_mask(products.uv_mask.view(), sky.dim());
    let obs_uv = get_obs_uv(sky_uv.view(), mask.view())?;
    let dirty = get_obs_sky_abs(obs_uv.view());
    info!(
        "sky {}x{}, {} of {} spectral cells kept",
        sky.nrows(),
        sky.ncols(),
        mask.iter().filter(|&&m| m > 0.0).count(),
        mask.len()
    );

    write_npy(format!("{}_sky.npy", prefix), &sky)?;
    write_npy(format!("{}_obs_uv.npy", prefix), &obs_uv.mapv(|x| x.norm()))?;
    write_npy(format!("{}_dirty.npy", prefix), &dirty)?;
    Ok(())
}
