use std::error::Error;

use clap::{Arg, Command};

use log::info;

use uv_beam_simulator::{logging::setup_logging, run_pipeline, SimCfg};

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("uv_beam_simulator")
        .about("uv coverage and dirty beam of an antenna array")
        .arg(
            Arg::new("cfg")
                .short('c')
                .long("cfg")
                .takes_value(true)
                .value_name("yaml")
                .required(true)
                .help("simulation config, see gen_sim_cfg"),
        )
        .arg(
            Arg::new("uv_dim")
                .long("uv-dim")
                .takes_value(true)
                .value_name("cells")
                .help("overrides uv_dim of the config"),
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

    let mut cfg = SimCfg::from_yaml_file(matches.value_of("cfg").unwrap_or_default())?;
    if matches.is_present("uv_dim") {
        cfg.uv_dim = matches.value_of_t("uv_dim")?;
        cfg.validate()?;
    }
    let prefix = matches.value_of("outprefix").unwrap_or_default();

    let products = run_pipeline(cfg.array.antennas().view(), &cfg.geometry(), cfg.uv_dim);

    products.write_npy(".", prefix)?;
    info!("products written to {}_*.npy", prefix);
    Ok(())
}
