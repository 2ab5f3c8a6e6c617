use std::error::Error;

use clap::{Arg, Command};

use uv_beam_simulator::{ArrayCfg, SimCfg, SkyCfg};

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("gen_sim_cfg")
        .about("write a default simulation config")
        .arg(
            Arg::new("layout")
                .short('l')
                .long("layout")
                .takes_value(true)
                .possible_values(["radial", "y", "random"])
                .default_value("radial")
                .help("antenna layout"),
        )
        .arg(
            Arg::new("with_sky")
                .long("sky")
                .help("include a synthetic sky for observe_sky"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("out")
                .takes_value(true)
                .value_name("yaml")
                .required(true)
                .help("output file name"),
        )
        .get_matches();

    let array = match matches.value_of("layout") {
        Some("y") => ArrayCfg::Y {
            n_antenna: 5,
            r: 500.0,
            alpha_deg: 0.0,
        },
        Some("random") => ArrayCfg::Random {
            n_antenna: 3,
            x_lims: 1000.0,
            y_lims: 1000.0,
            seed: None,
        },
        _ => ArrayCfg::default(),
    };
    let cfg = SimCfg {
        array,
        sky: if matches.is_present("with_sky") {
            Some(SkyCfg::default())
        } else {
            None
        },
        ..Default::default()
    };
    cfg.to_yaml_file(matches.value_of("outfile").unwrap_or_default())?;
    Ok(())
}
