use clap::{value_parser, Arg, ArgMatches, Command};
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wind_vectors::{
    animation::VectorAnimation,
    config::Config,
    data_io::{read_point_set, write_point_set},
    vectors::{OffsetPool, VectorPointAllocator},
    wind::WindField,
};

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    match matches.subcommand() {
        Some(("allocate", sub_matches)) => {
            if let Err(e) = run_allocate(sub_matches, verbose) {
                eprintln!("Allocation error: {}", e);
                std::process::exit(1);
            }
        }
        Some(("animate", sub_matches)) => {
            if let Err(e) = run_animate(sub_matches, verbose) {
                eprintln!("Animation error: {}", e);
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Please specify a subcommand. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_allocate(matches: &ArgMatches, verbose: bool) -> Result<(), String> {
    let config = Config::from_matches(matches, verbose)?;

    let previous = match config.previous_path {
        Some(ref path) => {
            let points = read_point_set(path).map_err(|e| e.to_string())?;
            info!(path = %path.display(), count = points.len(), "Loaded previous points");
            Some(points)
        }
        None => None,
    };

    let allocator = VectorPointAllocator::new(OffsetPool::from_seed(config.pool_seed))
        .with_trials_per_point(config.trials_per_point);
    let points = allocator
        .allocate_seeded(
            previous.as_deref(),
            &config.region,
            config.scale,
            config.max_points,
            config.random_seed,
        )
        .map_err(|e| e.to_string())?;

    let format = config.resolved_output_format();
    write_point_set(&config.output_path, format, &points).map_err(|e| e.to_string())?;

    info!(
        count = points.len(),
        retained = points.iter().filter(|p| p.age > 0).count(),
        path = %config.output_path.display(),
        %format,
        "Allocated wind vector points"
    );
    Ok(())
}

fn run_animate(matches: &ArgMatches, verbose: bool) -> Result<(), String> {
    let config = Config::from_matches(matches, verbose)?;
    let anim = &config.animation;

    if config.random_seed.is_none() {
        warn!("No --seed given: frames will not be reproducible");
    }

    let field = WindField::uniform(&config.region, anim.wind_resolution, anim.wind_u, anim.wind_v)
        .map_err(|e| e.to_string())?;

    fs::create_dir_all(&anim.output_dir)
        .map_err(|e| format!("Failed to create {}: {}", anim.output_dir.display(), e))?;

    let format = config.output_format.unwrap_or_default();
    let mut animation = VectorAnimation::from_config(&config);

    for frame in 0..anim.frames {
        let points = if frame == 0 {
            animation.first_frame()
        } else {
            animation.next_frame(&field, anim.time_step)
        }
        .map_err(|e| format!("frame {}: {}", frame, e))?;

        let path = anim
            .output_dir
            .join(format!("frame_{:04}.{}", frame, format.extension()));
        write_point_set(&path, format, points).map_err(|e| e.to_string())?;

        info!(frame, count = points.len(), path = %path.display(), "Wrote frame");
    }

    Ok(())
}

fn region_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("lon-min")
                .long("lon-min")
                .value_name("DEGREES")
                .help("Minimum longitude")
                .default_value("-180.0")
                .allow_hyphen_values(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("lon-max")
                .long("lon-max")
                .value_name("DEGREES")
                .help("Maximum longitude")
                .default_value("180.0")
                .allow_hyphen_values(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("lat-min")
                .long("lat-min")
                .value_name("DEGREES")
                .help("Minimum latitude")
                .default_value("-90.0")
                .allow_hyphen_values(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("lat-max")
                .long("lat-max")
                .value_name("DEGREES")
                .help("Maximum latitude")
                .default_value("90.0")
                .allow_hyphen_values(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("scale")
                .short('s')
                .long("scale")
                .value_name("DEGREES")
                .help("Characteristic separation between points")
                .default_value("5.0")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("max-points")
                .short('n')
                .long("max-points")
                .value_name("COUNT")
                .help("Maximum number of points to allocate")
                .default_value("10000")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Random seed for candidate sampling (entropy if omitted)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("pool-seed")
                .long("pool-seed")
                .value_name("SEED")
                .help("Seed for the candidate offset pool")
                .default_value("12")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Point set format: json or ascii")
                .value_parser(["json", "ascii"]),
        )
}

fn build_cli() -> Command {
    Command::new("wind_vectors")
        .version("0.1.0")
        .about("Blue-noise allocation of wind-vector points for weather maps")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            region_args(Command::new("allocate"))
                .about("Allocate an evenly spread set of points over a region")
                .arg(
                    Arg::new("previous")
                        .short('p')
                        .long("previous")
                        .value_name("FILE")
                        .help("Point set from a previous run to carry forward"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Output point set file")
                        .required(true),
                ),
        )
        .subcommand(
            region_args(Command::new("animate"))
                .about("Carry points through a sequence of frames in a uniform wind")
                .arg(
                    Arg::new("frames")
                        .short('f')
                        .long("frames")
                        .value_name("COUNT")
                        .help("Number of frames")
                        .default_value("24")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("time-step")
                        .short('t')
                        .long("time-step")
                        .value_name("SECONDS")
                        .help("Time between frames")
                        .default_value("3600")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("wind-u")
                        .long("wind-u")
                        .value_name("M/S")
                        .help("Zonal wind component")
                        .default_value("10.0")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("wind-v")
                        .long("wind-v")
                        .value_name("M/S")
                        .help("Meridional wind component")
                        .default_value("0.0")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("wind-resolution")
                        .long("wind-resolution")
                        .value_name("DEGREES")
                        .help("Grid spacing of the wind field")
                        .default_value("1.0")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .value_name("DIR")
                        .help("Directory for per-frame point sets")
                        .default_value("./frames"),
                ),
        )
}
