use crate::data_io::PointSetFormat;
use crate::vectors::{offsets::DEFAULT_POOL_SEED, Region, TRIALS_PER_POINT};
use clap::ArgMatches;
use std::path::PathBuf;

/// Physical constants used when moving points with the wind
#[derive(Clone, Debug)]
pub struct Constants {
    /// Average distance of 1 degree lat (km)
    pub deg_dist: f64,
    /// Floor on cos(latitude) so zonal steps stay finite at the poles
    pub min_cos_lat: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            deg_dist: 111.0,
            min_cos_lat: 0.01,
        }
    }
}

/// Settings for the frame-by-frame reseeding run
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Number of frames to produce
    pub frames: usize,
    /// Time between frames (seconds)
    pub time_step: f64,
    /// Uniform zonal wind (m/s)
    pub wind_u: f64,
    /// Uniform meridional wind (m/s)
    pub wind_v: f64,
    /// Grid spacing of the wind field (degrees)
    pub wind_resolution: f64,
    /// Directory receiving one point-set file per frame
    pub output_dir: PathBuf,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 24,
            time_step: 3600.0, // hourly frames
            wind_u: 10.0,
            wind_v: 0.0,
            wind_resolution: 1.0,
            output_dir: PathBuf::from("./frames"),
        }
    }
}

/// Main configuration structure with CLI support
#[derive(Clone, Debug)]
pub struct Config {
    /// Physical constants
    pub constants: Constants,

    /// Region to cover with points
    pub region: Region,
    /// Characteristic separation between points (degrees)
    pub scale: f64,
    /// Maximum number of points to allocate
    pub max_points: usize,
    /// Seed for trial sampling; `None` draws from system entropy
    pub random_seed: Option<u64>,
    /// Seed for the candidate offset pool
    pub pool_seed: u64,
    /// Pool offsets tried around each active point
    pub trials_per_point: usize,

    /// Point set from a previous run to carry forward
    pub previous_path: Option<PathBuf>,
    /// Output file for `allocate`
    pub output_path: PathBuf,
    /// Output format; inferred from the output path when `None`
    pub output_format: Option<PointSetFormat>,

    pub animation: AnimationConfig,
    /// Verbose output
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            constants: Constants::default(),
            region: Region::global(),
            scale: 5.0,
            max_points: 10_000,
            random_seed: None,
            pool_seed: DEFAULT_POOL_SEED,
            trials_per_point: TRIALS_PER_POINT,
            previous_path: None,
            output_path: PathBuf::from("vector_points.json"),
            output_format: None,
            animation: AnimationConfig::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Build a configuration from parsed subcommand arguments.
    ///
    /// Arguments a subcommand does not define keep their defaults.
    pub fn from_matches(matches: &ArgMatches, verbose: bool) -> Result<Self, String> {
        let mut config = Self {
            verbose,
            ..Self::default()
        };

        config.region = Region {
            lon_min: get_or(matches, "lon-min", config.region.lon_min),
            lon_max: get_or(matches, "lon-max", config.region.lon_max),
            lat_min: get_or(matches, "lat-min", config.region.lat_min),
            lat_max: get_or(matches, "lat-max", config.region.lat_max),
        };
        config.scale = get_or(matches, "scale", config.scale);
        config.max_points = get_or(matches, "max-points", config.max_points);
        config.random_seed = get_opt(matches, "seed");
        config.pool_seed = get_or(matches, "pool-seed", config.pool_seed);

        config.previous_path = get_opt::<String>(matches, "previous").map(PathBuf::from);
        if let Some(output) = get_opt::<String>(matches, "output") {
            config.output_path = PathBuf::from(output);
        }
        config.output_format = match get_opt::<String>(matches, "format") {
            Some(format) => Some(format.parse()?),
            None => None,
        };

        let anim = &mut config.animation;
        anim.frames = get_or(matches, "frames", anim.frames);
        anim.time_step = get_or(matches, "time-step", anim.time_step);
        anim.wind_u = get_or(matches, "wind-u", anim.wind_u);
        anim.wind_v = get_or(matches, "wind-v", anim.wind_v);
        anim.wind_resolution = get_or(matches, "wind-resolution", anim.wind_resolution);
        if let Some(dir) = get_opt::<String>(matches, "output-dir") {
            anim.output_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Format used for output files
    pub fn resolved_output_format(&self) -> PointSetFormat {
        self.output_format
            .unwrap_or_else(|| PointSetFormat::from_path(&self.output_path))
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        self.region.validate().map_err(|e| e.to_string())?;
        if self.region.lat_min < -90.0 || self.region.lat_max > 90.0 {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err("Scale must be positive".to_string());
        }
        if self.max_points == 0 {
            return Err("Maximum number of points must be positive".to_string());
        }
        if self.animation.frames == 0 {
            return Err("Number of frames must be positive".to_string());
        }
        if !(self.animation.time_step.is_finite() && self.animation.time_step > 0.0) {
            return Err("Time step must be positive".to_string());
        }
        if !(self.animation.wind_resolution.is_finite() && self.animation.wind_resolution > 0.0) {
            return Err("Wind resolution must be positive".to_string());
        }

        if let Some(ref previous) = self.previous_path {
            if !previous.is_file() {
                return Err(format!(
                    "Previous point file does not exist: {}",
                    previous.display()
                ));
            }
        }

        Ok(())
    }
}

// Subcommands only define the arguments they use; anything else reads as absent.
fn get_opt<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.try_get_one::<T>(name).ok().flatten().cloned()
}

fn get_or<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str, default: T) -> T {
    get_opt(matches, name).unwrap_or(default)
}
