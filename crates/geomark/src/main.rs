use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use geomark::{
    GeoPoint, IrwinHall, Marker, ScatterParams, format_coordinate, geojson, resolve_center,
    scatter,
};
use log::{error, info};
use rand::{RngCore, SeedableRng, distr::Distribution, rng, rngs::SmallRng};

#[derive(Parser)]
#[command(version, about = "Format coordinates and scatter map markers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Print a coordinate in degrees/minutes/seconds.
    Format {
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Draw approximately normal samples.
    Sample {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,

        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        sigma: f64,

        /// Number of samples.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Scatter point markers around the last known location.
    Scatter {
        /// Last known latitude. Defaults to Osaka University.
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Last known longitude.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        #[arg(short = 'n', long, default_value_t = ScatterParams::default().count)]
        count: usize,

        #[arg(
            long,
            value_name = "FLOAT",
            default_value_t = ScatterParams::default().lat_sigma,
            allow_negative_numbers = true
        )]
        lat_sigma: f64,

        #[arg(
            long,
            value_name = "FLOAT",
            default_value_t = ScatterParams::default().lng_sigma,
            allow_negative_numbers = true
        )]
        lng_sigma: f64,

        #[arg(long)]
        seed: Option<u64>,

        /// Write GeoJSON to <FILE> instead of stdout.
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
    },
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    Ok(())
}

fn seeded_or_thread_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(SmallRng::seed_from_u64(seed)),
        None => Box::new(rng()),
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Format { lat, lng } => {
            println!("{}", format_coordinate(&GeoPoint::try_new(lat, lng)?));
        }
        Commands::Sample {
            mu,
            sigma,
            count,
            seed,
        } => {
            let dist = IrwinHall::new(mu, sigma)?;
            let mut rng = seeded_or_thread_rng(seed);

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for sample in dist.sample_iter(&mut *rng).take(count) {
                writeln!(out, "{sample}")?;
            }
            out.flush()?;
        }
        Commands::Scatter {
            lat,
            lng,
            count,
            lat_sigma,
            lng_sigma,
            seed,
            out_file,
        } => {
            let last_known = match lat.zip(lng) {
                Some((lat, lng)) => Some(GeoPoint::try_new(lat, lng)?),
                None => None,
            };
            let center = resolve_center(last_known);
            let params = ScatterParams {
                count,
                lat_sigma,
                lng_sigma,
            };
            let mut rng = seeded_or_thread_rng(seed);

            let points = scatter(center, &params, &mut *rng)?;
            let mut markers = Vec::with_capacity(points.len() + 1);
            markers.push(Marker::current_location(center));
            markers.extend(points);

            match out_file {
                Some(path) => {
                    info!("Writing {} markers to {}", markers.len(), path.display());
                    let mut writer = BufWriter::new(File::create(path)?);
                    geojson::write_feature_collection(&mut writer, &markers)?;
                    writer.flush()?;
                }
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    geojson::write_feature_collection(&mut out, &markers)?;
                    writeln!(out)?;
                    out.flush()?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
