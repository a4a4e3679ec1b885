use clap::Parser;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wind_cell_core::sweep::sweep;
use wind_cell_core::{AltitudeLayer, Cell, Feet, SweepConfig};

/// Interpolated wind sweep over one cell, exported for gnuplot
#[derive(Parser, Debug)]
#[command(name = "wind-sweep")]
#[command(about = "Sweep a wind cell across altitudes and plot it with gnuplot", long_about = None)]
struct Args {
    /// Cell definition file
    input: PathBuf,

    /// Directory the data files and script are written to
    output: PathBuf,

    /// Lowest altitude in feet
    #[arg(long, default_value_t = 0.0)]
    altitude_min: f32,

    /// Highest altitude in feet
    #[arg(long, default_value_t = 15000.0)]
    altitude_max: f32,

    /// Altitude step in feet
    #[arg(long, default_value_t = 100.0)]
    altitude_step: f32,

    /// Lat/lon sampling step in arc seconds
    #[arg(short, long, default_value_t = 60)]
    sample_step: u32,

    /// Animation frame delay (hundredths of a second)
    #[arg(short, long, default_value_t = 10)]
    delay: u32,

    /// Print every sample of the cell before sweeping
    #[arg(long)]
    dump: bool,
}

impl Args {
    fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            altitude_min: Feet::new(self.altitude_min),
            altitude_max: Feet::new(self.altitude_max),
            altitude_step: Feet::new(self.altitude_step),
            sample_step_seconds: self.sample_step,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    println!("=== Wind Cell Sweep ===\n");
    println!("generating from {}", args.input.display());

    let cell = Cell::load(&args.input)?;
    println!("{cell}\n");

    if args.dump {
        println!("{}", cell.dump());
    }

    let config = args.sweep_config();
    let layers = sweep(&cell, &config)?;

    fs::create_dir_all(&args.output)?;

    let longitude = cell.anchor().longitude.degrees();
    let mut script = String::new();
    script.push_str("\nreset\n");
    script.push_str(&format!("set xrange [{}:{}]\n", longitude + 1, longitude));
    script.push_str(&format!("set terminal gif animate delay {}\n", args.delay));
    script.push_str("set output 'wind.gif'\n");

    for layer in &layers {
        let path = args
            .output
            .join(format!("gnuplot_{:.0}.txt", layer.altitude.value()));

        write_layer(&path, layer)?;
        println!(" altitude {} as {}... ok", layer.altitude, path.display());

        script.push_str(&format!("print 'generating {}'\n", path.display()));
        script.push_str(&format!(
            "plot '{}' using 1:2:3:4 with vectors head filled lt 1\n",
            path.display()
        ));
    }

    let script_path = args.output.join("script.gnu");
    fs::write(&script_path, script)?;

    info!(
        layers = layers.len(),
        script = %script_path.display(),
        "sweep written"
    );
    println!("\ndone");

    Ok(())
}

/// One `lon lat dx dy` line per sample, deltas scaled down to degrees
fn write_layer(path: &Path, layer: &AltitudeLayer) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    for sample in &layer.samples {
        let deltas = sample.velocity.deltas();
        writeln!(
            out,
            "{} {} {} {}",
            sample.coordinate.longitude().decimal_degrees(),
            sample.coordinate.latitude().decimal_degrees(),
            deltas.x / 3600.0,
            deltas.y / 3600.0
        )?;
    }

    out.flush()
}
