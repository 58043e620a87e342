use clap::{Parser, Subcommand};
use identicon::{ImageRecord, batch, config, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "identicon")]
#[command(about = "Deterministic 5x5 avatar images from any string")]
#[command(long_about = "\
Deterministic 5x5 avatar images from any string

Each input is hashed with MD5. The first three digest bytes give the color;
the first fifteen, read three at a time and mirrored, give a symmetric 5x5
grid in which every even byte becomes a filled 50x50 block on a 250x250
transparent PNG. The same input always yields the same file.

  identicon generate Banana            # → identicons/Banana.png
  identicon generate alice bob --manifest
  identicon preview Banana             # print the pattern, write nothing

Run 'identicon gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Strings to turn into identicons, one file each
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output directory (overrides `output_dir` from config.toml)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write manifest.json describing every generated image
    #[arg(long)]
    manifest: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate identicons and save them as PNG files
    Generate(GenerateArgs),
    /// Print the hash, color, and pattern for one input without writing files
    Preview {
        /// String to preview
        input: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => {
            let settings = config::load_config(&cli.config_dir)?;
            init_thread_pool(&settings.processing);
            let output_dir = args
                .output
                .unwrap_or_else(|| PathBuf::from(&settings.output_dir));

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_batch_event(&event);
                }
            });
            let outcomes = batch::generate_batch(&args.inputs, &output_dir, Some(tx));
            printer.join().map_err(|_| "output thread panicked")?;

            if args.manifest {
                let manifest = batch::BatchManifest::from_outcomes(&outcomes);
                let path = manifest.save(&output_dir)?;
                println!("Manifest: {}", path.display());
            }
            output::print_batch_summary(&outcomes);

            let failed = outcomes.iter().filter(|o| o.is_err()).count();
            if failed > 0 {
                return Err(format!("{failed} of {} identicons failed", outcomes.len()).into());
            }
        }
        Command::Preview { input } => {
            let record = ImageRecord::new(&input);
            output::print_preview(&input, &record);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
