use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use resumegen::{generate_to_file, FsAssets, ResumeData};

/// Render a resume JSON file into a two-column PDF.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Resume data (JSON)
    input: PathBuf,

    /// Directory to write the PDF into; the file name derives from the
    /// person's name
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Static asset root for the profile image and entry icons
    #[arg(long, default_value = ".")]
    assets: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&args.input)?;
    let data: ResumeData = serde_json::from_str(&json)?;
    let assets = FsAssets::new(&args.assets);
    Ok(generate_to_file(&data, &assets, &args.out_dir)?)
}
