use clap::Parser;
use csv2vault::transcode;
use std::path::PathBuf;

/// Convert a password csv exported from a browser to json for importing
/// into a vault
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// csv to read from
    filename: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    run(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&args.filename)?;

    let catalog = transcode(rdr)?;
    println!("{}", serde_json::to_string(&catalog)?);

    Ok(())
}
