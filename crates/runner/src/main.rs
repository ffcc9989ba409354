use pumpwatch_report::{render_findings, render_panels, render_summary, write_json};
use pumpwatch_runner::{Pipeline, RunConfig};

fn print_help() {
    eprintln!(
        r#"Pumpwatch - pump-and-dump detection on a synthetic price/volume series

USAGE:
    pumpwatch [OPTIONS]

OPTIONS:
    --config <PATH>     Load run configuration from JSON file
    --json <PATH>       Write the annotated series to a JSON file
    --no-chart          Skip the price and volume charts
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Reproduce the reference run
    pumpwatch

    # Custom seed and thresholds
    pumpwatch --config run.json

    # Export for an external plotting tool
    pumpwatch --json annotated.json --no-chart
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut json_path: Option<String> = None;
    let mut charts = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--json" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --json requires a path argument");
                    std::process::exit(1);
                }
                json_path = Some(args[i].clone());
            }
            "--no-chart" => charts = false,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        log::info!("Loading configuration from: {}", path);
        RunConfig::from_file(&path)?
    } else {
        log::info!("Using default configuration");
        RunConfig::default()
    };

    let pipeline = Pipeline::with_config(config)?;
    let output = pipeline.run()?;

    print!("{}", render_findings(&output.summary));

    let chart_config = &pipeline.config().chart;
    if charts && chart_config.enabled {
        println!("{}", render_panels(&output.annotated, chart_config));
    }

    if let Some(path) = json_path {
        write_json(&path, &output.annotated)?;
    }

    print!("{}", render_summary(&output.summary));
    Ok(())
}
