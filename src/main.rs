use clap::Parser;
use tracing_subscriber::EnvFilter;

use coordinate_parser::{
    Axis, Coordinate, FieldValidity, check_dms, display_coordinate, field_validity,
    format_to_dms, latitude_dms_string, longitude_dms_string, parse_pair, split_pair,
};

/// Parse, format and validate free-form coordinate text.
#[derive(Debug, Parser)]
#[command(name = "coordinate_parser", version, about)]
struct Cli {
    /// Coordinate strings, e.g. "112230N 0151545W" or "11.4584, -15.6827".
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Treat each input as a single latitude value instead of a pair.
    #[arg(long, conflicts_with = "longitude")]
    latitude: bool,

    /// Treat each input as a single longitude value instead of a pair.
    #[arg(long)]
    longitude: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let axis = if cli.latitude {
        Some(Axis::Latitude)
    } else if cli.longitude {
        Some(Axis::Longitude)
    } else {
        None
    };

    for input in &cli.inputs {
        match axis {
            Some(axis) => report_single(input, axis),
            None => report_pair(input),
        }
    }
}

fn report_single(input: &str, axis: Axis) {
    println!("{axis}: {input:?}");

    let dms = format_to_dms(Some(input), true, axis).unwrap_or_default();
    println!("  dms:      {dms}");

    match field_validity(Some(input), axis) {
        FieldValidity::Valid(value) => println!("  value:    {value:.6}"),
        FieldValidity::Empty => println!("  value:    (empty)"),
        FieldValidity::Invalid => match check_dms(&dms, axis) {
            Ok(value) => println!("  value:    {value:.6} (not strict entry)"),
            Err(err) => println!("  invalid:  {err}"),
        },
    }
}

fn report_pair(input: &str) {
    println!("pair: {input:?}");
    println!("  segments: {:?}", split_pair(Some(input)));

    let coordinate = parse_pair(input);
    let no_grid = |_: Coordinate| String::from("(no grid formatter)");
    println!("  decimal:  {}", display_coordinate(coordinate, false, &no_grid));

    if coordinate.is_complete() {
        println!(
            "  dms:      {}, {}",
            latitude_dms_string(coordinate.latitude),
            longitude_dms_string(coordinate.longitude)
        );
    }
}
