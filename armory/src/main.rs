use armory::{ArmoryError, DemoConfig, RandomSource};
use clap::Parser;
use cursors::{CursorError, DEFAULT_CAPACITY};
use embedded_io_adapters::std::FromStd;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "armory")]
#[command(about = "Walk containers of firearms with decorated cursors", long_about = None)]
struct Args {
    /// Seed for picking firearm kinds (random if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Firearms created per container
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Capacity of the fixed array
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() {
    let args = Args::parse();

    let config = DemoConfig {
        per_container: args.count,
        array_capacity: args.capacity,
    };
    let mut source = match args.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    let mut output_writer = FromStd::new(io::stdout());

    if let Err(e) = armory::run(&config, &mut source, &mut output_writer) {
        eprintln!("Armory error: {e}");

        // Provide additional context based on error type
        match &e {
            ArmoryError::UnrecognizedVariant { discriminant } => {
                eprintln!("  Error type: factory");
                eprintln!("  Discriminant: {discriminant}");
            }
            ArmoryError::Cursor(CursorError::CapacityExceeded { capacity }) => {
                eprintln!("  Error type: container");
                eprintln!(
                    "  The fixed array holds {capacity} firearms, {} were requested",
                    args.count
                );
            }
            ArmoryError::Cursor(CursorError::InvalidCapacity { capacity }) => {
                eprintln!("  Error type: container");
                eprintln!("  Cannot allocate a fixed array of {capacity} firearms");
            }
            ArmoryError::Cursor(cursor_err) => {
                eprintln!("  Error type: cursor");
                eprintln!("  Details: {cursor_err:?}");
            }
            ArmoryError::Output { kind } => {
                eprintln!("  Error type: IO error");
                eprintln!("  Details: {kind:?}");
            }
        }

        std::process::exit(1);
    }
}
