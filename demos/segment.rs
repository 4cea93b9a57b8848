//! Example of segmenting "x y" text files.

use std::{error::Error, fs::File, io::BufReader, time::Instant};

use segfit::{Kahan, PointSeries, Segmenter};
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<(), Box<dyn Error>> {
    // Log with `RUST_LOG=segfit=debug`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Try to read each argument as a file
    for arg in std::env::args().skip(1) {
        eprintln!("Reading file '{arg}'");

        let points = PointSeries::from_reader(BufReader::new(File::open(arg)?))?;

        // Run the algorithm
        let start = Instant::now();
        let result = Segmenter::new().optimal_partition::<Kahan>(&points);
        eprintln!(
            "Time taken by algorithm: {} microseconds",
            start.elapsed().as_micros()
        );

        match result {
            Ok(partition) => print!("{partition}"),
            // Print the error
            Err(err) => eprintln!("Error segmenting: {err}"),
        }
    }

    Ok(())
}
