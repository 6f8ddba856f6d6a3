//! Example: batch detection over a directory
//!
//! Runs the detection pipeline over every file in a directory in parallel.
//! Each invocation only reads its own signal, so files fan out across a
//! rayon pool with no coordination.

use std::path::PathBuf;

use rayon::prelude::*;

use gunshot_dsp::{detect_energy_events, io::decode_audio, DetectionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::args()
        .nth(1)
        .ok_or("usage: batch_locate <directory>")?;

    let files: Vec<PathBuf> = std::fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    println!("Analyzing {} files in {}", files.len(), dir);

    let config = DetectionConfig::energy();
    let mut results: Vec<(PathBuf, Result<Vec<f64>, String>)> = files
        .par_iter()
        .map(|path| {
            let outcome = decode_audio(path)
                .and_then(|(samples, sample_rate)| {
                    detect_energy_events(&samples, sample_rate, &config)
                })
                .map_err(|e| e.to_string());
            (path.clone(), outcome)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, outcome) in results {
        match outcome {
            Ok(timestamps) => {
                println!("{}: {} events {:?}", path.display(), timestamps.len(), timestamps)
            }
            Err(e) => println!("{}: skipped ({})", path.display(), e),
        }
    }

    Ok(())
}
