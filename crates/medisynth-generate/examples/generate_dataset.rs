use std::env;
use std::path::PathBuf;

use medisynth_generate::output::write_dataset;
use medisynth_generate::{SynthesisOptions, Synthesizer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out_dir: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from),
            "--seed" => seed = args.next().map(|value| value.parse()).transpose()?,
            _ => {
                if out_dir.is_none() {
                    out_dir = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("sample_data"));

    let options = SynthesisOptions {
        seed,
        ..SynthesisOptions::default()
    };

    let mut synthesizer = Synthesizer::new(options);
    let seed = synthesizer.seed();
    let dataset = synthesizer.synthesize()?;
    let reports = write_dataset(&out_dir, &dataset)?;

    for report in &reports {
        println!("{}={}", report.table, report.records);
    }
    println!("seed={seed}");
    println!("out_dir={}", out_dir.display());
    Ok(())
}
