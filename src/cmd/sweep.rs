use crate::reports;
use clap::Args;
use clustersweep::config::SweepConfig;
use clustersweep::runner::ShellRunner;
use clustersweep::sweep;
use std::fs;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: SweepConfig,

    /// JSON profile overriding the embedded defaults
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Also write the aggregated results as JSON to this path
    #[arg(short, long)]
    pub json: Option<String>,
}

pub fn run(config: &SweepConfig, json_path: Option<&str>) {
    let measures = config.measures();
    println!(
        "\n🚀 Sweeping {} measure(s), k = {}..={}",
        measures.len(),
        config.params.k_min,
        config.params.k_max
    );

    let runner = ShellRunner;
    let results = match sweep::run_sweep(config, &runner) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("\n❌ SWEEP FAILED:");
            eprintln!("   {}", e);
            process::exit(1);
        }
    };

    println!();
    print!("{}", sweep::render_report(&results));
    reports::print_density_table(&results);

    if let Some(path) = json_path {
        let payload = match serde_json::to_string_pretty(&results) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ Could not serialize results: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = fs::write(path, payload) {
            eprintln!("❌ Could not write '{}': {}", path, e);
            process::exit(1);
        }
        println!("💾 Results written to {}", path);
    }
}
