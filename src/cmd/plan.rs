use clap::Args;
use clustersweep::config::SweepConfig;
use clustersweep::mahout;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: SweepConfig,

    /// JSON profile overriding the embedded defaults
    #[arg(short, long)]
    pub profile: Option<String>,
}

/// Print every external command the sweep would issue, without running
/// anything.
pub fn run(config: &SweepConfig) {
    println!("\n🗺  Sweep plan (nothing is executed):");

    for measure in config.measures() {
        println!("\n# {}", measure);
        print_command(&mahout::canopy(config, measure));

        for k in config.params.k_min..=config.params.k_max {
            println!("## k = {}", k);
            print_command(&mahout::kmeans(config, measure, k));
            print_command(&mahout::list_output(config));
            // The cluster id is only known at runtime, from the listing.
            let (prog, args) = mahout::clusterdump(config, 0);
            let rendered = format!("{} {}", prog, args.join(" "))
                .replace("clusters-0-final", "clusters-<id>-final");
            println!("  {}", rendered);
            print_command(&mahout::tail_report(config));
        }
    }
}

fn print_command((prog, args): &mahout::CommandLine) {
    println!("  {} {}", prog, args.join(" "));
}
