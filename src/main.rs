// ===== clustersweep/src/main.rs =====
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clustersweep::config::SweepConfig;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bare invocation runs the full sweep with every default intact.
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Sweep(cmd::sweep::SweepArgs),
    Plan(cmd::plan::PlanArgs),
}

fn main() {
    // 1. Parse Raw Matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();

    // 2. Construct CLI struct (populated with defaults)
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    // Logs go to stderr so the report contract on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // 3. Extract CLI-provided config AND the specific matches for the
    // subcommand. Flags like --t1 live inside the subcommand's matches,
    // not the root.
    let (cli_config, profile_path, sub_name, json_path) = match &cli.command {
        Some(Commands::Sweep(args)) => (
            args.config.clone(),
            args.profile.clone(),
            "sweep",
            args.json.clone(),
        ),
        Some(Commands::Plan(args)) => (args.config.clone(), args.profile.clone(), "plan", None),
        None => (SweepConfig::default(), None, "", None),
    };

    // 4. Resolve Config Strategy: JSON profile vs CLI
    let config = if let Some(path) = &profile_path {
        println!("📂 Loading profile: {}", path);
        let mut base = SweepConfig::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        });
        if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
            base.merge_from_cli(&cli_config, sub_matches);
        }
        base
    } else {
        cli_config
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    // 5. Execute
    match cli.command {
        Some(Commands::Plan(_)) => cmd::plan::run(&config),
        _ => cmd::sweep::run(&config, json_path.as_deref()),
    }
}
