use crate::config::SweepConfig;
use crate::error::SwResult;
use crate::mahout;
use crate::measures::DistanceMeasure;
use crate::parse::{self, DensityPair};
use crate::runner::CommandRunner;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::info;

/// Densities recorded for one distance measure, keyed by k in sweep order.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureResults {
    pub measure: DistanceMeasure,
    pub densities: BTreeMap<u32, DensityPair>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepResults {
    pub runs: Vec<MeasureResults>,
}

/// Run the full sweep: per measure, one canopy seeding pass, then one
/// partition/evaluate cycle per k. Strictly sequential; every external
/// command is awaited before the next one starts. Exactly one entry is
/// recorded per attempted (measure, k), never retried or overwritten, and
/// any error aborts the run with no partial report.
pub fn run_sweep(cfg: &SweepConfig, runner: &dyn CommandRunner) -> SwResult<SweepResults> {
    cfg.validate()?;

    let mut results = SweepResults::default();

    for measure in cfg.measures() {
        info!(%measure, "seeding centroids with canopy");
        let (prog, args) = mahout::canopy(cfg, measure);
        // Seeding output is discarded; completion is all it owes us.
        runner.run(&prog, &args)?;

        let mut densities = BTreeMap::new();
        for k in cfg.params.k_min..=cfg.params.k_max {
            let pair = run_partition(cfg, runner, measure, k)?;
            densities.insert(k, pair);
        }

        results.runs.push(MeasureResults { measure, densities });
    }

    Ok(results)
}

fn run_partition(
    cfg: &SweepConfig,
    runner: &dyn CommandRunner,
    measure: DistanceMeasure,
    k: u32,
) -> SwResult<DensityPair> {
    info!(%measure, k, "running k-means partition");
    let (prog, args) = mahout::kmeans(cfg, measure, k);
    runner.run(&prog, &args)?;

    let (prog, args) = mahout::list_output(cfg);
    let listing = runner.run(&prog, &args)?;
    let cluster_id = parse::discover_cluster_id(&listing)?;

    let (prog, args) = mahout::clusterdump(cfg, cluster_id);
    runner.run(&prog, &args)?;

    let (prog, args) = mahout::tail_report(cfg);
    let tail = runner.run(&prog, &args)?;

    parse::scan_densities(&tail)
}

/// Canonical stdout report: a header line per measure, then one line per k.
pub fn render_report(results: &SweepResults) -> String {
    let mut out = String::new();
    for run in &results.runs {
        let _ = writeln!(out, "Distance measure: {}", run.measure);
        for (k, pair) in &run.densities {
            let _ = writeln!(
                out,
                "k: {}, inter-cluster density: {}, intra-cluster density: {}",
                k,
                fmt_density(pair.inter),
                fmt_density(pair.intra)
            );
        }
    }
    out
}

/// Density rendering: integral values keep one decimal place ("1.0", not
/// "1"), everything else prints its shortest form. Absent values are "n/a".
pub fn fmt_density(value: Option<f64>) -> String {
    match value {
        None => "n/a".to_string(),
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{:.1}", v),
        Some(v) => format!("{}", v),
    }
}
