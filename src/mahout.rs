use crate::config::SweepConfig;
use crate::measures::DistanceMeasure;

/// An external command as (program, argv), ready for a `CommandRunner`.
pub type CommandLine = (String, Vec<String>);

fn cmd(program: &str, args: Vec<String>) -> CommandLine {
    (program.to_string(), args)
}

/// Canopy seeding: proposes initial centroids for one distance measure.
pub fn canopy(cfg: &SweepConfig, measure: DistanceMeasure) -> CommandLine {
    cmd(
        "mahout",
        vec![
            "canopy".to_string(),
            "-i".to_string(),
            cfg.paths.input_vectors.clone(),
            "-ow".to_string(),
            "-o".to_string(),
            cfg.paths.canopy_output.clone(),
            "-dm".to_string(),
            measure.class_name(),
            "-t1".to_string(),
            cfg.params.t1.to_string(),
            "-t2".to_string(),
            cfg.params.t2.to_string(),
        ],
    )
}

/// K-Means refinement against the canopy centroids for a fixed k.
pub fn kmeans(cfg: &SweepConfig, measure: DistanceMeasure, k: u32) -> CommandLine {
    cmd(
        "mahout",
        vec![
            "kmeans".to_string(),
            "-i".to_string(),
            cfg.paths.input_vectors.clone(),
            "-c".to_string(),
            cfg.paths.canopy_output.clone(),
            "-o".to_string(),
            cfg.paths.kmeans_output.clone(),
            "-dm".to_string(),
            measure.class_name(),
            "-cl".to_string(),
            "-cd".to_string(),
            cfg.params.convergence_delta.to_string(),
            "-ow".to_string(),
            "-x".to_string(),
            cfg.params.max_iterations.to_string(),
            "-k".to_string(),
            k.to_string(),
        ],
    )
}

/// Directory listing of the k-means output; its last line names the
/// final-iteration cluster directory.
pub fn list_output(cfg: &SweepConfig) -> CommandLine {
    cmd(
        "hadoop",
        vec![
            "fs".to_string(),
            "-ls".to_string(),
            cfg.paths.kmeans_output.clone(),
        ],
    )
}

/// Clusterdump evaluation/export for a discovered cluster directory id.
/// Writes a bounded human-readable report to the local report file.
pub fn clusterdump(cfg: &SweepConfig, cluster_id: u64) -> CommandLine {
    cmd(
        "mahout",
        vec![
            "clusterdump".to_string(),
            "-dt".to_string(),
            "sequencefile".to_string(),
            "-d".to_string(),
            cfg.paths.dictionary_glob.clone(),
            "-i".to_string(),
            format!("{}/clusters-{}-final", cfg.paths.kmeans_output, cluster_id),
            "-o".to_string(),
            cfg.paths.report_file.clone(),
            "-b".to_string(),
            cfg.params.sample_size.to_string(),
            "-p".to_string(),
            cfg.paths.clustered_points.clone(),
            "-n".to_string(),
            cfg.params.neighbors.to_string(),
            "--evaluate".to_string(),
        ],
    )
}

/// Tail of the local clusterdump report; the density summary lives at the end.
pub fn tail_report(cfg: &SweepConfig) -> CommandLine {
    cmd("tail", vec![format!("./{}", cfg.paths.report_file)])
}
