use crate::error::{SweepError, SwResult};
use crate::measures::{all_measures, DistanceMeasure};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::Deserialize;
use std::fs;

#[derive(Args, Debug, Clone, Deserialize)]
pub struct SweepConfig {
    #[command(flatten)]
    #[serde(flatten)]
    pub params: SweepParams,
    #[command(flatten)]
    #[serde(flatten)]
    pub paths: SweepPaths,

    /// Distance measures to sweep. Repeatable; empty means all of them.
    #[arg(long = "measure", value_parser = parse_measure_arg)]
    #[serde(default)]
    pub measures: Vec<DistanceMeasure>,
}

#[derive(Args, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SweepParams {
    // Canopy distance thresholds
    #[arg(long, default_value_t = 0.5)]
    pub t1: f64,
    #[arg(long, default_value_t = 0.3)]
    pub t2: f64,

    // K-Means convergence
    #[arg(long, default_value_t = 0.1)]
    pub convergence_delta: f64,
    #[arg(long, default_value_t = 20)]
    pub max_iterations: u32,

    // Swept cluster counts, inclusive on both ends
    #[arg(long, default_value_t = 1)]
    pub k_min: u32,
    #[arg(long, default_value_t = 10)]
    pub k_max: u32,

    // Clusterdump report bounds
    #[arg(long, default_value_t = 100)]
    pub sample_size: u32,
    #[arg(long, default_value_t = 20)]
    pub neighbors: u32,
}

#[derive(Args, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SweepPaths {
    #[arg(long, default_value = "docs-vectors/tfidf-vectors")]
    pub input_vectors: String,
    #[arg(long, default_value = "docs-canopy-centroids")]
    pub canopy_output: String,
    #[arg(long, default_value = "docs-kmeans-clusters")]
    pub kmeans_output: String,
    #[arg(long, default_value = "docs-vectors/dictionary.file-*")]
    pub dictionary_glob: String,
    #[arg(long, default_value = "docs-kmeans-clusters/clusteredPoints")]
    pub clustered_points: String,
    #[arg(long, default_value = "clusters.txt")]
    pub report_file: String,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            t1: 0.5,
            t2: 0.3,
            convergence_delta: 0.1,
            max_iterations: 20,
            k_min: 1,
            k_max: 10,
            sample_size: 100,
            neighbors: 20,
        }
    }
}

impl Default for SweepPaths {
    fn default() -> Self {
        Self {
            input_vectors: "docs-vectors/tfidf-vectors".to_string(),
            canopy_output: "docs-canopy-centroids".to_string(),
            kmeans_output: "docs-kmeans-clusters".to_string(),
            dictionary_glob: "docs-vectors/dictionary.file-*".to_string(),
            clustered_points: "docs-kmeans-clusters/clusteredPoints".to_string(),
            report_file: "clusters.txt".to_string(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            params: SweepParams::default(),
            paths: SweepPaths::default(),
            measures: Vec::new(),
        }
    }
}

impl SweepConfig {
    /// Measures in sweep order. An empty selection means the full set.
    pub fn measures(&self) -> Vec<DistanceMeasure> {
        if self.measures.is_empty() {
            all_measures()
        } else {
            self.measures.clone()
        }
    }

    pub fn validate(&self) -> SwResult<()> {
        if self.params.k_min < 1 {
            return Err(SweepError::Validation(
                "--k-min must be at least 1".to_string(),
            ));
        }
        if self.params.k_min > self.params.k_max {
            return Err(SweepError::Validation(format!(
                "--k-min ({}) must not exceed --k-max ({})",
                self.params.k_min, self.params.k_max
            )));
        }
        Ok(())
    }

    /// Load a JSON profile. Missing fields fall back to the embedded
    /// defaults, so a profile only has to name what it overrides.
    pub fn load_from_file(path: &str) -> SwResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SweepError::Validation(format!("Could not open profile '{}': {}", path, e))
        })?;
        let config: SweepConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlay values the user passed explicitly on the command line onto
    /// this config. Values that merely carry their clap default are left
    /// alone, so a profile keeps authority over untouched flags.
    pub fn merge_from_cli(&mut self, cli: &SweepConfig, matches: &ArgMatches) {
        let from_cli = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

        if from_cli("t1") {
            self.params.t1 = cli.params.t1;
        }
        if from_cli("t2") {
            self.params.t2 = cli.params.t2;
        }
        if from_cli("convergence_delta") {
            self.params.convergence_delta = cli.params.convergence_delta;
        }
        if from_cli("max_iterations") {
            self.params.max_iterations = cli.params.max_iterations;
        }
        if from_cli("k_min") {
            self.params.k_min = cli.params.k_min;
        }
        if from_cli("k_max") {
            self.params.k_max = cli.params.k_max;
        }
        if from_cli("sample_size") {
            self.params.sample_size = cli.params.sample_size;
        }
        if from_cli("neighbors") {
            self.params.neighbors = cli.params.neighbors;
        }
        if from_cli("input_vectors") {
            self.paths.input_vectors = cli.paths.input_vectors.clone();
        }
        if from_cli("canopy_output") {
            self.paths.canopy_output = cli.paths.canopy_output.clone();
        }
        if from_cli("kmeans_output") {
            self.paths.kmeans_output = cli.paths.kmeans_output.clone();
        }
        if from_cli("dictionary_glob") {
            self.paths.dictionary_glob = cli.paths.dictionary_glob.clone();
        }
        if from_cli("clustered_points") {
            self.paths.clustered_points = cli.paths.clustered_points.clone();
        }
        if from_cli("report_file") {
            self.paths.report_file = cli.paths.report_file.clone();
        }
        if !cli.measures.is_empty() {
            self.measures = cli.measures.clone();
        }
    }
}

fn parse_measure_arg(s: &str) -> Result<DistanceMeasure, String> {
    s.parse()
        .map_err(|_| format!("Unknown distance measure '{}'", s))
}
