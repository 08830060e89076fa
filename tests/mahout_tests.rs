use clustersweep::config::SweepConfig;
use clustersweep::mahout;
use clustersweep::measures::DistanceMeasure;

fn joined(cmd: &mahout::CommandLine) -> String {
    format!("{} {}", cmd.0, cmd.1.join(" "))
}

#[test]
fn test_canopy_command_tokens() {
    let cmd = mahout::canopy(&SweepConfig::default(), DistanceMeasure::Cosine);
    assert_eq!(
        joined(&cmd),
        "mahout canopy -i docs-vectors/tfidf-vectors -ow -o docs-canopy-centroids \
         -dm org.apache.mahout.common.distance.CosineDistanceMeasure -t1 0.5 -t2 0.3"
    );
}

#[test]
fn test_canopy_thresholds_are_separate_tokens() {
    // The measure class and -t1 must not fuse into one token.
    let (_, args) = mahout::canopy(&SweepConfig::default(), DistanceMeasure::Cosine);
    assert!(args.contains(&"-t1".to_string()));
    assert!(args.contains(&"0.5".to_string()));
    assert!(!args.iter().any(|a| a.ends_with("Measure-t1")));
}

#[test]
fn test_kmeans_command_tokens() {
    let cmd = mahout::kmeans(&SweepConfig::default(), DistanceMeasure::Tanimoto, 4);
    assert_eq!(
        joined(&cmd),
        "mahout kmeans -i docs-vectors/tfidf-vectors -c docs-canopy-centroids \
         -o docs-kmeans-clusters -dm org.apache.mahout.common.distance.TanimotoDistanceMeasure \
         -cl -cd 0.1 -ow -x 20 -k 4"
    );
}

#[test]
fn test_kmeans_respects_config_overrides() {
    let mut config = SweepConfig::default();
    config.params.convergence_delta = 0.05;
    config.params.max_iterations = 40;
    config.paths.kmeans_output = "out".to_string();

    let (_, args) = mahout::kmeans(&config, DistanceMeasure::Cosine, 2);
    let s = args.join(" ");
    assert!(s.contains("-cd 0.05"));
    assert!(s.contains("-x 40"));
    assert!(s.contains("-o out"));
}

#[test]
fn test_listing_command() {
    let cmd = mahout::list_output(&SweepConfig::default());
    assert_eq!(joined(&cmd), "hadoop fs -ls docs-kmeans-clusters");
}

#[test]
fn test_clusterdump_command_tokens() {
    let cmd = mahout::clusterdump(&SweepConfig::default(), 10);
    assert_eq!(
        joined(&cmd),
        "mahout clusterdump -dt sequencefile -d docs-vectors/dictionary.file-* \
         -i docs-kmeans-clusters/clusters-10-final -o clusters.txt -b 100 \
         -p docs-kmeans-clusters/clusteredPoints -n 20 --evaluate"
    );
}

#[test]
fn test_clusterdump_interpolates_cluster_id() {
    let (_, args) = mahout::clusterdump(&SweepConfig::default(), 7);
    assert!(args.contains(&"docs-kmeans-clusters/clusters-7-final".to_string()));
}

#[test]
fn test_tail_command_targets_local_report() {
    let cmd = mahout::tail_report(&SweepConfig::default());
    assert_eq!(joined(&cmd), "tail ./clusters.txt");
}
