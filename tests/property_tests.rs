use clustersweep::parse::{parse_cluster_id, validate_cluster_dir};
use proptest::prelude::*;

proptest! {
    /// Any final cluster directory id survives extraction exactly.
    #[test]
    fn prop_cluster_id_roundtrip(n in 0u64..=u64::MAX) {
        let segment = format!("clusters-{}-final", n);
        validate_cluster_dir(&segment, &segment).unwrap();
        prop_assert_eq!(parse_cluster_id(&segment).unwrap(), n);
    }

    /// The extracted id is independent of the path prefix in the listing.
    #[test]
    fn prop_cluster_id_ignores_listing_prefix(
        n in 0u64..1_000_000u64,
        depth in 1usize..5,
    ) {
        let mut line = String::new();
        for _ in 0..depth {
            line.push_str("dir/");
        }
        line.push_str(&format!("clusters-{}-final", n));

        let lines = vec![line];
        prop_assert_eq!(
            clustersweep::parse::discover_cluster_id(&lines).unwrap(),
            n
        );
    }

    /// Segments with a foreign prefix always fail validation, and the
    /// error carries the offending line.
    #[test]
    fn prop_foreign_prefix_rejected(prefix in "[a-z]{1,10}", n in 0u64..1000) {
        prop_assume!(prefix != "clusters");
        let segment = format!("{}-{}-final", prefix, n);
        let err = validate_cluster_dir(&segment, &segment).unwrap_err();
        prop_assert!(err.to_string().contains(&segment));
    }
}
