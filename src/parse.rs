use crate::error::{SweepError, SwResult};
use serde::Serialize;

pub const CLUSTER_DIR_PREFIX: &str = "clusters-";
pub const CLUSTER_DIR_SUFFIX: &str = "-final";

pub const INTER_LABEL: &str = "Inter-Cluster Density:";
pub const INTRA_LABEL: &str = "Intra-Cluster Density:";

/// Densities scraped from one clusterdump report tail. Either field stays
/// `None` when its label never appeared; the reporter renders that as "n/a".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DensityPair {
    pub inter: Option<f64>,
    pub intra: Option<f64>,
}

/// Final path segment of the last line of a directory listing.
pub fn last_subfolder(lines: &[String]) -> SwResult<String> {
    let last = lines.last().ok_or_else(|| {
        SweepError::Validation("K-Means output listing was empty".to_string())
    })?;
    let segment = last.rsplit('/').next().unwrap_or(last.as_str());
    Ok(segment.to_string())
}

/// Check that a discovered segment names a final cluster directory.
///
/// Two independent checks, each enforced on its own so a violation names
/// exactly which condition failed and carries the offending listing line.
pub fn validate_cluster_dir(segment: &str, line: &str) -> SwResult<()> {
    if !segment.starts_with(CLUSTER_DIR_PREFIX) {
        return Err(SweepError::Validation(format!(
            "Error in K-Means cluster output, no folder name starting with '{}'\n{}",
            CLUSTER_DIR_PREFIX, line
        )));
    }
    if !segment.ends_with(CLUSTER_DIR_SUFFIX) {
        return Err(SweepError::Validation(format!(
            "Error in K-Means cluster output, no folder name ending with '{}'\n{}",
            CLUSTER_DIR_SUFFIX, line
        )));
    }
    Ok(())
}

/// Numeric id between the prefix and suffix of a validated segment:
/// `clusters-<N>-final` yields N.
pub fn parse_cluster_id(segment: &str) -> SwResult<u64> {
    let token = segment.split('-').nth(1).ok_or_else(|| {
        SweepError::Parse(format!("No cluster id in segment '{}'", segment))
    })?;
    token.parse().map_err(|_| {
        SweepError::Parse(format!(
            "Cluster id '{}' in segment '{}' is not an integer",
            token, segment
        ))
    })
}

/// Full discovery step over a raw listing: last line, last segment,
/// validation, id extraction.
pub fn discover_cluster_id(lines: &[String]) -> SwResult<u64> {
    let segment = last_subfolder(lines)?;
    // last_subfolder only succeeds on a non-empty listing
    let line = lines.last().map(String::as_str).unwrap_or("");
    validate_cluster_dir(&segment, line)?;
    parse_cluster_id(&segment)
}

/// Scrape the two density labels out of a report tail. A label that is
/// present but not followed by a number is fatal; an absent label just
/// leaves its field unset.
pub fn scan_densities(lines: &[String]) -> SwResult<DensityPair> {
    let mut pair = DensityPair::default();
    for line in lines {
        if let Some(rest) = line.strip_prefix(INTER_LABEL) {
            pair.inter = Some(parse_density(rest, line)?);
        }
        if let Some(rest) = line.strip_prefix(INTRA_LABEL) {
            pair.intra = Some(parse_density(rest, line)?);
        }
    }
    Ok(pair)
}

fn parse_density(rest: &str, line: &str) -> SwResult<f64> {
    rest.trim()
        .parse()
        .map_err(|_| SweepError::Parse(format!("Non-numeric density value in line '{}'", line)))
}
