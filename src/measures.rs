use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Distance measures supported by the external clustering commands.
///
/// Variant order is the sweep order: every measure is seeded and swept
/// before the next one starts. The display form is the Mahout class short
/// name because the final report prints it verbatim.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum DistanceMeasure {
    #[strum(to_string = "CosineDistanceMeasure", serialize = "cosine")]
    Cosine,
    #[strum(to_string = "TanimotoDistanceMeasure", serialize = "tanimoto")]
    Tanimoto,
}

const MAHOUT_DISTANCE_PACKAGE: &str = "org.apache.mahout.common.distance";

impl DistanceMeasure {
    /// Fully qualified class name passed to the `-dm` flag.
    pub fn class_name(&self) -> String {
        format!("{}.{}", MAHOUT_DISTANCE_PACKAGE, self)
    }
}

pub fn all_measures() -> Vec<DistanceMeasure> {
    DistanceMeasure::iter().collect()
}
