use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four anatomical zones scored independently by the Lémann Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Organ {
    Upper,
    SmallBowel,
    ColonRectum,
    Anus,
}

const UPPER_SEGMENTS: [&str; 3] = ["oesophagus", "stomach", "duodenum"];

const SMALL_BOWEL_SEGMENTS: [&str; 20] = [
    "bin_01", "bin_02", "bin_03", "bin_04", "bin_05", "bin_06", "bin_07", "bin_08", "bin_09",
    "bin_10", "bin_11", "bin_12", "bin_13", "bin_14", "bin_15", "bin_16", "bin_17", "bin_18",
    "bin_19", "bin_20",
];

const COLON_RECTUM_SEGMENTS: [&str; 6] = [
    "caecum",
    "ascending",
    "transverse",
    "descending",
    "sigmoid",
    "rectum",
];

// The anus is scored as a single unit.
const ANUS_SEGMENTS: [&str; 1] = ["anus"];

impl Organ {
    /// All organs, in index order.
    pub const ALL: [Organ; 4] = [
        Organ::Upper,
        Organ::SmallBowel,
        Organ::ColonRectum,
        Organ::Anus,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Organ::Upper => "upper",
            Organ::SmallBowel => "small_bowel",
            Organ::ColonRectum => "colon_rectum",
            Organ::Anus => "anus",
        }
    }

    /// The ordered anatomical segments this organ is scored over.
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            Organ::Upper => &UPPER_SEGMENTS,
            Organ::SmallBowel => &SMALL_BOWEL_SEGMENTS,
            Organ::ColonRectum => &COLON_RECTUM_SEGMENTS,
            Organ::Anus => &ANUS_SEGMENTS,
        }
    }

    pub fn is_valid_segment(&self, segment: &str) -> bool {
        self.segments().contains(&segment)
    }

    /// Fixed denominator for normalising the organ score. Equal to the
    /// segment count except for the anus, whose denominator is fixed at 1 by
    /// the index definition rather than derived from its segment list.
    pub fn denominator(&self) -> f64 {
        match self {
            Organ::Upper => 3.0,
            Organ::SmallBowel => 20.0,
            Organ::ColonRectum => 6.0,
            Organ::Anus => 1.0,
        }
    }

    /// Weight of this organ's score in the Global Lémann Index.
    pub fn global_weight(&self) -> f64 {
        match self {
            Organ::Upper => 2.0,
            Organ::SmallBowel => 4.0,
            Organ::ColonRectum => 3.0,
            Organ::Anus => 2.5,
        }
    }
}
