use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

use derive_getters::Getters;

use crate::core::errors::{FeatureError, Result};

pub const DEFAULT_WINDOW: usize = 4;

const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(DEFAULT_WINDOW) {
    Some(x) => x,
    None => panic!("Default window width must be >= 1"),
};

/// Which reads count towards `coverage` and `base_counts` at a position.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum CoverageMode {
    // Every read aligned to the base, whatever its category
    #[default]
    AllReads,
    // Only proper pairs (matches and SNPs); other categories are still tallied in their own counters
    ProperOnly,
}

impl FromStr for CoverageMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(CoverageMode::AllReads),
            "proper" => Ok(CoverageMode::ProperOnly),
            _ => Err(format!("Unknown coverage mode: {}", s)),
        }
    }
}

impl Display for CoverageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageMode::AllReads => write!(f, "all"),
            CoverageMode::ProperOnly => write!(f, "proper"),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Getters)]
pub struct FeatureConfig {
    window: NonZeroUsize,
    coverage: CoverageMode,
}

impl FeatureConfig {
    pub fn new(window: usize, coverage: CoverageMode) -> Result<Self> {
        let window = NonZeroUsize::new(window).ok_or(FeatureError::InvalidWindow)?;
        Ok(Self { window, coverage })
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { window: DEFAULT_WIDTH, coverage: CoverageMode::default() }
    }
}
