//! Investment growth projection models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Default number of years to project
pub const DEFAULT_HORIZON_YEARS: u32 = 30;

/// Longest horizon a projection will simulate
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Timeframes offered as quick summaries
pub const MILESTONE_YEARS: [u32; 3] = [10, 20, 30];

/// Named risk/return tier with a fixed annual growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnRateProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl ReturnRateProfile {
    /// Every profile, lowest to highest return
    pub const ALL: [ReturnRateProfile; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    /// Annual return as a fraction
    pub fn annual_return(&self) -> f64 {
        match self {
            Self::Conservative => 0.06,
            Self::Moderate => 0.09,
            Self::Aggressive => 0.12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Conservative => "Lower risk, steady growth (6%)",
            Self::Moderate => "Balanced growth (9%)",
            Self::Aggressive => "Higher risk, higher potential (12%)",
        }
    }
}

impl fmt::Display for ReturnRateProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ReturnRateProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(format!("unknown return profile '{}'", other)),
        }
    }
}

/// One simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearProjection {
    pub year: u32,
    pub total_contributed: Money,
    /// Balance at year end, rounded to whole currency units
    pub balance: Money,
    /// Balance minus contributions, rounded to whole currency units
    pub earnings: Money,
}

/// Year-by-year projection for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthProjection {
    pub profile: ReturnRateProfile,
    pub annual_contribution: Money,
    pub years: Vec<YearProjection>,
}

impl GrowthProjection {
    /// The entry for `year` (1-based), if the horizon reaches it
    pub fn at_year(&self, year: u32) -> Option<&YearProjection> {
        if year == 0 {
            return None;
        }
        self.years.get(year as usize - 1)
    }

    /// The last simulated year
    pub fn final_year(&self) -> Option<&YearProjection> {
        self.years.last()
    }

    /// Entries for each requested year the horizon reaches
    pub fn milestones(&self, years: &[u32]) -> Vec<YearProjection> {
        years.iter().filter_map(|y| self.at_year(*y).copied()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }
}
