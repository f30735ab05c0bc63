//! Income models
//!
//! Covers how base monthly income is derived (a fixed bi-weekly paycheck or
//! an average of irregular monthly samples) and the additional income
//! streams that are normalized to a monthly figure.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ids::{IncomeId, SampleId};
use super::money::Money;

/// Average weeks per month, as a ratio (4.33)
pub const WEEKS_PER_MONTH: (i64, i64) = (433, 100);

/// How base monthly income is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeMode {
    /// A recurring bi-weekly paycheck
    #[default]
    Fixed,
    /// The average of recent irregular monthly amounts
    Variable,
}

impl fmt::Display for IncomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

impl FromStr for IncomeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            other => Err(format!("unknown income mode '{}'", other)),
        }
    }
}

/// How often an additional income stream pays out
///
/// Persisted as a lowercase string. Strings this version doesn't know are
/// kept verbatim in `Unrecognized` so re-saving a record doesn't change them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Yearly,
    /// Anything persisted that isn't one of the above. Contributes nothing.
    /// Empty when the record had no frequency at all.
    Unrecognized(String),
}

impl Frequency {
    /// Normalize an amount paid at this frequency to a monthly equivalent
    pub fn monthly_equivalent(&self, amount: Money) -> Money {
        match self {
            Self::Weekly => amount.scale(WEEKS_PER_MONTH.0, WEEKS_PER_MONTH.1),
            Self::Biweekly => amount * 2,
            Self::Monthly => amount,
            Self::Yearly => amount.scale(1, 12),
            Self::Unrecognized(_) => Money::zero(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Unrecognized(raw) => raw,
        }
    }

    fn missing() -> Self {
        Self::Unrecognized(String::new())
    }

    fn is_missing(&self) -> bool {
        matches!(self, Self::Unrecognized(raw) if raw.is_empty())
    }

    fn from_persisted(raw: String) -> Self {
        match raw.as_str() {
            "weekly" => Self::Weekly,
            "biweekly" => Self::Biweekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.map(Self::from_persisted).unwrap_or_else(Self::missing))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(raw) if raw.is_empty() => write!(f, "unrecognized"),
            Self::Unrecognized(raw) => write!(f, "{} (unrecognized)", raw),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            other => Err(format!("unknown frequency '{}'", other)),
        }
    }
}

/// A recurring income stream on top of the base income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalIncome {
    pub id: IncomeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Money,
    #[serde(default = "Frequency::missing", skip_serializing_if = "Frequency::is_missing")]
    pub frequency: Frequency,
}

impl AdditionalIncome {
    pub fn new(id: IncomeId, name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            frequency,
        }
    }

    /// This stream's contribution to monthly income
    pub fn monthly_amount(&self) -> Money {
        self.frequency.monthly_equivalent(self.amount)
    }
}

/// Field edits accepted for an additional income stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeField {
    Name(String),
    /// Raw user input, coerced before storing
    Amount(String),
    Frequency(Frequency),
}

/// One month of irregular income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableIncomeSample {
    pub id: SampleId,
    /// Year-month label such as "2024-01"
    #[serde(rename = "date", alias = "period", default)]
    pub period: String,
    #[serde(default)]
    pub amount: Money,
}

impl VariableIncomeSample {
    pub fn new(id: SampleId, period: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            period: period.into(),
            amount,
        }
    }

    /// A sample counts toward the average only with a positive amount and a
    /// non-empty period
    pub fn is_valid(&self) -> bool {
        self.amount.is_positive() && !self.period.is_empty()
    }

    /// First day of the labelled month, if the label is a "YYYY-MM" string
    pub fn period_start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.period.trim()), "%Y-%m-%d").ok()
    }
}

/// Field edits accepted for a variable income sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleField {
    Period(String),
    /// Raw user input, coerced before storing
    Amount(String),
}

/// Mean of the valid samples, or zero when there are none
pub fn average_monthly_income(samples: &[VariableIncomeSample]) -> Money {
    let valid: Vec<Money> = samples
        .iter()
        .filter(|s| s.is_valid())
        .map(|s| s.amount)
        .collect();

    if valid.is_empty() {
        return Money::zero();
    }

    let total: Money = valid.iter().sum();
    total.scale(1, valid.len() as i64)
}
