//! Growth projector
//!
//! Compounds a constant annual contribution over a number of years. The
//! contribution is deposited at the start of each year, before that year's
//! growth is applied. The running balance is carried unrounded; each emitted
//! row rounds balance and earnings to whole currency units.

use crate::models::{
    coerce_money, GrowthProjection, Money, ReturnRateProfile, YearProjection,
    DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS,
};

/// Largest balance, in whole units, that still fits in `Money`
const MAX_WHOLE_UNITS: i64 = i64::MAX / 100;

/// Projects savings growth under a return-rate profile
pub struct GrowthProjector;

impl GrowthProjector {
    /// Project `horizon_years` years of contributions.
    ///
    /// A zero horizon gives an empty projection. Negative contributions are
    /// clamped to zero. The horizon is capped at `MAX_HORIZON_YEARS`, and the
    /// projection ends early once the balance no longer fits in `Money`.
    ///
    /// ```
    /// use spendwise::models::{Money, ReturnRateProfile};
    /// use spendwise::services::GrowthProjector;
    ///
    /// let p = GrowthProjector::project(Money::from_dollars(10_000), ReturnRateProfile::Moderate, 2);
    /// assert_eq!(p.years[1].balance, Money::from_dollars(22_781));
    /// ```
    pub fn project(
        annual_contribution: Money,
        profile: ReturnRateProfile,
        horizon_years: u32,
    ) -> GrowthProjection {
        let annual_contribution = coerce_money(annual_contribution);
        let growth = 1.0 + profile.annual_return();
        let contribution = annual_contribution.as_units_f64();

        let mut balance = 0.0_f64;
        let mut total_contributed = Money::zero();
        let horizon_years = horizon_years.min(MAX_HORIZON_YEARS);
        let mut years = Vec::with_capacity(horizon_years as usize);

        for year in 1..=horizon_years {
            total_contributed += annual_contribution;
            balance = (balance + contribution) * growth;

            let whole_units = balance.round();
            if !(whole_units < MAX_WHOLE_UNITS as f64) {
                break;
            }
            let rounded_balance = Money::from_dollars(whole_units as i64);
            years.push(YearProjection {
                year,
                total_contributed,
                balance: rounded_balance,
                earnings: (rounded_balance - total_contributed).round_to_unit(),
            });
        }

        GrowthProjection {
            profile,
            annual_contribution,
            years,
        }
    }

    /// Project over the default 30-year horizon
    pub fn project_default(annual_contribution: Money, profile: ReturnRateProfile) -> GrowthProjection {
        Self::project(annual_contribution, profile, DEFAULT_HORIZON_YEARS)
    }

    /// One projection per profile, conservative first
    pub fn compare_profiles(annual_contribution: Money, horizon_years: u32) -> Vec<GrowthProjection> {
        ReturnRateProfile::ALL
            .iter()
            .map(|profile| Self::project(annual_contribution, *profile, horizon_years))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_first_two_years() {
        let p = GrowthProjector::project(Money::from_dollars(10_000), ReturnRateProfile::Moderate, 2);
        assert_eq!(p.len(), 2);

        let y1 = p.years[0];
        assert_eq!(y1.year, 1);
        assert_eq!(y1.total_contributed, Money::from_dollars(10_000));
        assert_eq!(y1.balance, Money::from_dollars(10_900));
        assert_eq!(y1.earnings, Money::from_dollars(900));

        let y2 = p.years[1];
        assert_eq!(y2.year, 2);
        assert_eq!(y2.total_contributed, Money::from_dollars(20_000));
        assert_eq!(y2.balance, Money::from_dollars(22_781));
        assert_eq!(y2.earnings, Money::from_dollars(2_781));
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let p = GrowthProjector::project(Money::from_dollars(5_000), ReturnRateProfile::Aggressive, 0);
        assert!(p.is_empty());
        assert!(p.final_year().is_none());
    }

    #[test]
    fn test_zero_contribution_stays_zero() {
        let p = GrowthProjector::project_default(Money::zero(), ReturnRateProfile::Aggressive);
        assert_eq!(p.len(), 30);
        for row in &p.years {
            assert!(row.balance.is_zero());
            assert!(row.earnings.is_zero());
            assert!(row.total_contributed.is_zero());
        }
    }

    #[test]
    fn test_negative_contribution_is_clamped() {
        let p = GrowthProjector::project(Money::from_dollars(-100), ReturnRateProfile::Moderate, 3);
        assert!(p.years.iter().all(|row| row.balance.is_zero()));
    }

    #[test]
    fn test_conservative_year_one() {
        let p = GrowthProjector::project(Money::from_dollars(1_000), ReturnRateProfile::Conservative, 1);
        assert_eq!(p.years[0].balance, Money::from_dollars(1_060));
        assert_eq!(p.years[0].earnings, Money::from_dollars(60));
    }

    #[test]
    fn test_rows_are_whole_units_and_year_indexed() {
        let p = GrowthProjector::project(Money::from_cents(1_234_56), ReturnRateProfile::Aggressive, 10);
        for (i, row) in p.years.iter().enumerate() {
            assert_eq!(row.year as usize, i + 1);
            assert_eq!(row.balance.cents() % 100, 0);
            assert_eq!(row.earnings.cents() % 100, 0);
            assert_eq!(row.total_contributed, Money::from_cents(1_234_56) * row.year as i64);
        }
    }

    #[test]
    fn test_balance_grows_with_profile() {
        let all = GrowthProjector::compare_profiles(Money::from_dollars(6_000), 30);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].profile, ReturnRateProfile::Conservative);
        assert_eq!(all[2].profile, ReturnRateProfile::Aggressive);

        let finals: Vec<Money> = all
            .iter()
            .filter_map(|p| p.final_year().map(|y| y.balance))
            .collect();
        assert!(finals[0] < finals[1]);
        assert!(finals[1] < finals[2]);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let a = GrowthProjector::project_default(Money::from_dollars(7_500), ReturnRateProfile::Moderate);
        let b = GrowthProjector::project_default(Money::from_dollars(7_500), ReturnRateProfile::Moderate);
        assert_eq!(a, b);
    }

    #[test]
    fn test_horizon_is_capped() {
        let p = GrowthProjector::project(
            Money::from_dollars(10_000),
            ReturnRateProfile::Aggressive,
            7_000,
        );
        assert_eq!(p.len(), MAX_HORIZON_YEARS as usize);
        for pair in p.years.windows(2) {
            assert!(pair[1].balance > pair[0].balance);
            assert!(pair[1].earnings >= pair[0].earnings);
        }
        for row in &p.years {
            assert_eq!(row.balance.cents() % 100, 0);
        }
    }

    #[test]
    fn test_stops_before_balance_overflows() {
        let p = GrowthProjector::project(
            Money::from_dollars(1_000_000_000_000_000),
            ReturnRateProfile::Aggressive,
            MAX_HORIZON_YEARS,
        );
        assert!(!p.is_empty());
        assert!(p.len() < MAX_HORIZON_YEARS as usize);
        for pair in p.years.windows(2) {
            assert!(pair[1].balance > pair[0].balance);
        }
        for row in &p.years {
            assert_eq!(row.balance.cents() % 100, 0);
            assert!(row.balance >= row.total_contributed);
        }
    }
}
