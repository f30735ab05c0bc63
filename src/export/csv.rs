//! CSV Export functionality
//!
//! Exports a growth projection as one row per year.

use serde::Serialize;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{GrowthProjection, Money};

#[derive(Serialize)]
struct ProjectionRecord {
    year: u32,
    total_contributed: String,
    balance: String,
    earnings: String,
}

fn amount(m: Money) -> String {
    format!("{:.2}", m.as_units_f64())
}

/// Export a projection to CSV (`year,total_contributed,balance,earnings`)
pub fn export_projection_csv<W: Write>(
    projection: &GrowthProjection,
    writer: &mut W,
) -> SpendwiseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if projection.is_empty() {
        csv_writer
            .write_record(["year", "total_contributed", "balance", "earnings"])
            .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    }

    for row in &projection.years {
        csv_writer
            .serialize(ProjectionRecord {
                year: row.year,
                total_contributed: amount(row.total_contributed),
                balance: amount(row.balance),
                earnings: amount(row.earnings),
            })
            .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReturnRateProfile;
    use crate::services::GrowthProjector;

    #[test]
    fn test_projection_csv() {
        let projection =
            GrowthProjector::project(Money::from_dollars(10_000), ReturnRateProfile::Moderate, 2);
        let mut buf = Vec::new();
        export_projection_csv(&projection, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,total_contributed,balance,earnings");
        assert_eq!(lines[1], "1,10000.00,10900.00,900.00");
        assert_eq!(lines[2], "2,20000.00,22781.00,2781.00");
    }

    #[test]
    fn test_empty_projection_still_has_header() {
        let projection =
            GrowthProjector::project(Money::from_dollars(10_000), ReturnRateProfile::Moderate, 0);
        let mut buf = Vec::new();
        export_projection_csv(&projection, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "year,total_contributed,balance,earnings\n"
        );
    }
}
