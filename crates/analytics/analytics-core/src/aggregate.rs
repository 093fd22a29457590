//! Group-by reductions of a filtered table.
//!
//! Each function is pure and handles an empty table by returning an empty
//! view (or, for the calendar-month view, twelve `None` means). Rows sharing
//! a key are always summed before anything else happens.

use std::collections::BTreeMap;

use analytics_spi::{CalendarMonth, DateTotal, MonthlyMean, OrdinalScale, RegionTotal, RegressionPoint};
use chrono::NaiveDate;
use dataset_spi::CleanTable;

fn sum_by_date(table: &CleanTable) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in table {
        *totals.entry(record.date).or_insert(0.0) += record.cases;
    }
    totals
}

/// Total cases per month, ascending by date.
pub fn total_by_date(table: &CleanTable) -> Vec<DateTotal> {
    sum_by_date(table)
        .into_iter()
        .map(|(date, cases)| DateTotal { date, cases })
        .collect()
}

/// Total cases per governorate, ascending by total. Equal totals keep
/// alphabetical order.
pub fn total_by_region(table: &CleanTable) -> Vec<RegionTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in table {
        *totals.entry(record.governorate.as_str()).or_insert(0.0) += record.cases;
    }

    let mut regions: Vec<RegionTotal> = totals
        .into_iter()
        .map(|(governorate, cases)| RegionTotal {
            governorate: governorate.to_string(),
            cases,
        })
        .collect();
    regions.sort_by(|a, b| a.cases.total_cmp(&b.cases));
    regions
}

/// Mean row value per calendar month, January through December.
///
/// The mean is taken over rows, not over monthly totals, so it is the average
/// reported count for one governorate in that month.
pub fn mean_by_calendar_month(table: &CleanTable) -> Vec<MonthlyMean> {
    let mut acc = [(0.0_f64, 0_usize); 12];
    for record in table {
        if let Some(month) = CalendarMonth::from_number(record.month_number()) {
            let slot = &mut acc[month as usize];
            slot.0 += record.cases;
            slot.1 += 1;
        }
    }

    CalendarMonth::all()
        .iter()
        .map(|&month| {
            let (sum, count) = acc[month as usize];
            MonthlyMean {
                month,
                mean: (count > 0).then(|| sum / count as f64),
            }
        })
        .collect()
}

/// By-date totals with each date encoded on `scale`.
pub fn regression_series(table: &CleanTable, scale: OrdinalScale) -> Vec<RegressionPoint> {
    sum_by_date(table)
        .into_iter()
        .map(|(date, cases)| RegressionPoint {
            date,
            ordinal: scale.ordinal(date),
            cases,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_spi::CleanRecord;

    fn rec(y: i32, m: u32, g: &str, c: f64) -> CleanRecord {
        CleanRecord::new(NaiveDate::from_ymd_opt(y, m, 1).unwrap(), g, c)
    }

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn sample() -> CleanTable {
        CleanTable::new(vec![
            rec(2020, 2, "Beirut", 20.0),
            rec(2020, 1, "Beirut", 10.0),
            rec(2020, 1, "North", 5.0),
            rec(2019, 1, "South", 3.0),
            rec(2020, 1, "Beirut", 1.0),
        ])
    }

    #[test]
    fn test_total_by_date_sums_and_sorts() {
        let totals = total_by_date(&sample());
        assert_eq!(
            totals,
            vec![
                DateTotal { date: date(2019, 1), cases: 3.0 },
                DateTotal { date: date(2020, 1), cases: 16.0 },
                DateTotal { date: date(2020, 2), cases: 20.0 },
            ]
        );
    }

    #[test]
    fn test_total_by_region_ascending_by_total() {
        let regions = total_by_region(&sample());
        let names: Vec<&str> = regions.iter().map(|r| r.governorate.as_str()).collect();
        assert_eq!(names, vec!["South", "North", "Beirut"]);
        assert_eq!(regions[2].cases, 31.0);
    }

    #[test]
    fn test_total_by_region_ties_are_alphabetical() {
        let table = CleanTable::new(vec![
            rec(2020, 1, "Nabatieh", 2.0),
            rec(2020, 1, "Akkar", 2.0),
            rec(2020, 1, "Bekaa", 1.0),
        ]);
        let names: Vec<String> = total_by_region(&table).into_iter().map(|r| r.governorate).collect();
        assert_eq!(names, vec!["Bekaa", "Akkar", "Nabatieh"]);
    }

    #[test]
    fn test_totals_conserve_sum() {
        let table = sample();
        let total = table.total_cases();
        let by_date: f64 = total_by_date(&table).iter().map(|d| d.cases).sum();
        let by_region: f64 = total_by_region(&table).iter().map(|r| r.cases).sum();
        assert!((by_date - total).abs() < 1e-9);
        assert!((by_region - total).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_mean_reindexes_all_twelve_months() {
        let means = mean_by_calendar_month(&sample());

        assert_eq!(means.len(), 12);
        assert_eq!(means[0].month, CalendarMonth::January);
        assert_eq!(means[11].month, CalendarMonth::December);
        // January rows: 10, 5, 3, 1
        assert_eq!(means[0].mean, Some(4.75));
        assert_eq!(means[1].mean, Some(20.0));
        assert!(means[2..].iter().all(|m| m.mean.is_none()));
    }

    #[test]
    fn test_regression_series_matches_by_date() {
        let table = sample();
        let series = regression_series(&table, OrdinalScale::MonthIndex);
        let totals = total_by_date(&table);

        assert_eq!(series.len(), totals.len());
        for (point, total) in series.iter().zip(&totals) {
            assert_eq!(point.date, total.date);
            assert_eq!(point.cases, total.cases);
        }
        assert!(series.windows(2).all(|w| w[0].ordinal < w[1].ordinal));
    }

    #[test]
    fn test_empty_table_views() {
        let empty = CleanTable::default();
        assert!(total_by_date(&empty).is_empty());
        assert!(total_by_region(&empty).is_empty());
        assert!(regression_series(&empty, OrdinalScale::ProlepticDay).is_empty());

        let means = mean_by_calendar_month(&empty);
        assert_eq!(means.len(), 12);
        assert!(means.iter().all(|m| m.mean.is_none()));
    }
}
