// Percentage, color and country aggregation for the participation charts
use std::collections::HashSet;

use super::error::StatisticsError;
use super::palette::Palette;
use super::series::YearSeries;
use super::statistics::{ColorAssignment, LegendItem, PercentageDatum, YearCountries};

/// Round to the nearest integer with halves going up.
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

/// Per-year share of the series total. Each year is rounded on its own, so the
/// values are not guaranteed to add up to 100.
pub fn compute_percentages(series: &YearSeries) -> Result<Vec<PercentageDatum>, StatisticsError> {
    let total = series.total();
    if total == 0 {
        return Err(StatisticsError::DivisionByZero {
            series: series.kind,
        });
    }

    Ok(series
        .counts
        .iter()
        .map(|c| {
            let percentage = round_half_up(c.count as f64 / total as f64 * 100.0);
            PercentageDatum::new(c.year.clone(), c.count, percentage)
        })
        .collect())
}

pub fn assign_colors<S: AsRef<str>>(year_labels: &[S], palette: &Palette) -> ColorAssignment {
    ColorAssignment::new(
        year_labels
            .iter()
            .map(|year| {
                let year = year.as_ref();
                (year.to_string(), palette.color_for(year).to_string())
            })
            .collect(),
    )
}

/// Legend entries in the order the labels were declared.
pub fn build_legend<S: AsRef<str>>(year_labels: &[S], colors: &ColorAssignment) -> Vec<LegendItem> {
    year_labels
        .iter()
        .filter_map(|year| {
            let year = year.as_ref();
            colors.get(year).map(|color| LegendItem {
                year: year.to_string(),
                color: color.to_string(),
            })
        })
        .collect()
}

pub fn merge_with_countries(series: &YearSeries) -> Result<Vec<YearCountries>, StatisticsError> {
    Ok(compute_percentages(series)?
        .into_iter()
        .map(|datum| YearCountries {
            countries: series.countries_for(&datum.year).to_vec(),
            year: datum.year,
            percentage: datum.percentage,
        })
        .collect())
}

pub fn validate_series(series: &YearSeries) -> Result<(), StatisticsError> {
    let mut seen = HashSet::new();
    for c in &series.counts {
        if !seen.insert(c.year.as_str()) {
            return Err(StatisticsError::DuplicateYear {
                series: series.kind,
                year: c.year.clone(),
            });
        }
    }

    // Sorted so the reported year does not depend on map iteration order
    let mut roster_years: Vec<&String> = series.countries.keys().collect();
    roster_years.sort();
    if let Some(year) = roster_years.into_iter().find(|y| !seen.contains(y.as_str())) {
        return Err(StatisticsError::UnknownRosterYear {
            series: series.kind,
            year: year.clone(),
        });
    }

    Ok(())
}

/// Both series feed one legend, so they must be keyed by the same years.
/// Declared order may differ; membership may not.
pub fn check_shared_years(a: &YearSeries, b: &YearSeries) -> Result<(), StatisticsError> {
    let a_years: HashSet<&str> = a.counts.iter().map(|c| c.year.as_str()).collect();
    let b_years: HashSet<&str> = b.counts.iter().map(|c| c.year.as_str()).collect();

    if let Some(c) = a.counts.iter().find(|c| !b_years.contains(c.year.as_str())) {
        return Err(StatisticsError::YearSetMismatch {
            missing_from: b.kind,
            year: c.year.clone(),
        });
    }
    if let Some(c) = b.counts.iter().find(|c| !a_years.contains(c.year.as_str())) {
        return Err(StatisticsError::YearSetMismatch {
            missing_from: a.kind,
            year: c.year.clone(),
        });
    }

    Ok(())
}
