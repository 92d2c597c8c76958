// Compiled-in participation dataset
use crate::domain::palette::BUILTIN_PALETTE;
use crate::infrastructure::config::{HighlightConfig, SeriesConfig, StatisticsConfig, YearConfig};

const YEARS: [&str; 11] = [
    "2014-15", "2015-16", "2016-17", "2017-18", "2018-19", "2019-20", "2020-21", "2021-22",
    "2022-23", "2023-24", "2024-25",
];

// 2013-14 (2 outgoing) predates the charts and is left out of the total.
const OUTGOING_COUNTS: [u64; 11] = [9, 2, 15, 17, 12, 1, 2, 6, 4, 8, 13];
const OUTGOING_TOTAL: u64 = 89;

const INCOMING_COUNTS: [u64; 11] = [11, 8, 24, 28, 21, 3, 2, 2, 1, 9, 20];
const INCOMING_TOTAL: u64 = 129;

const OUTGOING_COUNTRIES: [&[&str]; 11] = [
    &["Iran", "Lebanon", "Oman"],
    &["Germany", "Iran"],
    &["Germany", "Nepal", "Kenya", "Poland", "Belgium", "Czech Republic"],
    &["Poland", "Vietnam", "Kazakhstan", "Turkey", "Portugal"],
    &["Nepal", "Germany", "Thailand", "Brazil", "Poland", "Turkey"],
    &["Turkey"],
    &["Bangladesh"],
    &["Saudi Arabia"],
    &["Various"],
    &["UAE", "Tanzania", "Iran", "Kenya", "Canada", "Oman"],
    &["Vietnam", "Iran", "Tanzania", "Brazil", "Oman", "Kazakhstan", "Ghana"],
];

const INCOMING_COUNTRIES: [&[&str]; 11] = [
    &["Germany", "Argentina", "Tunisia", "Turkey", "Croatia", "Oman", "Thailand"],
    &["USA", "Croatia", "Belarus", "Norway", "Hungary", "Germany"],
    &[
        "UK",
        "Spain",
        "Indonesia",
        "Greece",
        "Kenya",
        "Czech Republic",
        "Vietnam",
        "Saudi Arabia",
        "Poland",
        "Belgium",
        "Thailand",
        "Slovak Republic",
        "Colombia",
    ],
    &[
        "Germany",
        "Tunisia",
        "Nepal",
        "Norway",
        "Oman",
        "Indonesia",
        "Nigeria",
        "Poland",
        "Turkey",
        "Slovakia",
        "Belarus",
        "Austria",
        "Belgium",
        "Vietnam",
        "Ireland",
        "Hungary",
    ],
    &[
        "Spain",
        "Argentina",
        "Brazil",
        "Czech Republic",
        "Iran",
        "Poland",
        "Tunisia",
        "Thailand",
        "Colombia",
        "Germany",
        "UK",
        "Serbia",
        "Turkey",
    ],
    &["Bolivia", "Colombia", "Peru"],
    &["Bangladesh", "Yemen"],
    &["Vietnam", "Ghana"],
    &["Iran"],
    &["Tunisia", "Ghana", "Tanzania", "Iran", "Palestine", "Belarus"],
    &[
        "Mexico",
        "Canada",
        "Austria",
        "Norway",
        "Czech Republic",
        "Palestine",
        "Tunisia",
        "Jordan",
        "Spain",
        "Iran",
        "Bangladesh",
    ],
];

const HIGHLIGHTS: [(&str, &str, bool); 4] = [
    ("25+", "Countries Connected", true),
    ("100+", "Students Transformed", true),
    ("50+", "Experiences Created", true),
    ("∞", "Growth Potential", false),
];

fn series(counts: [u64; 11], total: u64, countries: [&[&str]; 11]) -> SeriesConfig {
    SeriesConfig {
        total: Some(total),
        years: YEARS
            .iter()
            .zip(counts)
            .map(|(label, count)| YearConfig {
                label: label.to_string(),
                count,
            })
            .collect(),
        countries: YEARS
            .iter()
            .zip(countries)
            .map(|(label, names)| {
                (
                    label.to_string(),
                    names.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect(),
    }
}

pub fn builtin_statistics() -> StatisticsConfig {
    StatisticsConfig {
        outgoing: series(OUTGOING_COUNTS, OUTGOING_TOTAL, OUTGOING_COUNTRIES),
        incoming: series(INCOMING_COUNTS, INCOMING_TOTAL, INCOMING_COUNTRIES),
        palette: BUILTIN_PALETTE
            .iter()
            .map(|(year, color)| (year.to_string(), color.to_string()))
            .collect(),
        highlights: HIGHLIGHTS
            .iter()
            .map(|(value, label, animated)| HighlightConfig {
                value: value.to_string(),
                label: label.to_string(),
                animated: *animated,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_totals_match_counts() {
        let stats = builtin_statistics();
        for (series, total) in [(&stats.outgoing, 89), (&stats.incoming, 129)] {
            assert_eq!(series.total, Some(total));
            assert_eq!(series.years.iter().map(|y| y.count).sum::<u64>(), total);
            assert_eq!(series.years.len(), 11);
        }
    }

    #[test]
    fn test_every_year_has_a_roster() {
        let stats = builtin_statistics();
        for series in [&stats.outgoing, &stats.incoming] {
            for year in &series.years {
                assert!(!series.countries[&year.label].is_empty(), "{}", year.label);
            }
        }
        assert_eq!(stats.outgoing.countries["2022-23"], vec!["Various"]);
    }

    #[test]
    fn test_only_numeric_highlights_are_animated() {
        let stats = builtin_statistics();
        for h in &stats.highlights {
            assert_eq!(h.animated, h.value.chars().any(|c| c.is_ascii_digit()));
        }
    }
}
