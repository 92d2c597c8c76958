// Year color palette shared by every series chart and the legend
use std::collections::HashMap;

pub const BUILTIN_PALETTE: [(&str, &str); 11] = [
    ("2014-15", "#FF6B9D"),
    ("2015-16", "#4ECDC4"),
    ("2016-17", "#FFE66D"),
    ("2017-18", "#FF8C42"),
    ("2018-19", "#95E1D3"),
    ("2019-20", "#C7CEEA"),
    ("2020-21", "#A8E6CF"),
    ("2021-22", "#FFD3A5"),
    ("2022-23", "#CAB8FF"),
    ("2023-24", "#FFAAA5"),
    ("2024-25", "#B8E6B8"),
];

/// Used only when a palette has no entries at all.
pub const NEUTRAL_COLOR: &str = "#CCCCCC";

/// Immutable year-label to color table. Entries are kept in chronological
/// order so labels missing from the table can be placed deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_PALETTE
                .iter()
                .map(|(year, color)| (year.to_string(), color.to_string()))
                .collect(),
        )
    }

    /// Build from an unordered map, sorting by label. `YYYY-YY` labels sort
    /// chronologically.
    pub fn from_map(map: HashMap<String, String>) -> Self {
        let mut entries: Vec<(String, String)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn color_for(&self, year: &str) -> &str {
        self.entries
            .iter()
            .find(|(label, _)| label == year)
            .map(|(_, color)| color.as_str())
            .unwrap_or_else(|| self.fallback_color(year))
    }

    // Unknown labels cycle through the palette by academic start year, so
    // 2025-26 continues after 2024-25. Non-year labels hash by byte sum.
    fn fallback_color(&self, year: &str) -> &str {
        if self.entries.is_empty() {
            return NEUTRAL_COLOR;
        }

        let len = self.entries.len() as i64;
        let index = match (start_year(year), start_year(&self.entries[0].0)) {
            (Some(start), Some(first)) => (start - first).rem_euclid(len),
            _ => year.bytes().map(i64::from).sum::<i64>().rem_euclid(len),
        };

        &self.entries[index as usize].1
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

fn start_year(label: &str) -> Option<i64> {
    let prefix = label.get(..4)?;
    if prefix.bytes().all(|b| b.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}
