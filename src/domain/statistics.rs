// Statistics view domain models
use super::series::SeriesKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageDatum {
    pub year: String,
    pub count: u64,
    pub percentage: u32,
}

impl PercentageDatum {
    pub fn new(year: String, count: u64, percentage: u32) -> Self {
        Self {
            year,
            count,
            percentage,
        }
    }
}

/// Ordered year-label to color mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorAssignment {
    entries: Vec<(String, String)>,
}

impl ColorAssignment {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, year: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(label, _)| label == year)
            .map(|(_, color)| color.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub year: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCountries {
    pub year: String,
    pub percentage: u32,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DoughnutChart {
    pub kind: SeriesKind,
    pub total: u64,
    pub percentages: Vec<PercentageDatum>,
    pub colors: Vec<String>,
    pub panels: Vec<YearCountries>,
}

impl DoughnutChart {
    pub fn labels(&self) -> Vec<&str> {
        self.percentages.iter().map(|p| p.year.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.percentages.iter().map(|p| p.percentage).collect()
    }
}

/// Headline figure shown on the benefits page. Only animated stats get a
/// reveal counter, so their values must contain digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStat {
    pub value: String,
    pub label: String,
    pub animated: bool,
}

impl HighlightStat {
    pub fn new(value: impl Into<String>, label: impl Into<String>, animated: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            animated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatisticsView {
    pub title: String,
    pub subtitle: String,
    pub charts: Vec<DoughnutChart>,
    pub legend: Vec<LegendItem>,
    pub highlights: Vec<HighlightStat>,
}

impl StatisticsView {
    pub fn chart(&self, kind: SeriesKind) -> Option<&DoughnutChart> {
        self.charts.iter().find(|c| c.kind == kind)
    }
}
