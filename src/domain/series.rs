// Participation series domain model
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Outgoing,
    Incoming,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Outgoing, SeriesKind::Incoming];

    pub fn id(self) -> &'static str {
        match self {
            SeriesKind::Outgoing => "outgoing",
            SeriesKind::Incoming => "incoming",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SeriesKind::Outgoing => "Outgoing",
            SeriesKind::Incoming => "Incoming",
        }
    }

    /// Path of the testimonials page linked from the chart card.
    pub fn testimonials_path(self) -> String {
        format!("/testimonials/{}", self.id())
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCount {
    pub year: String,
    pub count: u64,
}

impl YearCount {
    pub fn new(year: impl Into<String>, count: u64) -> Self {
        Self {
            year: year.into(),
            count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct YearSeries {
    pub kind: SeriesKind,
    pub counts: Vec<YearCount>,
    pub declared_total: Option<u64>,
    pub countries: HashMap<String, Vec<String>>,
}

impl YearSeries {
    pub fn new(
        kind: SeriesKind,
        counts: Vec<YearCount>,
        declared_total: Option<u64>,
        countries: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            kind,
            counts,
            declared_total,
            countries,
        }
    }

    /// Sum of the displayed yearly counts.
    pub fn counted_total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Denominator used for percentages. A declared total is trusted as given,
    /// even when it covers years that are not displayed.
    pub fn total(&self) -> u64 {
        self.declared_total.unwrap_or_else(|| self.counted_total())
    }

    pub fn year_labels(&self) -> Vec<String> {
        self.counts.iter().map(|c| c.year.clone()).collect()
    }

    pub fn countries_for(&self, year: &str) -> &[String] {
        self.countries.get(year).map(Vec::as_slice).unwrap_or(&[])
    }
}
