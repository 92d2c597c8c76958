// Repository trait for statistics data access
use crate::domain::palette::Palette;
use crate::domain::series::{SeriesKind, YearSeries};
use crate::domain::statistics::HighlightStat;

pub trait StatisticsRepository: Send + Sync {
    /// Yearly counts, declared total and country roster for one series
    fn load_series(&self, kind: SeriesKind) -> anyhow::Result<YearSeries>;

    /// Year color palette shared by every chart and the legend
    fn load_palette(&self) -> anyhow::Result<Palette>;

    /// Headline figures shown with reveal counters
    fn load_highlights(&self) -> anyhow::Result<Vec<HighlightStat>>;
}
