// Statistics service - Use case for building the participation charts
use crate::application::statistics_repository::StatisticsRepository;
use crate::domain::aggregation::{
    assign_colors, build_legend, check_shared_years, compute_percentages, merge_with_countries,
    validate_series,
};
use crate::domain::palette::Palette;
use crate::domain::series::{SeriesKind, YearSeries};
use crate::domain::statistics::{DoughnutChart, StatisticsView};
use anyhow::Context;
use std::sync::Arc;

const TITLE: &str = "Statistics";
const SUBTITLE: &str = "Our exchange program participation over the years";

#[derive(Clone)]
pub struct StatisticsService {
    repository: Arc<dyn StatisticsRepository>,
}

impl StatisticsService {
    pub fn new(repository: Arc<dyn StatisticsRepository>) -> Self {
        Self { repository }
    }

    /// Build both charts, the shared legend and the highlight figures. Any
    /// aggregation error fails the whole view so no partial chart is rendered.
    pub fn build_view(&self) -> anyhow::Result<StatisticsView> {
        let palette = self.repository.load_palette()?;

        let outgoing = self.load_series(SeriesKind::Outgoing)?;
        let incoming = self.load_series(SeriesKind::Incoming)?;
        check_shared_years(&outgoing, &incoming)?;

        let charts = vec![
            self.build_chart(&outgoing, &palette)?,
            self.build_chart(&incoming, &palette)?,
        ];

        // Year sets match, so the legend follows the first chart's order.
        let legend_years: Vec<&str> = charts
            .first()
            .map(|c| c.labels())
            .unwrap_or_default();
        let legend = build_legend(&legend_years, &assign_colors(&legend_years, &palette));

        let highlights = self.repository.load_highlights()?;

        tracing::info!(
            "Built statistics view: {} charts, {} legend entries, {} highlights",
            charts.len(),
            legend.len(),
            highlights.len()
        );

        Ok(StatisticsView {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            charts,
            legend,
            highlights,
        })
    }

    fn load_series(&self, kind: SeriesKind) -> anyhow::Result<YearSeries> {
        let series = self
            .repository
            .load_series(kind)
            .with_context(|| format!("loading {kind} series"))?;
        validate_series(&series)?;
        Ok(series)
    }

    fn build_chart(&self, series: &YearSeries, palette: &Palette) -> anyhow::Result<DoughnutChart> {
        let total = series.total();
        let percentages = compute_percentages(series)?;
        let year_labels = series.year_labels();
        let assignment = assign_colors(&year_labels, palette);
        let colors = year_labels
            .iter()
            .map(|year| assignment.get(year).unwrap_or_default().to_string())
            .collect();
        let panels = merge_with_countries(series)?;

        tracing::debug!(
            "Chart {}: total {}, percentage sum {}",
            series.kind,
            total,
            percentages.iter().map(|p| p.percentage).sum::<u32>()
        );

        Ok(DoughnutChart {
            kind: series.kind,
            total,
            percentages,
            colors,
            panels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StatisticsError;
    use crate::domain::series::YearCount;
    use crate::domain::statistics::HighlightStat;
    use std::collections::HashMap;

    struct FixedRepository {
        incoming_total: Option<u64>,
        incoming_extra_year: bool,
    }

    impl StatisticsRepository for FixedRepository {
        fn load_series(&self, kind: SeriesKind) -> anyhow::Result<YearSeries> {
            let (counts, total) = match kind {
                SeriesKind::Outgoing => (vec![("2016-17", 15), ("2017-18", 17)], Some(32)),
                SeriesKind::Incoming => {
                    let mut counts = vec![("2016-17", 24), ("2017-18", 28)];
                    if self.incoming_extra_year {
                        counts.push(("2018-19", 21));
                    }
                    (counts, self.incoming_total)
                }
            };
            Ok(YearSeries::new(
                kind,
                counts
                    .into_iter()
                    .map(|(year, count)| YearCount::new(year, count))
                    .collect(),
                total,
                HashMap::from([("2016-17".to_string(), vec!["Kenya".to_string()])]),
            ))
        }

        fn load_palette(&self) -> anyhow::Result<Palette> {
            Ok(Palette::builtin())
        }

        fn load_highlights(&self) -> anyhow::Result<Vec<HighlightStat>> {
            Ok(vec![HighlightStat::new("25+", "Countries Connected", true)])
        }
    }

    fn service(incoming_total: Option<u64>) -> StatisticsService {
        StatisticsService::new(Arc::new(FixedRepository {
            incoming_total,
            incoming_extra_year: false,
        }))
    }

    #[test]
    fn test_build_view() {
        let view = service(None).build_view().unwrap();
        assert_eq!(view.title, "Statistics");
        assert_eq!(view.charts.len(), 2);
        assert_eq!(view.highlights.len(), 1);

        let outgoing = view.chart(SeriesKind::Outgoing).unwrap();
        assert_eq!(outgoing.values(), vec![47, 53]);
        assert_eq!(outgoing.colors, vec!["#FFE66D", "#FF8C42"]);
        assert_eq!(outgoing.panels[0].countries, vec!["Kenya"]);
        assert!(outgoing.panels[1].countries.is_empty());

        let incoming = view.chart(SeriesKind::Incoming).unwrap();
        assert_eq!(incoming.total, 52);
        assert_eq!(incoming.colors, outgoing.colors);
    }

    #[test]
    fn test_legend_matches_chart_colors() {
        let view = service(None).build_view().unwrap();
        let years: Vec<&str> = view.legend.iter().map(|l| l.year.as_str()).collect();
        assert_eq!(years, vec!["2016-17", "2017-18"]);
        assert_eq!(view.legend[0].color, view.charts[1].colors[0]);
    }

    #[test]
    fn test_zero_total_fails_whole_view() {
        let err = service(Some(0)).build_view().unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatisticsError>(),
            Some(&StatisticsError::DivisionByZero {
                series: SeriesKind::Incoming
            })
        );
    }

    #[test]
    fn test_mismatched_year_sets_fail_view() {
        let service = StatisticsService::new(Arc::new(FixedRepository {
            incoming_total: None,
            incoming_extra_year: true,
        }));
        let err = service.build_view().unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatisticsError>(),
            Some(&StatisticsError::YearSetMismatch {
                missing_from: SeriesKind::Outgoing,
                year: "2018-19".to_string()
            })
        );
    }
}
