// Statistics repository backed by a loaded configuration
use crate::application::statistics_repository::StatisticsRepository;
use crate::domain::palette::Palette;
use crate::domain::series::{SeriesKind, YearCount, YearSeries};
use crate::domain::statistics::HighlightStat;
use crate::infrastructure::builtin::builtin_statistics;
use crate::infrastructure::config::StatisticsConfig;

#[derive(Debug, Clone)]
pub struct ConfigRepository {
    config: StatisticsConfig,
}

impl ConfigRepository {
    pub fn new(config: StatisticsConfig) -> Self {
        Self { config }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_statistics())
    }
}

impl StatisticsRepository for ConfigRepository {
    fn load_series(&self, kind: SeriesKind) -> anyhow::Result<YearSeries> {
        let config = self.config.series(kind);
        let counts = config
            .years
            .iter()
            .map(|y| YearCount::new(y.label.clone(), y.count))
            .collect();

        Ok(YearSeries::new(kind, counts, config.total, config.countries.clone()))
    }

    fn load_palette(&self) -> anyhow::Result<Palette> {
        if self.config.palette.is_empty() {
            tracing::debug!("No palette configured, using built-in colors");
            return Ok(Palette::builtin());
        }
        Ok(Palette::from_map(self.config.palette.clone()))
    }

    fn load_highlights(&self) -> anyhow::Result<Vec<HighlightStat>> {
        Ok(self
            .config
            .highlights
            .iter()
            .map(|h| HighlightStat::new(h.value.clone(), h.label.clone(), h.animated))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::statistics_service::StatisticsService;
    use crate::domain::error::StatisticsError;
    use crate::infrastructure::config::parse_statistics_config;
    use std::sync::Arc;

    #[test]
    fn test_builtin_palette_matches_constant() {
        let repo = ConfigRepository::builtin();
        assert_eq!(repo.load_palette().unwrap(), Palette::builtin());
    }

    #[test]
    fn test_outgoing_2017_18_end_to_end() {
        let service = StatisticsService::new(Arc::new(ConfigRepository::builtin()));
        let view = service.build_view().unwrap();
        let outgoing = view.chart(SeriesKind::Outgoing).unwrap();

        let datum = &outgoing.percentages[3];
        assert_eq!(datum.year, "2017-18");
        assert_eq!(datum.count, 17);
        assert_eq!(outgoing.total, 89);
        assert_eq!(datum.percentage, 19);

        let panel = &outgoing.panels[3];
        assert_eq!(panel.year, "2017-18");
        assert_eq!(panel.percentage, 19);
        assert_eq!(
            panel.countries,
            vec!["Poland", "Vietnam", "Kazakhstan", "Turkey", "Portugal"]
        );
        assert_eq!(outgoing.colors[3], "#FF8C42");
    }

    #[test]
    fn test_builtin_view_shape() {
        let service = StatisticsService::new(Arc::new(ConfigRepository::builtin()));
        let view = service.build_view().unwrap();

        let incoming = view.chart(SeriesKind::Incoming).unwrap();
        assert_eq!(incoming.values(), vec![9, 6, 19, 22, 16, 2, 2, 2, 1, 7, 16]);
        assert_eq!(view.legend.len(), 11);
        assert_eq!(view.legend[2].year, "2016-17");
        assert_eq!(view.legend[2].color, "#FFE66D");
        assert_eq!(incoming.colors[2], "#FFE66D");
        assert_eq!(view.highlights.len(), 4);
    }

    #[test]
    fn test_configured_series_without_palette() {
        let config = parse_statistics_config(
            r#"
            [outgoing]
            years = [{ label = "2030-31", count = 1 }, { label = "2031-32", count = 3 }]

            [incoming]
            years = [{ label = "2031-32", count = 2 }, { label = "2030-31", count = 2 }]
            "#,
        )
        .unwrap();
        let repo = ConfigRepository::new(config);

        let series = repo.load_series(SeriesKind::Outgoing).unwrap();
        assert_eq!(series.total(), 4);
        assert!(series.countries_for("2030-31").is_empty());
        assert_eq!(repo.load_palette().unwrap(), Palette::builtin());
        assert!(repo.load_highlights().unwrap().is_empty());

        let view = StatisticsService::new(Arc::new(repo)).build_view().unwrap();
        let outgoing = view.chart(SeriesKind::Outgoing).unwrap();
        assert_eq!(outgoing.values(), vec![25, 75]);
        assert!(outgoing.panels.iter().all(|p| p.countries.is_empty()));

        // shared legend follows the outgoing declaration order
        let legend: Vec<&str> = view.legend.iter().map(|l| l.year.as_str()).collect();
        assert_eq!(legend, vec!["2030-31", "2031-32"]);
        let incoming = view.chart(SeriesKind::Incoming).unwrap();
        assert_eq!(incoming.labels(), vec!["2031-32", "2030-31"]);
    }

    #[test]
    fn test_configured_year_sets_must_match() {
        let config = parse_statistics_config(
            r#"
            [outgoing]
            years = [{ label = "2014-15", count = 1 }]

            [incoming]
            years = [{ label = "2014-15", count = 2 }, { label = "2015-16", count = 1 }]
            "#,
        )
        .unwrap();

        let err = StatisticsService::new(Arc::new(ConfigRepository::new(config)))
            .build_view()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatisticsError>(),
            Some(&StatisticsError::YearSetMismatch {
                missing_from: SeriesKind::Outgoing,
                year: "2015-16".to_string()
            })
        );
    }

    #[test]
    fn test_configured_roster_year_needs_count() {
        let config = parse_statistics_config(
            r#"
            [outgoing]
            years = [{ label = "2014-15", count = 1 }]

            [outgoing.countries]
            "2041-42" = ["Oman"]

            [incoming]
            years = [{ label = "2014-15", count = 2 }]
            "#,
        )
        .unwrap();

        let err = StatisticsService::new(Arc::new(ConfigRepository::new(config)))
            .build_view()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatisticsError>(),
            Some(&StatisticsError::UnknownRosterYear {
                series: SeriesKind::Outgoing,
                year: "2041-42".to_string()
            })
        );
    }
}
