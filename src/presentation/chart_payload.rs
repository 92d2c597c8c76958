// Mapper from the statistics view to doughnut chart payloads
use crate::domain::statistics::{DoughnutChart, HighlightStat, LegendItem, StatisticsView, YearCountries};
use serde::Serialize;

const BORDER_COLOR: &str = "#ffffff";
const BORDER_WIDTH: u32 = 3;
const HOVER_BORDER_WIDTH: u32 = 4;
const CUTOUT: &str = "60%";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsPayload {
    pub title: String,
    pub subtitle: String,
    pub charts: Vec<ChartPayload>,
    pub legend: Vec<LegendPayload>,
    pub highlights: Vec<HighlightPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub id: String,
    pub title: String,
    pub link: String,
    pub data: DoughnutData,
    pub cutout: &'static str,
    pub data_labels: Vec<String>,
    pub tooltips: Vec<String>,
    pub countries: Vec<CountryPanel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoughnutData {
    pub labels: Vec<String>,
    pub datasets: Vec<DoughnutDataset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoughnutDataset {
    pub data: Vec<u32>,
    pub background_color: Vec<String>,
    pub border_color: &'static str,
    pub border_width: u32,
    pub hover_border_width: u32,
}

#[derive(Debug, Serialize)]
pub struct CountryPanel {
    pub year: String,
    pub percentage: u32,
    pub countries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LegendPayload {
    pub year: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct HighlightPayload {
    pub value: String,
    pub label: String,
    pub animated: bool,
}

pub fn view_to_payload(view: &StatisticsView) -> StatisticsPayload {
    StatisticsPayload {
        title: view.title.clone(),
        subtitle: view.subtitle.clone(),
        charts: view.charts.iter().map(chart_to_payload).collect(),
        legend: view.legend.iter().map(legend_to_payload).collect(),
        highlights: view.highlights.iter().map(highlight_to_payload).collect(),
    }
}

pub fn tooltip_label(year: &str, percentage: u32) -> String {
    format!("{year}: {percentage}%")
}

pub fn data_label(percentage: u32) -> String {
    format!("{percentage}%")
}

fn chart_to_payload(chart: &DoughnutChart) -> ChartPayload {
    let values = chart.values();

    ChartPayload {
        id: chart.kind.id().to_string(),
        title: chart.kind.title().to_string(),
        link: chart.kind.testimonials_path(),
        data: DoughnutData {
            labels: chart.labels().into_iter().map(String::from).collect(),
            datasets: vec![DoughnutDataset {
                data: values.clone(),
                background_color: chart.colors.clone(),
                border_color: BORDER_COLOR,
                border_width: BORDER_WIDTH,
                hover_border_width: HOVER_BORDER_WIDTH,
            }],
        },
        cutout: CUTOUT,
        data_labels: values.iter().map(|v| data_label(*v)).collect(),
        tooltips: chart
            .percentages
            .iter()
            .map(|p| tooltip_label(&p.year, p.percentage))
            .collect(),
        countries: chart.panels.iter().map(panel_to_payload).collect(),
    }
}

fn panel_to_payload(panel: &YearCountries) -> CountryPanel {
    CountryPanel {
        year: panel.year.clone(),
        percentage: panel.percentage,
        countries: panel.countries.clone(),
    }
}

fn legend_to_payload(item: &LegendItem) -> LegendPayload {
    LegendPayload {
        year: item.year.clone(),
        color: item.color.clone(),
    }
}

fn highlight_to_payload(stat: &HighlightStat) -> HighlightPayload {
    HighlightPayload {
        value: stat.value.clone(),
        label: stat.label.clone(),
        animated: stat.animated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::statistics_service::StatisticsService;
    use crate::infrastructure::config_repository::ConfigRepository;
    use std::sync::Arc;

    fn payload() -> StatisticsPayload {
        let view = StatisticsService::new(Arc::new(ConfigRepository::builtin()))
            .build_view()
            .unwrap();
        view_to_payload(&view)
    }

    #[test]
    fn test_labels() {
        assert_eq!(tooltip_label("2014-15", 10), "2014-15: 10%");
        assert_eq!(data_label(19), "19%");
    }

    #[test]
    fn test_chart_payload() {
        let payload = payload();
        let outgoing = &payload.charts[0];
        assert_eq!(outgoing.id, "outgoing");
        assert_eq!(outgoing.link, "/testimonials/outgoing");
        assert_eq!(outgoing.data.labels.len(), 11);
        assert_eq!(outgoing.data.datasets[0].data[0], 10);
        assert_eq!(outgoing.data_labels[3], "19%");
        assert_eq!(outgoing.tooltips[3], "2017-18: 19%");
        assert_eq!(outgoing.countries[3].countries.len(), 5);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(payload()).unwrap();
        let dataset = &json["charts"][1]["data"]["datasets"][0];

        assert_eq!(json["title"], "Statistics");
        assert_eq!(json["charts"][1]["title"], "Incoming");
        assert_eq!(dataset["backgroundColor"][2], "#FFE66D");
        assert_eq!(dataset["borderColor"], "#ffffff");
        assert_eq!(dataset["borderWidth"], 3);
        assert_eq!(dataset["hoverBorderWidth"], 4);
        assert_eq!(json["charts"][1]["cutout"], "60%");
        assert_eq!(json["legend"][2]["color"], "#FFE66D");
        assert_eq!(json["highlights"][3]["animated"], false);
    }
}
