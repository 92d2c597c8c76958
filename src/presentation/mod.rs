// Presentation layer - Shapes consumed by the chart renderer
pub mod chart_payload;
