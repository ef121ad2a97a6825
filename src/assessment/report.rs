use super::chart::{ChartError, ChartRenderer, ChartSeries, SERIES_PALETTE};
use super::radar::RadarSeries;
use super::scoring::{ScoreReport, SectionScore};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One section's scores as exposed at the boundary.
#[derive(Debug, Clone, Serialize)]
pub struct SectionScoreView {
    pub section: String,
    pub total: i64,
    pub max_score: i64,
    pub percentage: f64,
    pub answers: Vec<i64>,
}

impl SectionScore {
    pub fn to_view(&self) -> SectionScoreView {
        SectionScoreView {
            section: self.name.clone(),
            total: self.total,
            max_score: self.max_score,
            percentage: self.percentage,
            answers: self.answers.clone(),
        }
    }
}

/// The full response payload: per-section scores in catalog order plus the
/// rendered comparison chart, base64-encoded for embedding.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub scores: Vec<SectionScoreView>,
    pub chart_png_base64: String,
}

impl AssessmentReport {
    /// Compose scores and chart into one payload. Rendering failure fails
    /// the whole report; no degraded chart is produced.
    pub fn assemble(
        scores: &ScoreReport,
        renderer: &ChartRenderer,
    ) -> Result<Self, ChartError> {
        let panels = chart_panels(scores);
        let chart_png_base64 = renderer.render_base64_png(&panels)?;

        Ok(Self {
            generated_at: Utc::now(),
            scores: scores.sections.iter().map(SectionScore::to_view).collect(),
            chart_png_base64,
        })
    }
}

/// One panel per section, colors cycling through the palette. Empty
/// sections keep their panel; the projector's fallback makes them render
/// as a degenerate spike rather than dropping the subplot.
pub fn chart_panels(scores: &ScoreReport) -> Vec<ChartSeries> {
    scores
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| ChartSeries {
            title: section.name.clone(),
            color: SERIES_PALETTE[index % SERIES_PALETTE.len()].to_string(),
            series: RadarSeries::project(&section.normalized),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::answers::{AnswerSet, RawAnswers};
    use crate::assessment::catalog::QuestionCatalog;

    fn sample_scores() -> ScoreReport {
        let catalog = QuestionCatalog::standard();
        let mut raw = RawAnswers::new();
        let lgpd = raw.entry("LGPD".to_string()).or_default();
        for index in 0..6 {
            lgpd.insert(index.to_string(), serde_json::json!(5));
        }
        let answers = AnswerSet::from_raw(&catalog, &raw);
        ScoreReport::from_answers(&catalog, &answers)
    }

    #[test]
    fn panels_follow_catalog_order_with_distinct_colors() {
        let panels = chart_panels(&sample_scores());
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].title, "LGPD");
        assert_eq!(panels[1].title, "CIS Controls");
        assert_ne!(panels[0].color, panels[1].color);
        assert_eq!(panels[0].series.axis_count(), 6);
    }

    #[test]
    fn assembled_report_carries_scores_and_chart() {
        let report = AssessmentReport::assemble(&sample_scores(), &ChartRenderer)
            .expect("report assembles");
        assert_eq!(report.scores.len(), 2);
        assert_eq!(report.scores[0].section, "LGPD");
        assert_eq!(report.scores[0].total, 30);
        assert_eq!(report.scores[0].percentage, 100.0);
        assert!(!report.chart_png_base64.is_empty());
    }

    #[test]
    fn payload_serializes_with_expected_shape() {
        let report = AssessmentReport::assemble(&sample_scores(), &ChartRenderer)
            .expect("report assembles");
        let value = serde_json::to_value(&report).expect("serializes");
        assert!(value.get("generated_at").is_some());
        assert!(value.get("chart_png_base64").is_some());
        let scores = value["scores"].as_array().expect("scores array");
        assert_eq!(scores[0]["section"], "LGPD");
        assert_eq!(scores[0]["answers"].as_array().map(Vec::len), Some(6));
    }
}
