use maturity_radar::assessment::report::chart_panels;
use maturity_radar::assessment::{
    AnswerSet, AssessmentReport, ChartRenderer, QuestionCatalog, RadarSeries, RawAnswers,
    ScoreReport,
};
use serde_json::json;

fn submit(section: &str, values: &[i64]) -> RawAnswers {
    let mut raw = RawAnswers::new();
    let entry = raw.entry(section.to_string()).or_default();
    for (index, value) in values.iter().enumerate() {
        entry.insert(index.to_string(), json!(value));
    }
    raw
}

fn score(raw: &RawAnswers) -> ScoreReport {
    let catalog = QuestionCatalog::standard();
    let answers = AnswerSet::from_raw(&catalog, raw);
    ScoreReport::from_answers(&catalog, &answers)
}

#[test]
fn perfect_section_scores_one_hundred_percent() {
    let report = score(&submit("LGPD", &[5, 5, 5, 5, 5, 5]));
    let lgpd = report.section("LGPD").expect("LGPD present");

    assert_eq!(lgpd.total, 30);
    assert_eq!(lgpd.max_score, 30);
    assert_eq!(lgpd.percentage, 100.0);
    assert_eq!(lgpd.normalized, vec![100.0; 6]);
}

#[test]
fn unanswered_submission_scores_zero_everywhere() {
    let report = score(&RawAnswers::new());

    for section in &report.sections {
        assert_eq!(section.total, 0);
        assert_eq!(section.percentage, 0.0);
    }
}

#[test]
fn mixed_answers_produce_exact_rounded_percentage() {
    let report = score(&submit("LGPD", &[0, 3, 5, 0, 3, 5]));
    let lgpd = report.section("LGPD").expect("LGPD present");

    assert_eq!(lgpd.total, 16);
    assert_eq!(lgpd.max_score, 30);
    assert_eq!(lgpd.percentage, 53.33);
    assert_eq!(lgpd.normalized, vec![0.0, 60.0, 100.0, 0.0, 60.0, 100.0]);
}

#[test]
fn percentages_stay_within_bounds_for_arbitrary_submissions() {
    let cases: [&[i64]; 4] = [
        &[0, 0, 0, 0, 0, 0],
        &[5, 0, 5, 0, 5, 0],
        &[3, 3, 3, 3, 3, 3],
        &[5, 5, 5, 5, 5, 5],
    ];

    for values in cases {
        let report = score(&submit("CIS Controls", values));
        let cis = report.section("CIS Controls").expect("CIS present");
        assert!((0.0..=100.0).contains(&cis.percentage));

        let expected =
            (cis.total as f64 / cis.max_score as f64 * 100.0 * 100.0).round() / 100.0;
        assert_eq!(cis.percentage, expected);
    }
}

#[test]
fn scoring_twice_yields_identical_reports() {
    let raw = submit("CIS Controls", &[3, 0, 5, 3, 0, 5]);
    assert_eq!(score(&raw), score(&raw));
}

#[test]
fn projection_length_and_closure_hold_for_every_section() {
    let report = score(&submit("LGPD", &[5, 3, 0, 5, 3, 0]));

    for section in &report.sections {
        let series = RadarSeries::project(&section.normalized);
        assert_eq!(series.points.len(), section.normalized.len() + 1);
        assert_eq!(series.points.first(), series.points.last());
    }
}

#[test]
fn full_pipeline_produces_an_embeddable_report() {
    let scores = score(&submit("LGPD", &[5, 5, 5, 5, 5, 5]));
    let report =
        AssessmentReport::assemble(&scores, &ChartRenderer).expect("pipeline completes");

    assert_eq!(report.scores.len(), 2);
    assert_eq!(report.scores[0].section, "LGPD");
    assert_eq!(report.scores[0].percentage, 100.0);
    assert_eq!(report.scores[1].section, "CIS Controls");
    assert_eq!(report.scores[1].percentage, 0.0);

    // The payload embeds a decodable PNG.
    use base64::Engine as _;
    let png = base64::engine::general_purpose::STANDARD
        .decode(&report.chart_png_base64)
        .expect("valid base64");
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn both_sections_always_get_a_chart_panel() {
    // Even a fully unanswered submission renders both panels; the empty
    // side degenerates to a spike instead of being omitted.
    let scores = score(&RawAnswers::new());
    let panels = chart_panels(&scores);

    assert_eq!(panels.len(), 2);
    let svg = ChartRenderer.render_svg(&panels);
    assert!(svg.contains(">LGPD</text>"));
    assert!(svg.contains(">CIS Controls</text>"));
}
