use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;

/// Fixed per-question ceiling. Normalization divides by this constant, not
/// by whatever the option set happens to contain.
const QUESTION_CEILING: i64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionScore {
    pub name: String,
    pub total: i64,
    pub max_score: i64,
    pub percentage: f64,
    /// Submitted values in question order.
    pub answers: Vec<i64>,
    /// Each answer mapped from the 0-5 scale onto 0-100 for plotting.
    pub normalized: Vec<f64>,
}

/// Per-section totals and percentages for one submission. A pure function
/// of the answer set; section order follows the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub sections: Vec<SectionScore>,
}

impl ScoreReport {
    pub fn from_answers(catalog: &QuestionCatalog, answers: &AnswerSet) -> Self {
        let sections = catalog
            .sections()
            .iter()
            .map(|section| {
                let values = answers.section_values(catalog, section.name);
                score_section(section.name, &values)
            })
            .collect();

        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&SectionScore> {
        self.sections.iter().find(|score| score.name == name)
    }
}

fn score_section(name: &str, values: &[i64]) -> SectionScore {
    let total: i64 = values.iter().sum();
    // max_score of 1 keeps a zero-question section from dividing by zero.
    let max_score = if values.is_empty() {
        1
    } else {
        values.len() as i64 * QUESTION_CEILING
    };
    let percentage = round2(total as f64 / max_score as f64 * 100.0);
    let normalized = values
        .iter()
        .map(|&value| value as f64 / QUESTION_CEILING as f64 * 100.0)
        .collect();

    SectionScore {
        name: name.to_string(),
        total,
        max_score,
        percentage,
        answers: values.to_vec(),
        normalized,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
