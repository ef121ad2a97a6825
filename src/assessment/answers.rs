use super::catalog::QuestionCatalog;
use serde_json::Value;
use std::collections::HashMap;

/// Raw submission shape from the boundary: section name -> question index
/// (as text, the way form fields arrive) -> whatever the client sent.
pub type RawAnswers = HashMap<String, HashMap<String, Value>>;

/// Identifies one answered question. Kept as an explicit typed key rather
/// than a concatenated field name so section renames or count changes
/// cannot silently collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerKey {
    pub section: String,
    pub index: usize,
}

/// Per-request answer bindings. Missing or unparseable submissions are
/// treated as 0; this layer never rejects input.
#[derive(Debug, Default)]
pub struct AnswerSet {
    values: HashMap<AnswerKey, i64>,
}

impl AnswerSet {
    /// Bind a raw submission against the catalog. Only `(section, index)`
    /// pairs the catalog defines are retained; anything else is ignored.
    pub fn from_raw(catalog: &QuestionCatalog, raw: &RawAnswers) -> Self {
        let mut values = HashMap::new();

        for section in catalog.sections() {
            let submitted = raw.get(section.name);
            for index in 0..section.questions.len() {
                let value = submitted
                    .and_then(|answers| answers.get(&index.to_string()))
                    .and_then(coerce_value)
                    .unwrap_or(0);
                values.insert(
                    AnswerKey {
                        section: section.name.to_string(),
                        index,
                    },
                    value,
                );
            }
        }

        Self { values }
    }

    pub fn value(&self, section: &str, index: usize) -> i64 {
        self.values
            .get(&AnswerKey {
                section: section.to_string(),
                index,
            })
            .copied()
            .unwrap_or(0)
    }

    /// Answers for one section in question order.
    pub fn section_values(&self, catalog: &QuestionCatalog, section: &str) -> Vec<i64> {
        let count = catalog.question_count(section).unwrap_or(0);
        (0..count).map(|index| self.value(section, index)).collect()
    }
}

fn coerce_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
