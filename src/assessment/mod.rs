pub mod answers;
pub mod catalog;
pub mod chart;
pub mod radar;
pub mod report;
pub mod scoring;

pub use answers::{AnswerKey, AnswerSet, RawAnswers};
pub use catalog::{AnswerOption, Question, QuestionCatalog, Section};
pub use chart::{ChartError, ChartRenderer, ChartSeries};
pub use radar::{RadarPoint, RadarSeries};
pub use report::{AssessmentReport, SectionScoreView};
pub use scoring::{ScoreReport, SectionScore};
