use serde::Serialize;

/// A selectable answer for a question. Values are discrete and ascending;
/// the questionnaire uses {0, 3, 5} throughout.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub value: i64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Highest selectable value, the per-question ceiling.
    pub fn ceiling(&self) -> i64 {
        self.options.last().map(|option| option.value).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub questions: Vec<Question>,
}

/// The fixed questionnaire. Built once at process start and shared
/// read-only; answer binding is positional, so question order matters.
#[derive(Debug)]
pub struct QuestionCatalog {
    sections: Vec<Section>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            sections: standard_sections(),
        }
    }

    /// Sections in insertion order, which is also display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn question_count(&self, name: &str) -> Option<usize> {
        self.section(name).map(|section| section.questions.len())
    }
}

fn options(none: &'static str, partial: &'static str, full: &'static str) -> Vec<AnswerOption> {
    vec![
        AnswerOption { value: 0, label: none },
        AnswerOption { value: 3, label: partial },
        AnswerOption { value: 5, label: full },
    ]
}

fn standard_sections() -> Vec<Section> {
    vec![
        Section {
            name: "LGPD",
            questions: vec![
                Question {
                    text: "Does the firm have a formally designated data protection officer (DPO)?",
                    options: options(
                        "No responsible person has been designated.",
                        "A responsible person exists but with few defined duties.",
                        "A DPO is designated with clear, active responsibilities.",
                    ),
                },
                Question {
                    text: "Are privacy and data protection policies formalized and kept current?",
                    options: options(
                        "No documented policies exist.",
                        "Basic policies exist but are rarely updated.",
                        "Complete policies, reviewed on a regular cadence.",
                    ),
                },
                Question {
                    text: "Are personal data collection, use, and storage processes mapped and controlled?",
                    options: options(
                        "No mapping or clear controls.",
                        "Partial mapping with ad hoc controls.",
                        "Full mapping with rigorous controls in place.",
                    ),
                },
                Question {
                    text: "Does staff receive periodic training on LGPD and personal data handling?",
                    options: options(
                        "No training is held.",
                        "Training happens infrequently.",
                        "Regular, up-to-date training program.",
                    ),
                },
                Question {
                    text: "Are there processes to honor data subject rights (access, correction, deletion)?",
                    options: options(
                        "No defined processes.",
                        "Processes defined but loosely structured.",
                        "Formalized, responsive, and effective processes.",
                    ),
                },
                Question {
                    text: "Are there policies and practices for retention and secure disposal of personal data?",
                    options: options(
                        "No clear retention or disposal policies.",
                        "Policies exist but execution is inconsistent.",
                        "Formal policies with monitoring and audit.",
                    ),
                },
            ],
        },
        Section {
            name: "CIS Controls",
            questions: vec![
                Question {
                    text: "Is an up-to-date, controlled inventory of all networked hardware maintained? (CIS Control 1)",
                    options: options(
                        "No formal inventory is kept.",
                        "Inventory is partial or stale.",
                        "Complete inventory, updated and audited regularly.",
                    ),
                },
                Question {
                    text: "Is the list of authorized and installed software managed to keep unauthorized software out? (CIS Control 2)",
                    options: options(
                        "No software control or registry.",
                        "Partial inventory with little active management.",
                        "Strict control with removal of unauthorized software.",
                    ),
                },
                Question {
                    text: "Are there established processes to identify, classify, and remediate vulnerabilities? (CIS Control 3)",
                    options: options(
                        "No formal processes exist.",
                        "Ad hoc or irregular process.",
                        "Continuous, automated, audited process.",
                    ),
                },
                Question {
                    text: "Is privileged access restricted, monitored, and periodically reviewed? (CIS Control 4)",
                    options: options(
                        "No control or review exists.",
                        "Partial control with sporadic review.",
                        "Strict control, regular review, least privilege enforced.",
                    ),
                },
                Question {
                    text: "Are secure baseline configurations enforced for operating systems and applications? (CIS Control 5)",
                    options: options(
                        "Configurations are insecure and unstandardized.",
                        "Basic configurations applied without full standardization.",
                        "Hardened, audited configurations based on recognized benchmarks.",
                    ),
                },
                Question {
                    text: "Are network and system event logs centralized, monitored, and analyzed for incidents? (CIS Control 6)",
                    options: options(
                        "No monitoring or centralization.",
                        "Limited, manual monitoring.",
                        "Automated monitoring with real-time analysis and rapid response.",
                    ),
                },
            ],
        },
    ]
}
