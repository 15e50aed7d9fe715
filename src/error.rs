use thiserror::Error;

/// Reasons the embedded pricing catalog can be refused at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON or has an unsupported value: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog defines no plans")]
    NoPlans,
    #[error("plan id `{0}` is defined more than once")]
    DuplicatePlan(String),
    #[error("category `{0}` is defined more than once")]
    DuplicateCategory(String),
    #[error("row `{label}` appears twice in category `{category}`")]
    DuplicateRow { category: String, label: String },
    #[error("row `{label}` has a value for unknown plan `{plan}`")]
    UnknownPlan { label: String, plan: String },
    #[error("row `{label}` has more than one value for plan `{plan}`")]
    DuplicateValue { label: String, plan: String },
    #[error("row `{label}` has no value for plan `{plan}`")]
    MissingValue { label: String, plan: String },
    #[error("row `{label}` has an empty text value for plan `{plan}`")]
    EmptyText { label: String, plan: String },
}
