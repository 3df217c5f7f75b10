#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate rule id '{rule_id}' in marketplace profile '{marketplace}'")]
    DuplicateRule {
        marketplace: String,
        rule_id: String,
    },

    #[error("Invalid profile configuration: {0}")]
    Config(String),
}
