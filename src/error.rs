use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),
    #[error("Malformed relation \"{clause}\": {reason}")]
    MalformedRelation { clause: String, reason: String },
    #[error("Package {package} has no {field} field")]
    MissingField { package: String, field: &'static str },
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
}

impl ParseError {
    pub fn relation(clause: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedRelation {
            clause: clause.trim().to_string(),
            reason: reason.into(),
        }
    }
}
