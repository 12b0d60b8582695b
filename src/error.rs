//! Error taxonomy for assertion parsing and policy validation.

use crate::assertion::Field;
use thiserror::Error;

/// Structural failure while turning raw text into a [`FieldMap`](crate::assertion::FieldMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed line: {0}")]
    MalformedLine(String),

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

/// Reason an assertion was refused. Every variant is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no {} key", .0.key())]
    MissingField(Field),

    #[error("unallowed user: {0}")]
    UnauthorizedPrincipal(String),

    #[error("invalid expire date format")]
    InvalidDateFormat(String),

    #[error("expired: {0}")]
    Expired(String),
}

impl Rejection {
    /// Stable snake_case identifier, used in the JSON report.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::Parse(ParseError::MalformedLine(_)) => "malformed_line",
            Rejection::Parse(ParseError::UnknownKey(_)) => "unknown_key",
            Rejection::Parse(ParseError::DuplicateKey(_)) => "duplicate_key",
            Rejection::MissingField(_) => "missing_field",
            Rejection::UnauthorizedPrincipal(_) => "unauthorized_principal",
            Rejection::InvalidDateFormat(_) => "invalid_date_format",
            Rejection::Expired(_) => "expired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            Rejection::MissingField(Field::User).to_string(),
            "no user key"
        );
        assert_eq!(
            Rejection::MissingField(Field::Expire).to_string(),
            "no expire key"
        );
        assert_eq!(
            Rejection::UnauthorizedPrincipal("bob".into()).to_string(),
            "unallowed user: bob"
        );
        assert_eq!(
            Rejection::from(ParseError::MalformedLine("user=a=b".into())).to_string(),
            "malformed line: user=a=b"
        );
    }

    #[test]
    fn parse_errors_keep_their_kind() {
        let r: Rejection = ParseError::UnknownKey("role=admin".into()).into();
        assert_eq!(r.kind(), "unknown_key");
    }
}
