//! Policy validator: ordered rules over a parsed assertion.
//!
//! Rules run strictly in this order and the first failure is the decision:
//!
//! 1. `user` present
//! 2. `user` on the policy allow-list
//! 3. `expire` present
//! 4. `expire` is a `YYYYMMDD` calendar date
//! 5. the current time is before midnight of that date
//!
//! Time is compared on the local wall clock, so callers pass
//! `Local::now().naive_local()` or a pinned value.

use crate::assertion::{self, Field, FieldMap};
use crate::error::Rejection;
use crate::policy::Policy;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const EXPIRE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Verified(String),
    Rejected(Rejection),
}

impl Decision {
    pub fn is_verified(&self) -> bool {
        matches!(self, Decision::Verified(_))
    }
}

impl From<Result<String, Rejection>> for Decision {
    fn from(r: Result<String, Rejection>) -> Self {
        match r {
            Ok(user) => Decision::Verified(user),
            Err(reason) => Decision::Rejected(reason),
        }
    }
}

fn required(fields: &FieldMap, field: Field) -> Result<&str, Rejection> {
    fields
        .get(field)
        .filter(|v| !v.is_empty())
        .ok_or(Rejection::MissingField(field))
}

/// Parse `expire` as exactly eight ASCII digits forming a real calendar date.
pub fn parse_expire_date(value: &str) -> Result<NaiveDate, Rejection> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::InvalidDateFormat(value.to_string()));
    }
    NaiveDate::parse_from_str(value, EXPIRE_FORMAT)
        .map_err(|_| Rejection::InvalidDateFormat(value.to_string()))
}

fn check(fields: &FieldMap, policy: &Policy, now: NaiveDateTime) -> Result<String, Rejection> {
    let user = required(fields, Field::User)?;
    if !policy.allows(user) {
        return Err(Rejection::UnauthorizedPrincipal(user.to_string()));
    }

    let expire = required(fields, Field::Expire)?;
    let expire_at = parse_expire_date(expire)?.and_time(NaiveTime::MIN);
    tracing::debug!(%expire_at, %now, "checking expiry");
    if now >= expire_at {
        return Err(Rejection::Expired(expire.to_string()));
    }

    Ok(user.to_string())
}

/// Apply the policy rules to already-parsed fields.
pub fn validate(fields: &FieldMap, policy: &Policy, now: NaiveDateTime) -> Decision {
    check(fields, policy, now).into()
}

/// Parse and validate raw assertion text in one pass.
pub fn verify(raw: &str, policy: &Policy, now: NaiveDateTime) -> Decision {
    let decision = match assertion::parse(raw) {
        Ok(fields) => validate(&fields, policy, now),
        Err(e) => Decision::Rejected(e.into()),
    };
    match &decision {
        Decision::Verified(user) => tracing::info!(user = %user, "assertion verified"),
        Decision::Rejected(reason) => {
            tracing::warn!(kind = reason.kind(), %reason, "assertion rejected")
        }
    }
    decision
}
