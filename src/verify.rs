//! Verify command: read assertion, load policy, decide, colored or JSON output.

use crate::clock;
use crate::input::read_assertion;
use crate::policy::Policy;
use crate::validate::{self, Decision};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Machine-readable outcome printed with `--json`.
#[derive(Serialize)]
pub struct Report {
    pub verified: bool,
    pub user: Option<String>,
    pub kind: Option<&'static str>,
    pub reason: Option<String>,
}

impl From<&Decision> for Report {
    fn from(d: &Decision) -> Self {
        match d {
            Decision::Verified(user) => Report {
                verified: true,
                user: Some(user.clone()),
                kind: None,
                reason: None,
            },
            Decision::Rejected(r) => Report {
                verified: false,
                user: None,
                kind: Some(r.kind()),
                reason: Some(r.to_string()),
            },
        }
    }
}

pub fn load_policy(policy_path: Option<&Path>) -> anyhow::Result<Policy> {
    match policy_path {
        Some(path) => {
            let policy = Policy::load(path)?;
            tracing::debug!(path = %path.display(), users = policy.allowed_users.len(), "loaded policy");
            Ok(policy)
        }
        None => Ok(Policy::default()),
    }
}

/// Returns whether the assertion was verified. I/O and usage problems are errors;
/// a rejection is a normal `Ok(false)`.
pub fn run(
    assertion: Option<&str>,
    file: Option<&Path>,
    policy_path: Option<&Path>,
    now: Option<&str>,
    json: bool,
) -> anyhow::Result<bool> {
    let raw = read_assertion(assertion, file)?;
    let policy = load_policy(policy_path)?;
    let now = match now {
        Some(s) => clock::parse_now(s)?,
        None => clock::local_now(),
    };

    let decision = validate::verify(&raw, &policy, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&Report::from(&decision))?);
    } else {
        match &decision {
            Decision::Verified(user) => println!("{} {}", "verified user".green(), user),
            Decision::Rejected(reason) => println!("{}", reason.to_string().red()),
        }
    }

    Ok(decision.is_verified())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::Field;
    use crate::error::Rejection;

    #[test]
    fn report_for_rejection_carries_kind_and_reason() {
        let report = Report::from(&Decision::Rejected(Rejection::MissingField(Field::Expire)));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verified"], false);
        assert_eq!(json["kind"], "missing_field");
        assert_eq!(json["reason"], "no expire key");
        assert!(json["user"].is_null());
    }

    #[test]
    fn report_for_verified_carries_user() {
        let json = serde_json::to_value(Report::from(&Decision::Verified("origin".into()))).unwrap();
        assert_eq!(json["verified"], true);
        assert_eq!(json["user"], "origin");
    }

    #[test]
    fn run_with_pinned_clock() {
        let ok = run(
            Some("user=origin\nexpire=20240102"),
            None,
            None,
            Some("2024-01-01"),
            true,
        )
        .unwrap();
        assert!(ok);

        let expired = run(
            Some("user=origin\nexpire=20240102"),
            None,
            None,
            Some("2024-01-02"),
            true,
        )
        .unwrap();
        assert!(!expired);
    }
}
