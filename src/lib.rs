//! Assertion verifier: parse `user=`/`expire=` assertions and decide whether
//! they name an allowed principal and are still valid.
//!
//! ```
//! use assertion_verifier::{verify, Decision, Policy};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let decision = verify("user=origin\nexpire=20991231", &Policy::default(), now);
//! assert_eq!(decision, Decision::Verified("origin".to_string()));
//! ```

pub mod assertion;
pub mod clock;
pub mod error;
pub mod input;
pub mod inspect;
pub mod policy;
pub mod validate;
pub mod verify;

pub use assertion::{parse, Field, FieldMap};
pub use error::{ParseError, Rejection};
pub use policy::Policy;
pub use validate::{validate, verify, Decision};
