//! Serde support for [`Outcome`].
//!
//! An outcome is encoded externally tagged, as `{"success": value}` or
//! `{"failure": error}`.
//! Deserialization validates the payload like the constructors do, but since
//! the data came from outside the program an absent payload is reported as a
//! deserialization error instead of a panic.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use super::{Branch, Outcome};
use crate::Presence;

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de> + Presence,
    E: Deserialize<'de> + Display + Presence,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let branch = Branch::deserialize(deserializer)?;
        Outcome::validate(branch).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encodes_the_branch_as_a_tag() {
        let success = Outcome::<u32, String>::success(7);
        assert_eq!(serde_json::to_value(success).unwrap(), json!({ "success": 7 }));

        let failure = Outcome::<u32, String>::failure("timed out".into());
        assert_eq!(
            serde_json::to_value(failure).unwrap(),
            json!({ "failure": "timed out" }),
        );
    }

    #[test]
    fn decodes_present_payloads() {
        let outcome: Outcome<Vec<u8>, String> =
            serde_json::from_value(json!({ "success": [1, 2, 3] })).unwrap();
        assert_eq!(outcome.unwrap(), vec![1, 2, 3]);

        let outcome: Outcome<Vec<u8>, String> =
            serde_json::from_value(json!({ "failure": "corrupt" })).unwrap();
        assert_eq!(outcome.unwrap_failure(), "corrupt");
    }

    #[test]
    fn rejects_an_absent_success_value() {
        let error = serde_json::from_value::<Outcome<Option<u8>, String>>(json!({ "success": null }))
            .unwrap_err();

        assert!(
            error.to_string().contains("absent value provided"),
            "unexpected error: {error}",
        );
    }

    #[test]
    fn rejects_an_unknown_tag() {
        let result = serde_json::from_value::<Outcome<u8, String>>(json!({ "pending": 1 }));
        assert!(result.is_err());
    }
}
