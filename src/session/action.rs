//! Actions the presentation layer dispatches against a session.

use crate::core::Code;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every intent a session understands.
///
/// On the wire an action is `{"type": "...", "payload": ...}`. Tags the
/// session does not know deserialize to [`Action::Unrecognized`] whatever
/// their payload, which leaves the session unchanged. The older `guess`
/// tag is accepted for `submitGuess`.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::Code;
/// use codebreaker::session::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type":"setGuess","payload":[0,1,2]}"#)?;
/// assert_eq!(action, Action::SetGuess(Code::from(vec![0, 1, 2])));
///
/// let unknown: Action = serde_json::from_str(r#"{"type":"shuffle","payload":{"seed":7}}"#)?;
/// assert_eq!(unknown, Action::Unrecognized);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    try_from = "RawAction"
)]
pub enum Action {
    /// Replace the in-progress guess wholesale
    SetGuess(Code),

    /// Advance the color at one position of the in-progress guess
    CycleColor(usize),

    /// Score the in-progress guess and append it to the history
    SubmitGuess,

    /// Any intent the session does not handle; the identity transition
    Unrecognized,
}

/// Wire shape of an action before its tag is resolved.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl TryFrom<RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "setGuess" => serde_json::from_value(raw.payload).map(Self::SetGuess),
            "cycleColor" => serde_json::from_value(raw.payload).map(Self::CycleColor),
            "submitGuess" | "guess" => Ok(Self::SubmitGuess),
            _ => Ok(Self::Unrecognized),
        }
    }
}

impl Action {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetGuess(_) => "SetGuess",
            Self::CycleColor(_) => "CycleColor",
            Self::SubmitGuess => "SubmitGuess",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_are_stable() {
        assert_eq!(Action::SetGuess(Code::default()).name(), "SetGuess");
        assert_eq!(Action::CycleColor(0).name(), "CycleColor");
        assert_eq!(Action::SubmitGuess.name(), "SubmitGuess");
        assert_eq!(Action::Unrecognized.name(), "Unrecognized");
    }

    #[test]
    fn actions_serialize_with_type_and_payload() {
        let json = serde_json::to_string(&Action::CycleColor(3)).unwrap();
        assert_eq!(json, r#"{"type":"cycleColor","payload":3}"#);

        let json = serde_json::to_string(&Action::SubmitGuess).unwrap();
        assert_eq!(json, r#"{"type":"submitGuess"}"#);
    }

    #[test]
    fn legacy_guess_tag_submits() {
        let action: Action = serde_json::from_str(r#"{"type":"guess"}"#).unwrap();
        assert_eq!(action, Action::SubmitGuess);
    }

    #[test]
    fn unknown_tag_is_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn unknown_tag_ignores_any_payload() {
        let payloads = [
            r#"{"type":"reset","payload":{"x":1}}"#,
            r#"{"type":"reset","payload":[1,2]}"#,
            r#"{"type":"hover","payload":2}"#,
            r#"{"type":"hover","payload":null}"#,
        ];
        for json in payloads {
            let action: Action = serde_json::from_str(json).unwrap();
            assert_eq!(action, Action::Unrecognized, "{json}");
        }
    }

    #[test]
    fn submit_ignores_stray_payload() {
        let action: Action = serde_json::from_str(r#"{"type":"submitGuess","payload":{}}"#).unwrap();
        assert_eq!(action, Action::SubmitGuess);
    }

    #[test]
    fn known_tag_with_bad_payload_is_an_error() {
        assert!(serde_json::from_str::<Action>(r#"{"type":"setGuess"}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"type":"cycleColor","payload":"x"}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"payload":3}"#).is_err());
    }

    #[test]
    fn unrecognized_serializes_to_a_tag_that_reads_back() {
        let json = serde_json::to_string(&Action::Unrecognized).unwrap();
        assert_eq!(json, r#"{"type":"unrecognized"}"#);
        let action: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn set_guess_roundtrips() {
        let action = Action::SetGuess(Code::from(vec![4, 3, 2, 1, 0]));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, action);
    }
}
