use serde::{Deserialize, Serialize};

/// Static descriptor of a launchable model, from
/// `GET /v1/model_registrations/{type}`.
///
/// Immutable from the client's perspective; the only mutation the supervisor
/// accepts is deleting a non-builtin registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationRecord {
    pub model_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_description: Option<String>,

    /// Abilities such as "chat", "generate", "embed", "vision".
    #[serde(default)]
    pub model_ability: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_family: Option<String>,

    /// Builtin registrations ship with the supervisor and cannot be removed.
    #[serde(default)]
    pub is_builtin: bool,
}
