use serde::{Deserialize, Serialize};

/// Category of a running model instance, as reported by the supervisor.
///
/// The wire format uses the supervisor's historical spellings: `"LLM"` is
/// upper-case, everything else lower-case. Values this client does not know
/// about decode as `Unknown` instead of failing the whole instance map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModelType {
    #[serde(rename = "LLM")]
    Llm,
    #[serde(rename = "embedding")]
    Embedding,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "rerank")]
    Rerank,
    #[serde(rename = "audio")]
    Audio,
    #[serde(other)]
    Unknown,
}

impl ModelType {
    /// Path segment used by the registration endpoints.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            ModelType::Llm => "LLM",
            ModelType::Embedding => "embedding",
            ModelType::Image => "image",
            ModelType::Rerank => "rerank",
            ModelType::Audio => "audio",
            ModelType::Unknown => "unknown",
        }
    }
}

/// A running, addressable model-serving process.
///
/// Created when the supervisor reports the instance in its map; removed from
/// view when a refresh no longer lists it or a terminate succeeds. The map
/// key is the instance uid; the map value may or may not repeat it, so
/// `model_uid` defaults to empty and is filled in from the key on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceRecord {
    #[serde(default)]
    pub model_uid: String,

    pub model_name: String,

    pub model_type: ModelType,

    /// Host:port the instance serves inference on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Accelerators the instance is pinned to (e.g. `["0", "1"]`).
    #[serde(default)]
    pub accelerators: Vec<String>,

    /// Parameter count in billions, for sized model families.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_size_in_billions: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization: Option<String>,

    /// Whether the model files are already cached supervisor-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_status: Option<bool>,
}

/// Body of `POST /v1/models`. Optional fields are omitted, not null — the
/// supervisor treats a missing field and an explicit null differently for
/// `model_uid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_uid: Option<String>,

    pub model_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_size_in_billions: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization: Option<String>,
}

impl LaunchRequest {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_uid: None,
            model_name: model_name.into(),
            model_size_in_billions: None,
            model_format: None,
            quantization: None,
        }
    }
}

/// Generate a fresh instance uid for launch flows that need the id ahead of
/// the create call (the UI page is built under the same uid).
pub fn gen_instance_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}
