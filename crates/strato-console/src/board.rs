use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use strato_common::{InstanceRecord, ModelType};

use crate::http::ApiClient;
use crate::state::ConsoleState;

/// Sentinel uid of the placeholder row shown while a refresh is in flight.
pub const PLACEHOLDER_UID: &str = "__refreshing__";

/// The per-category instance lists the console presents.
///
/// Lists are replaced wholesale on every refresh, never patched in place.
/// Ordering within a list follows the supervisor map's iteration order and
/// is not stable across refreshes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryLists {
    pub llm: Vec<InstanceRecord>,
    pub embedding: Vec<InstanceRecord>,
    pub rerank: Vec<InstanceRecord>,
    pub image: Vec<InstanceRecord>,
}

impl CategoryLists {
    fn placeholder() -> Self {
        Self {
            llm: vec![placeholder_record()],
            embedding: vec![placeholder_record()],
            rerank: vec![placeholder_record()],
            image: vec![placeholder_record()],
        }
    }
}

fn placeholder_record() -> InstanceRecord {
    InstanceRecord {
        model_uid: PLACEHOLDER_UID.to_string(),
        model_name: "loading, do not refresh".to_string(),
        model_type: ModelType::Unknown,
        address: None,
        accelerators: Vec::new(),
        model_size_in_billions: None,
        quantization: None,
        cache_status: None,
    }
}

/// Partition the supervisor's instance map into category lists.
///
/// Each entry lands in exactly one list; audio and unrecognized types have
/// no list on the board and are dropped. The map key is authoritative for
/// the uid.
pub fn partition(map: HashMap<String, InstanceRecord>) -> CategoryLists {
    let mut lists = CategoryLists::default();
    for (uid, mut record) in map {
        record.model_uid = uid;
        match record.model_type {
            ModelType::Llm => lists.llm.push(record),
            ModelType::Embedding => lists.embedding.push(record),
            ModelType::Rerank => lists.rerank.push(record),
            ModelType::Image => lists.image.push(record),
            ModelType::Audio | ModelType::Unknown => {
                tracing::debug!(uid=%record.model_uid, ty=?record.model_type, "instance type has no board category, dropping");
            }
        }
    }
    lists
}

/// Shared view state over the running-instance lists.
pub struct ModelBoard {
    state: Arc<ConsoleState>,
    lists: Mutex<CategoryLists>,
}

impl ModelBoard {
    pub fn new(state: Arc<ConsoleState>) -> Arc<Self> {
        Arc::new(Self {
            state,
            lists: Mutex::new(CategoryLists::default()),
        })
    }

    /// Snapshot of the current lists.
    pub fn lists(&self) -> CategoryLists {
        self.lists.lock().expect("board lists poisoned").clone()
    }

    /// Full resynchronization against `GET /v1/models/`.
    ///
    /// While in flight every category list shows the single placeholder row.
    /// On success the lists are replaced wholesale; on failure the previous
    /// (possibly stale) lists are restored and the error is logged. Never
    /// returns an error to the caller.
    pub async fn refresh(&self, api: &ApiClient) {
        let Some(_guard) = self.state.try_begin_refresh() else {
            tracing::debug!("refresh already in flight, skipping");
            return;
        };

        let previous = {
            let mut lists = self.lists.lock().expect("board lists poisoned");
            std::mem::replace(&mut *lists, CategoryLists::placeholder())
        };

        let fetched = self.fetch(api).await;

        let mut lists = self.lists.lock().expect("board lists poisoned");
        match fetched {
            Ok(map) => {
                *lists = partition(map);
            }
            Err(e) => {
                tracing::warn!(error=%e, "instance list refresh failed, keeping previous lists");
                *lists = previous;
            }
        }
    }

    async fn fetch(&self, api: &ApiClient) -> Result<HashMap<String, InstanceRecord>, crate::ConsoleError> {
        let resp = crate::ConsoleError::check(api.get("/v1/models/").send().await?)?;
        let raw = resp.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }
}
