use std::sync::Arc;

use reqwest::StatusCode;
use strato_common::{gen_instance_uid, LaunchRequest, ModelType};

use crate::board::ModelBoard;
use crate::error::ConsoleError;
use crate::http::ApiClient;
use crate::state::ConsoleState;

/// Seam for the "open the instance UI in a new browsing context" side
/// effect. Production opens a browser; tests record the URL.
pub trait UiOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Opener that only logs — useful for headless sessions.
#[derive(Debug, Default)]
pub struct LogOpener;

impl UiOpener for LogOpener {
    fn open(&self, url: &str) {
        tracing::info!(%url, "instance UI ready");
    }
}

/// Per-launch knobs beyond the wire descriptor.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Build the instance's UI page as a dependent second step and open it.
    pub with_ui: bool,
}

/// Result of a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched {
        model_uid: String,
        /// Set when the UI page was built and opened.
        ui_url: Option<String>,
    },
    /// Another operation was in flight; no request was sent.
    Busy,
}

/// Issues the dependent REST calls behind every user-triggered action and
/// reconciles the result into shared console state.
///
/// Calls within one operation run strictly in sequence; an operation cannot
/// be cancelled once its first request is on the wire. The in-flight gate
/// only stops a *new* operation from starting.
pub struct Orchestrator {
    api: ApiClient,
    state: Arc<ConsoleState>,
    board: Arc<ModelBoard>,
    opener: Arc<dyn UiOpener>,
}

impl Orchestrator {
    pub fn new(
        api: ApiClient,
        state: Arc<ConsoleState>,
        board: Arc<ModelBoard>,
        opener: Arc<dyn UiOpener>,
    ) -> Self {
        Self {
            api,
            state,
            board,
            opener,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn board(&self) -> &Arc<ModelBoard> {
        &self.board
    }

    fn ui_url(&self, model_uid: &str) -> String {
        self.api.url(&format!("/v1/{model_uid}"))
    }

    /// Launch an instance: `POST /v1/models`, then for UI launches
    /// `POST /v1/ui/{uid}` under the same uid, then open the page.
    ///
    /// There is no rollback when the UI step fails after a successful create:
    /// the instance stays and the supervisor is responsible for reconciling it.
    /// Not idempotent: repeating with an explicit uid surfaces the server's
    /// conflict as an unexpected-status error.
    pub async fn launch(
        &self,
        mut request: LaunchRequest,
        options: LaunchOptions,
    ) -> Result<LaunchOutcome, ConsoleError> {
        let Some(_guard) = self.state.try_begin_call() else {
            tracing::debug!(model_name=%request.model_name, "launch rejected, operation in flight");
            return Ok(LaunchOutcome::Busy);
        };

        // The UI step needs the uid ahead of the create call so both steps
        // agree on it.
        if options.with_ui && request.model_uid.is_none() {
            request.model_uid = Some(gen_instance_uid());
        }

        let model_uid = match self.create_instance(&request).await {
            Ok(uid) => uid,
            Err(e) => {
                self.state
                    .set_error(format!("failed to launch '{}': {e}", request.model_name));
                return Err(e);
            }
        };
        tracing::info!(%model_uid, model_name=%request.model_name, "instance launched");

        if !options.with_ui {
            return Ok(LaunchOutcome::Launched {
                model_uid,
                ui_url: None,
            });
        }

        if let Err(e) = self.create_ui(&model_uid, &request).await {
            self.state
                .set_error(format!("instance '{model_uid}' launched but its UI failed: {e}"));
            return Err(e);
        }

        let url = self.ui_url(&model_uid);
        self.opener.open(&url);
        Ok(LaunchOutcome::Launched {
            model_uid,
            ui_url: Some(url),
        })
    }

    async fn create_instance(&self, request: &LaunchRequest) -> Result<String, ConsoleError> {
        let resp = ConsoleError::check(self.api.post("/v1/models").json(request).send().await?)?;
        let raw = resp.text().await?;
        let body: serde_json::Value = serde_json::from_str(&raw)?;
        let uid = body
            .get("model_uid")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        match uid.or_else(|| request.model_uid.clone()) {
            Some(uid) => Ok(uid),
            None => Err(ConsoleError::MalformedBody(
                <serde_json::Error as serde::de::Error>::custom("launch response missing model_uid"),
            )),
        }
    }

    async fn create_ui(&self, model_uid: &str, request: &LaunchRequest) -> Result<(), ConsoleError> {
        ConsoleError::check(
            self.api
                .post(&format!("/v1/ui/{model_uid}"))
                .json(request)
                .send()
                .await?,
        )?;
        Ok(())
    }

    /// Terminate an instance: `DELETE /v1/models/{uid}`.
    ///
    /// Success or failure, the board is refreshed afterwards so the removed
    /// instance disappears from presented state instead of being spliced
    /// out optimistically.
    pub async fn terminate(&self, model_uid: &str) -> Result<(), ConsoleError> {
        let result = {
            let Some(_guard) = self.state.try_begin_call() else {
                tracing::debug!(%model_uid, "terminate rejected, operation in flight");
                return Err(ConsoleError::Busy);
            };
            self.delete_instance(model_uid).await
            // Guard drops here so the refresh gate can open.
        };

        if let Err(e) = &result {
            self.state
                .set_error(format!("failed to terminate '{model_uid}': {e}"));
        } else {
            tracing::info!(%model_uid, "instance terminated");
        }
        self.board.refresh(&self.api).await;
        result
    }

    async fn delete_instance(&self, model_uid: &str) -> Result<(), ConsoleError> {
        ConsoleError::check(
            self.api
                .delete(&format!("/v1/models/{model_uid}"))
                .send()
                .await?,
        )?;
        Ok(())
    }

    /// Open an instance's UI, materializing it first when it does not exist
    /// yet: `HEAD /v1/{uid}` probes the page; 404 is the "needs creation"
    /// signal, 2xx means open directly, anything else is an error.
    ///
    /// Two consoles probing concurrently can both see 404 and both create;
    /// only the advisory gate mitigates that.
    pub async fn open_or_create_ui(
        &self,
        model_uid: &str,
        descriptor: &LaunchRequest,
    ) -> Result<(), ConsoleError> {
        let Some(_guard) = self.state.try_begin_call() else {
            tracing::debug!(%model_uid, "open rejected, operation in flight");
            return Err(ConsoleError::Busy);
        };

        let url = self.ui_url(model_uid);
        let probe = match self.api.head(&format!("/v1/{model_uid}")).send().await {
            Ok(resp) => resp,
            Err(e) => {
                self.state
                    .set_error(format!("failed to probe UI for '{model_uid}': {e}"));
                return Err(e.into());
            }
        };

        match probe.status() {
            StatusCode::NOT_FOUND => {
                if let Err(e) = self.create_ui(model_uid, descriptor).await {
                    self.state
                        .set_error(format!("failed to build UI for '{model_uid}': {e}"));
                    return Err(e);
                }
                self.opener.open(&url);
                Ok(())
            }
            status if status.is_success() => {
                self.opener.open(&url);
                Ok(())
            }
            status => {
                let e = ConsoleError::UnexpectedStatus(status);
                self.state
                    .set_error(format!("failed to open UI for '{model_uid}': {e}"));
                Err(e)
            }
        }
    }

    /// Remove a custom model registration. Builtin registrations are
    /// rejected server-side; the error is surfaced like any other.
    pub async fn remove_registration(
        &self,
        model_type: ModelType,
        model_name: &str,
    ) -> Result<(), ConsoleError> {
        let Some(_guard) = self.state.try_begin_call() else {
            tracing::debug!(%model_name, "unregister rejected, operation in flight");
            return Err(ConsoleError::Busy);
        };

        let path = format!(
            "/v1/model_registrations/{}/{}",
            model_type.as_path_segment(),
            model_name
        );
        let result: Result<(), ConsoleError> = async {
            ConsoleError::check(self.api.delete(&path).send().await?)?;
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                tracing::info!(%model_name, "registration removed");
                Ok(())
            }
            Err(e) => {
                self.state
                    .set_error(format!("failed to remove registration '{model_name}': {e}"));
                Err(e)
            }
        }
    }
}
