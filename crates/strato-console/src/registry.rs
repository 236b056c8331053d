use strato_common::{ModelType, RegistrationRecord};

use crate::error::ConsoleError;
use crate::http::ApiClient;

/// Fetch the registrations for one model type.
///
/// `detailed` asks the supervisor to include descriptions and ability lists,
/// which the client-side filter needs.
pub async fn list_registrations(
    api: &ApiClient,
    model_type: ModelType,
    detailed: bool,
) -> Result<Vec<RegistrationRecord>, ConsoleError> {
    let path = format!(
        "/v1/model_registrations/{}?detailed={}",
        model_type.as_path_segment(),
        detailed
    );
    let resp = ConsoleError::check(api.get(&path).send().await?)?;
    let raw = resp.text().await?;
    Ok(serde_json::from_str(&raw)?)
}
