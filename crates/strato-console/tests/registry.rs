use httpmock::Method::GET;
use httpmock::MockServer;

use strato_common::{Credentials, ModelType};
use strato_console::{registry, ApiClient};

#[tokio::test]
async fn list_registrations_requests_detail_when_asked() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/model_registrations/LLM")
            .query_param("detailed", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"[{
                    "model_name": "orca",
                    "model_description": "an assistant",
                    "model_ability": ["chat"],
                    "is_builtin": true
                }]"#,
            );
    });

    let api = ApiClient::new(server.base_url(), Credentials::default());
    let regs = registry::list_registrations(&api, ModelType::Llm, true)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].model_name, "orca");
    assert!(regs[0].is_builtin);
    assert_eq!(regs[0].model_ability, vec!["chat".to_string()]);
}
