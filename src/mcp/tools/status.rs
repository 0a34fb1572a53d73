//! MCP check_fastapi_status tool: report whether the rendering service is up.

use rmcp::model::CallToolResult;

use super::to_call_tool_result;
use crate::marshal::Marshaler;

pub async fn run_check_status(marshaler: &Marshaler) -> CallToolResult {
    to_call_tool_result(marshaler.check_status().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlotBridgeConfig, ServiceConfig};
    use rmcp::model::RawContent;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("Expected text, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":\"ok\"}"))
            .mount(&server)
            .await;

        let config = PlotBridgeConfig {
            service: ServiceConfig { base_url: server.uri() },
            ..Default::default()
        };
        let result = run_check_status(&Marshaler::new(&config).unwrap()).await;

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.contains("running and accessible"));
        assert!(text.contains("{\"status\":\"ok\"}"));
    }

    #[tokio::test]
    async fn test_status_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = PlotBridgeConfig {
            service: ServiceConfig { base_url: base_url.clone() },
            ..Default::default()
        };
        let result = run_check_status(&Marshaler::new(&config).unwrap()).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains(&base_url));
    }
}
