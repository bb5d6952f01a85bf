//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, merger_and_qr};
    use serde_json::json;
    use toolfinder::mcp::handlers::ProtocolHandlers;
    use toolfinder::mcp::protocol::*;

    fn create_test_handlers() -> ProtocolHandlers {
        ProtocolHandlers::new(create_test_services(None))
    }

    fn call(id: i64, name: &str, arguments: serde_json::Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: "tools/call".to_string(),
            params: Some(json!({"name": name, "arguments": arguments})),
        }
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "toolfinder-mcp");
        assert_eq!(result["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_tools_list_sorted_with_schemas() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "get_item",
                "get_server_info",
                "list_catalog",
                "search_catalog",
                "select_item",
                "show_config",
            ]
        );
        for tool in tools {
            assert_eq!(tool["inputSchema"]["type"], "object");
            assert!(!tool["description"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_tools_call_search() {
        let handlers = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(3, "search_catalog", json!({"query": "pdf", "limit": 5})))
            .await
            .unwrap();

        assert!(response.error.is_none());
        let text = response.result.unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(text.contains("Found 3 of 11 tools"));
        assert!(text.contains("## Suggestions"));
    }

    #[tokio::test]
    async fn test_tools_call_search_custom_catalog() {
        let handlers = ProtocolHandlers::new(create_test_services(Some(merger_and_qr())));
        let response = handlers
            .handle_tools_call(call(4, "search_catalog", json!({"query": ""})))
            .await
            .unwrap();

        let text = response.result.unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(text.contains("all 2 tools"));
    }

    #[tokio::test]
    async fn test_tools_call_get_item_not_found() {
        let handlers = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(5, "get_item", json!({"id": "nope"})))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, ITEM_NOT_FOUND);
        assert!(error.message.contains("nope"));
        assert_eq!(response.id, Some(json!(5)));
    }

    #[tokio::test]
    async fn test_tools_call_invalid_arguments() {
        let handlers = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(6, "search_catalog", json!({"query": 42})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_limit_too_large() {
        let handlers = create_test_handlers();
        let response = handlers
            .handle_tools_call(call(7, "search_catalog", json!({"query": "pdf", "limit": 1000})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_ping() {
        let handlers = create_test_handlers();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(8)),
            method: "ping".to_string(),
            params: None,
        };
        let response = handlers.handle_ping(request).await.unwrap();
        assert_eq!(response.result, Some(json!({})));
    }
}
