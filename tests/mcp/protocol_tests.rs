//! Line-level protocol tests
//!
//! Drives `process_line` with raw JSON the way a client writes to stdin.

#[cfg(test)]
mod tests {
    use crate::common::create_test_services;
    use serde_json::{json, Value};
    use toolfinder::mcp::protocol::*;
    use toolfinder::mcp::{process_line, ProtocolHandlers};

    fn handlers() -> ProtocolHandlers {
        ProtocolHandlers::new(create_test_services(None))
    }

    async fn roundtrip(handlers: &ProtocolHandlers, message: Value) -> Value {
        let response = process_line(handlers, &message.to_string()).await;
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_client_session() {
        let handlers = handlers();

        let init = roundtrip(
            &handlers,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "0.1"}
                }
            }),
        )
        .await;
        assert_eq!(init["id"], 1);
        assert_eq!(init["result"]["capabilities"]["tools"]["listChanged"], false);

        let ack = process_line(
            &handlers,
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        )
        .await;
        assert!(ack.id.is_none() && ack.result.is_none() && ack.error.is_none());
        assert!(handlers.is_initialized());

        let list = roundtrip(
            &handlers,
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        )
        .await;
        assert_eq!(list["result"]["tools"].as_array().unwrap().len(), 6);

        let call = roundtrip(
            &handlers,
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": {"name": "search_catalog", "arguments": {"query": "merge"}}
            }),
        )
        .await;
        assert_eq!(call["id"], 3);
        assert_eq!(call["result"]["content"][0]["type"], "text");
        let text = call["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("PDF Merger"));
    }

    #[tokio::test]
    async fn test_error_responses_serialize_without_result() {
        let handlers = handlers();
        let response = roundtrip(
            &handlers,
            json!({"jsonrpc": "2.0", "id": 9, "method": "prompts/list"}),
        )
        .await;

        assert!(response.get("result").is_none());
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
        assert!(response["error"].get("data").is_none());
    }

    #[tokio::test]
    async fn test_garbage_line_is_parse_error() {
        let response = process_line(&handlers(), "hello").await;
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_missing_method_is_parse_error() {
        let response = process_line(&handlers(), r#"{"jsonrpc":"2.0","id":1}"#).await;
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[test]
    fn test_request_roundtrip_keeps_string_id() {
        let request: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"abc","method":"ping"}"#).unwrap();
        assert_eq!(request.id, Some(json!("abc")));
        assert!(request.params.is_none());
    }
}
