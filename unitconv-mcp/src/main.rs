//! unitconv MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout.
//!
//! Tools:
//! - convert: Convert a value between units of one category, with the formula
//! - list_categories: List categories, base units and descriptions
//! - list_units: List the units of a category

mod config;
mod tools;

use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use config::{init_logging, Config};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unitconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn parse_error(details: impl std::fmt::Display) -> Self {
        McpError { code: -32700, message: format!("Parse error: {}", details), data: None }
    }

    fn method_not_found(method: &str) -> Self {
        McpError { code: -32601, message: format!("Method not found: {}", method), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }
}

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "unitconv MCP server started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = serve(stdin.lock(), stdout.lock()) {
        error!("I/O error: {}", e);
    }

    info!("Server shutting down");
}

/// Read requests line by line until EOF, writing one response per request
fn serve<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            info!("Client disconnected (EOF)");
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "received request");

        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                let response = handle_request(&request);
                // Notifications (no id) never get a response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    continue;
                }
                response
            }
            Err(e) => {
                warn!("Error parsing request: {}", e);
                McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: None,
                    result: None,
                    error: Some(McpError::parse_error(e)),
                }
            }
        };

        let response_json = serde_json::to_string(&response)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", response_json)?;
        writer.flush()?;
    }
}

fn handle_request(request: &McpRequest) -> McpResponse {
    debug!(method = %request.method, "processing");

    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => Ok(tools::tools_list()),
        "tools/call" => handle_tool_call(&request.params),

        _ => Err(McpError::method_not_found(&request.method)),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit converter for length, weight, temperature, volume and time"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories and list_units to find valid units, then convert. Show the user both the result and the formula used."
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    tools::call_tool(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: Option<i64>, method: &str, params: Option<JsonValue>) -> McpRequest {
        McpRequest {
            jsonrpc: "2.0".to_string(),
            id: id.map(|i| json!(i)),
            method: method.to_string(),
            params,
        }
    }

    fn run(input: &str) -> Vec<JsonValue> {
        let mut output = Vec::new();
        serve(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_initialize() {
        let response = handle_request(&request(Some(1), "initialize", Some(json!({
            "protocolVersion": "2024-11-05",
            "clientInfo": { "name": "test" }
        }))));

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn test_tools_list() {
        let response = handle_request(&request(Some(2), "tools/list", None));
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap().to_string()).collect();
        assert_eq!(names, vec!["convert", "list_categories", "list_units"]);
    }

    #[test]
    fn test_tool_call() {
        let response = handle_request(&request(Some(3), "tools/call", Some(json!({
            "name": "convert",
            "arguments": { "value": 1, "category": "time", "from_unit": "year", "to_unit": "day" }
        }))));

        let result = response.result.unwrap();
        assert_eq!(result["structuredContent"]["display"], "365.05 day");
        assert_eq!(response.id, Some(json!(3)));
    }

    #[test]
    fn test_tool_call_without_params() {
        let response = handle_request(&request(Some(4), "tools/call", None));
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn test_unknown_method() {
        let response = handle_request(&request(Some(5), "resources/list", None));
        let err = response.error.unwrap();
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "Method not found: resources/list");
    }

    #[test]
    fn test_serve_loop() {
        let input = concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n",
            "\n",
            "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n",
            "not json\n",
            "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":{\"name\":\"list_units\",\"arguments\":{\"category\":\"length\"}}}\n",
        );
        let responses = run(input);

        // blank line and notification produce nothing
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["error"]["code"], -32700);
        assert_eq!(responses[2]["result"]["structuredContent"]["units"][0], "meter");
    }
}
