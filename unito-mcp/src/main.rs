//! Unito MCP Server
//!
//! Stdio JSON-RPC server bridging the converter core to a browser
//! presentation shell.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - list_categories: List the twelve categories with definitions
//! - list_units: List the ordered unit names of one category
//!
//! Resources:
//! - unito://categories - List available categories
//! - unito://categories/{name} - Definition and unit list of one category
//!
//! Conversion failures (unknown category, unsupported pair, bad spoken
//! value) come back as ordinary tool output for the shell to render;
//! protocol errors are reserved for malformed requests.

use std::io::{self, BufRead, IsTerminal, Write};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use unito_core::{convert_request, entries, format_result, parse_value, ConversionRequest};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unito";
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
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

fn missing_param(message: &str) -> McpError {
    McpError {
        code: -32602,
        message: message.to_string(),
        data: None,
    }
}

fn main() {
    // Log to stderr so stdout stays protocol-clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    info!("Unito MCP Server v{} started", SERVER_VERSION);
    info!("Protocol: {}", PROTOCOL_VERSION);
    info!("Categories: {}", entries().len());
    debug!("stdin is_terminal: {}", io::stdin().is_terminal());

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("Error parsing request: {}", e);
                        let response = McpResponse {
                            jsonrpc: "2.0".to_string(),
                            id: None,
                            result: None,
                            error: Some(McpError {
                                code: -32700,
                                message: format!("Parse error: {}", e),
                                data: None,
                            }),
                        };
                        write_response(&response);
                        continue;
                    }
                };

                debug!("Processing: {}", request.method);

                let response = handle_request(&request);

                // Notifications (no id) should NOT receive a response
                if request.id.is_none() {
                    debug!("Notification processed (no response): {}", request.method);
                    continue;
                }

                write_response(&response);
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
}

fn write_response(response: &McpResponse) {
    let response_json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            error!("Error serializing response: {}", e);
            return;
        }
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", response_json) {
        error!("Error writing response: {}", e);
        return;
    }
    if let Err(e) = stdout.flush() {
        error!("Error flushing stdout: {}", e);
    }
}

fn handle_request(request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(&request.params),

        // Resources
        "resources/list" => handle_resources_list(),
        "resources/read" => handle_resources_read(&request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
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
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!("Client connected: {} (protocol: {})", client_info, client_protocol);

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion across twelve measurement categories"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            },
            "resources": {
                "subscribe": false,
                "listChanged": false
            }
        },
        "instructions": "Unito converts values between units of one measurement category. Use 'list_categories' to discover categories and their definitions, 'list_units' for the unit names of a category, then 'convert' with the exact category and unit names. Unit and category names are case-sensitive."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a numeric value between two units of a measurement category. Returns the formatted result line, or the reason the conversion is unsupported.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name, e.g. \"Length\" or \"Fuel Economy\" (case-sensitive)"
                        },
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert; a string is parsed as a decimal (e.g. a speech transcript)"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit name from the category's unit list"
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit name from the category's unit list"
                        }
                    },
                    "required": ["category", "value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "list_categories",
                "description": "List the twelve measurement categories with their definition texts.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the ordered unit names of one category, for populating selection widgets.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name (case-sensitive)"
                        }
                    },
                    "required": ["category"]
                }
            }
        ]
    }))
}

fn handle_resources_list() -> Result<JsonValue, McpError> {
    let resources: Vec<JsonValue> = entries()
        .iter()
        .map(|entry| {
            json!({
                "uri": format!("unito://categories/{}", entry.name),
                "name": entry.name,
                "description": entry.definition,
                "mimeType": "application/json"
            })
        })
        .collect();

    Ok(json!({ "resources": resources }))
}

fn handle_resources_read(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let uri = params
        .as_ref()
        .and_then(|p| p.get("uri"))
        .and_then(|u| u.as_str())
        .ok_or_else(|| missing_param("Missing uri parameter"))?;

    let name = uri.strip_prefix("unito://categories/").ok_or_else(|| McpError {
        code: -32602,
        message: format!("Invalid URI: {}. Expected unito://categories/{{name}}", uri),
        data: None,
    })?;

    let entry = entries()
        .into_iter()
        .find(|e| e.name == name)
        .ok_or_else(|| McpError {
            code: -32602,
            message: format!("Unknown category: {}", name),
            data: Some(json!({
                "available": entries().iter().map(|e| e.name).collect::<Vec<_>>()
            })),
        })?;

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": "application/json",
            "text": serde_json::to_string(&entry).unwrap_or_default()
        }]
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params
        .as_ref()
        .ok_or_else(|| missing_param("Missing params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing_param("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(args),
        "list_categories" => tool_list_categories(),
        "list_units" => tool_list_units(args),
        _ => Err(McpError {
            code: -32602,
            message: format!("Unknown tool: {}", name),
            data: None,
        }),
    }
}

/// Tool result whose text the shell renders as-is
fn text_result(text: String, is_error: bool) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error
    })
}

fn tool_convert(args: JsonValue) -> Result<JsonValue, McpError> {
    let category = args
        .get("category")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing_param("Missing category argument"))?;

    let from_unit = args
        .get("from_unit")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing_param("Missing from_unit argument"))?;

    let to_unit = args
        .get("to_unit")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing_param("Missing to_unit argument"))?;

    // The value arrives as a JSON number, or as a decimal string when the
    // shell forwards a speech transcript
    let value = match args.get("value") {
        Some(JsonValue::Number(n)) => match n.as_f64() {
            Some(v) => v,
            None => return Ok(text_result(format!("invalid numeric value: '{}'", n), true)),
        },
        Some(JsonValue::String(s)) => match parse_value(s) {
            Ok(v) => v,
            Err(e) => return Ok(text_result(e.to_string(), true)),
        },
        _ => return Err(missing_param("Missing value argument")),
    };

    let request = ConversionRequest {
        category: category.to_string(),
        value,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
    };

    match convert_request(&request) {
        Ok(result) => {
            debug!(
                "convert {} {} -> {} = {}",
                value, from_unit, to_unit, result
            );
            Ok(json!({
                "content": [{ "type": "text", "text": format_result(&request, result) }],
                "result": result,
                "isError": false
            }))
        }
        Err(e) => {
            debug!("convert failed: {}", e);
            Ok(text_result(e.to_string(), true))
        }
    }
}

fn tool_list_categories() -> Result<JsonValue, McpError> {
    let categories: Vec<JsonValue> = entries()
        .iter()
        .map(|entry| {
            json!({
                "name": entry.name,
                "definition": entry.definition
            })
        })
        .collect();

    Ok(json!({
        "content": [{
            "type": "text",
            "text": entries()
                .iter()
                .map(|e| format!("{}: {}", e.name, e.definition))
                .collect::<Vec<_>>()
                .join("\n")
        }],
        "categories": categories,
        "isError": false
    }))
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let name = args
        .get("category")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing_param("Missing category argument"))?;

    match entries().into_iter().find(|e| e.name == name) {
        Some(entry) => Ok(json!({
            "content": [{ "type": "text", "text": entry.units.join(", ") }],
            "units": entry.units,
            "isError": false
        })),
        // Unknown category degrades to a renderable message, same as convert
        None => Ok(text_result(
            format!("conversion logic not implemented for '{}'", name),
            true,
        )),
    }
}
