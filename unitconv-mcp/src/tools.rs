//! Tool handlers: the presentation side of the converter
//!
//! Each tool collects its arguments, calls the conversion engine and renders
//! the result as text plus a structured copy.

use serde_json::{json, Value as JsonValue};
use tracing::warn;
use unitconv_core::{Category, Conversion, ConversionRequest, ConvertError};
use unitconv_units::{convert_request, parse_conversion, UNITS};
use crate::McpError;

pub fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category and show the formula used.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": "number",
                            "description": "Value to convert"
                        },
                        "category": {
                            "type": "string",
                            "enum": ["length", "weight", "temperature", "volume", "time"],
                            "description": "Unit category"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit (e.g., \"kilometer\")"
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit (e.g., \"mile\")"
                        },
                        "conversion": {
                            "type": "string",
                            "description": "Alternative to from_unit/to_unit, e.g. \"km->mi\""
                        }
                    },
                    "required": ["value", "category"]
                }
            },
            {
                "name": "list_categories",
                "description": "List the unit categories with their base units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units available in a category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Unit category"
                        }
                    },
                    "required": ["category"]
                }
            }
        ]
    })
}

pub fn call_tool(name: &str, args: JsonValue) -> Result<JsonValue, McpError> {
    match name {
        "convert" => tool_convert(args),
        "list_categories" => tool_list_categories(),
        "list_units" => tool_list_units(args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_convert(args: JsonValue) -> Result<JsonValue, McpError> {
    let value = number_arg(&args, "value")?;
    let category = match text_arg(&args, "category")?.parse::<Category>() {
        Ok(c) => c,
        Err(e) => return Ok(error_result(&e)),
    };

    let (from_unit, to_unit) = match args.get("conversion").and_then(|v| v.as_str()) {
        Some(conversion) => match parse_conversion(category, conversion) {
            Ok((from, to)) => (from.name.to_string(), to.name.to_string()),
            Err(e) => return Ok(error_result(&e)),
        },
        None => (text_arg(&args, "from_unit")?.to_string(), text_arg(&args, "to_unit")?.to_string()),
    };

    let request = ConversionRequest::new(value, category, from_unit, to_unit);
    match convert_request(&request) {
        Ok(conversion) => Ok(conversion_result(conversion)),
        Err(e) => Ok(error_result(&e)),
    }
}

fn tool_list_categories() -> Result<JsonValue, McpError> {
    let categories: Vec<JsonValue> = Category::ALL.iter()
        .map(|c| json!({
            "name": c.name(),
            "base_unit": c.base_unit(),
            "description": c.description(),
        }))
        .collect();

    let text = Category::ALL.iter()
        .map(|c| format!("{} (base: {}) - {}", c.name(), c.base_unit(), c.description()))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": { "categories": categories },
        "isError": false
    }))
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let category = match text_arg(&args, "category")?.parse::<Category>() {
        Ok(c) => c,
        Err(e) => return Ok(error_result(&e)),
    };
    let units = UNITS.units(category);
    let details: Vec<JsonValue> = UNITS.by_category(category).iter()
        .map(|u| json!({
            "name": u.name,
            "factor": u.factor(),
            "base": u.is_base(),
        }))
        .collect();

    Ok(json!({
        "content": [{ "type": "text", "text": units.join(", ") }],
        "structuredContent": { "category": category, "units": units, "details": details },
        "isError": false
    }))
}

fn conversion_result(conversion: Conversion) -> JsonValue {
    let display = conversion.display();
    let unit = conversion.unit.clone();
    let (value, explanation) = conversion.into_parts();
    let text = format!("Result: {}\nFormula used: {}", display, explanation);
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": {
            "value": value,
            "unit": unit,
            "display": display,
            "explanation": explanation,
        },
        "isError": false
    })
}

/// Conversion failures are reported to the user, not as protocol faults
fn error_result(err: &ConvertError) -> JsonValue {
    warn!(code = err.code(), "conversion rejected: {}", err);
    let report = err.report();
    json!({
        "content": [{ "type": "text", "text": format!("[{}] {} (suggestion: {})", report.code, report.message, report.suggestion) }],
        "error": report,
        "isError": true
    })
}

fn text_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

/// Numbers may arrive as JSON numbers or numeric strings
fn number_arg(args: &JsonValue, name: &str) -> Result<f64, McpError> {
    let arg = args.get(name)
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))?;

    if let Some(n) = arg.as_f64() {
        return Ok(n);
    }
    arg.as_str()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| McpError::invalid_params(format!("Argument {} must be a number", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &JsonValue) -> &str {
        result["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn test_convert_tool() {
        let result = call_tool("convert", json!({
            "value": 1, "category": "length", "from_unit": "meter", "to_unit": "kilometer"
        })).unwrap();

        assert_eq!(result["isError"], false);
        assert_eq!(text_of(&result), "Result: 0.00 kilometer\nFormula used: 1 × (1 ÷ 1000) = 0.00 kilometer");
        assert_eq!(result["structuredContent"]["unit"], "kilometer");
    }

    #[test]
    fn test_convert_tool_temperature() {
        let result = call_tool("convert", json!({
            "value": 100, "category": "Temperature", "from_unit": "celsius", "to_unit": "fahrenheit"
        })).unwrap();

        assert_eq!(result["structuredContent"]["value"], 212.0);
        assert_eq!(result["structuredContent"]["display"], "212.00 fahrenheit");
    }

    #[test]
    fn test_convert_tool_with_conversion_arg() {
        let result = call_tool("convert", json!({
            "value": "5", "category": "weight", "conversion": "kg->lb"
        })).unwrap();

        assert_eq!(result["structuredContent"]["display"], "11.02 pound");
    }

    #[test]
    fn test_convert_tool_unknown_unit() {
        let result = call_tool("convert", json!({
            "value": 1, "category": "length", "from_unit": "furlong", "to_unit": "meter"
        })).unwrap();

        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "UNKNOWN_UNIT");
    }

    #[test]
    fn test_convert_tool_unknown_category() {
        let result = call_tool("convert", json!({
            "value": 1, "category": "speed", "from_unit": "kph", "to_unit": "mph"
        })).unwrap();

        assert_eq!(result["error"]["code"], "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_convert_tool_nan_string() {
        let result = call_tool("convert", json!({
            "value": "NaN", "category": "time", "from_unit": "hour", "to_unit": "minute"
        })).unwrap();

        assert_eq!(result["error"]["code"], "INVALID_VALUE");
    }

    #[test]
    fn test_convert_tool_overflow() {
        let result = call_tool("convert", json!({
            "value": 1e308, "category": "weight", "from_unit": "ton", "to_unit": "milligram"
        })).unwrap();

        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "INVALID_VALUE");
    }

    #[test]
    fn test_convert_tool_missing_args() {
        let err = call_tool("convert", json!({ "category": "time" })).unwrap_err();
        assert_eq!(err.code, -32602);

        let err = call_tool("convert", json!({ "value": 1, "category": "time", "from_unit": "hour" })).unwrap_err();
        assert_eq!(err.message, "Missing to_unit argument");
    }

    #[test]
    fn test_list_units() {
        let result = call_tool("list_units", json!({ "category": "temperature" })).unwrap();
        assert_eq!(text_of(&result), "celsius, fahrenheit, kelvin");
        assert_eq!(result["structuredContent"]["category"], "temperature");

        // temperature scales have no linear factor
        let details = &result["structuredContent"]["details"];
        assert_eq!(details[0]["base"], true);
        assert!(details[0]["factor"].is_null());
    }

    #[test]
    fn test_list_units_details() {
        let result = call_tool("list_units", json!({ "category": "volume" })).unwrap();
        let details = result["structuredContent"]["details"].as_array().unwrap();
        assert_eq!(details.len(), 7);
        assert_eq!(details[0]["name"], "liter");
        assert_eq!(details[0]["base"], true);
        assert_eq!(details[2]["factor"], 3.78541);
        assert_eq!(details[2]["base"], false);
    }

    #[test]
    fn test_list_categories() {
        let result = call_tool("list_categories", json!({})).unwrap();
        let categories = result["structuredContent"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[3]["base_unit"], "liter");
    }

    #[test]
    fn test_unknown_tool() {
        let err = call_tool("eval", json!({})).unwrap_err();
        assert_eq!(err.message, "Unknown tool: eval");
    }
}
