use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Used when neither `--url` nor `CRM_URL` is given
pub const DEFAULT_SERVER_URL: &str = "http://localhost:2022";

/// `--url`, then `CRM_URL`, then the local default; trailing slash dropped
pub fn server_url(url: Option<String>) -> String {
    url.or_else(|| std::env::var("CRM_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Pull the `error` message out of an API error envelope
pub fn envelope_error(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .unwrap_or("unexpected response from server")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins_and_is_trimmed() {
        assert_eq!(server_url(Some("http://crm.internal:8080/".into())), "http://crm.internal:8080");
    }

    #[test]
    fn envelope_error_falls_back() {
        assert_eq!(envelope_error(&json!({"success": false, "error": "Invalid email or password"})), "Invalid email or password");
        assert_eq!(envelope_error(&json!({})), "unexpected response from server");
    }
}
