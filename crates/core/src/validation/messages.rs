//! Fallback messages for built-in form validators that carry no message.

/// Generic message for a validator `kind` reported against `field_name`.
pub fn default_error_message(kind: &str, field_name: &str) -> String {
    match kind {
        "required" => format!("{field_name} is required"),
        "email" => "Please enter a valid email address".to_string(),
        "minLength" => format!("{field_name} is too short"),
        "maxLength" => format!("{field_name} is too long"),
        "min" => "Value is too small".to_string(),
        "max" => "Value is too large".to_string(),
        _ => format!("{field_name} is invalid"),
    }
}
