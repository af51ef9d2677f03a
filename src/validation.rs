use crate::error::ApiError;
use serde_json::Value;

/// Required-field schema for a JSON request body.
///
/// Fields are checked in declared order and the first unsatisfied one decides
/// the reported message, even when several are absent.
pub struct BodySchema {
    required: &'static [&'static str],
    message: fn(&str) -> String,
}

pub const PROJECT: BodySchema = BodySchema {
    required: &["name"],
    message: project_message,
};

pub const PALETTE: BodySchema = BodySchema {
    required: &["name", "color1", "color2", "color3", "color4", "color5"],
    message: palette_message,
};

impl BodySchema {
    /// A field is satisfied only when present as a non-empty string.
    pub fn check(&self, body: &Value) -> Result<(), ApiError> {
        for field in self.required {
            match body.get(field) {
                Some(Value::String(value)) if !value.is_empty() => {}
                _ => return Err(ApiError::Validation((self.message)(field))),
            }
        }
        Ok(())
    }
}

/// Pulls a string field out of an already-validated body.
pub fn required_str<'a>(body: &'a Value, field: &str) -> &'a str {
    body.get(field).and_then(Value::as_str).unwrap_or_default()
}

fn project_message(_missing: &str) -> String {
    "Expected format of request: { name: <String> }.".to_string()
}

// Byte-exact legacy message: trailing space after the colon, 8- and 10-space
// indents. Existing clients match on the full string.
fn palette_message(missing: &str) -> String {
    format!(
        "Expected format: \n        {{ name: <String>,\n          color1: <String>,\n          color2: <String>,\n          color3: <String>,\n          color4: <String>,\n          color5: <String> }}. You're missing a \"{missing}\" property."
    )
}
