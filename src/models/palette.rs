use crate::error::AppError;
use color_match::ColorRecord;
use serde_json::Value;

/// Key holding the color list in a generative-service response
pub const PALETTE_KEY: &str = "palette";

/// A palette as read from disk or stdin
///
/// Two shapes are accepted:
///
/// - a bare JSON array of color records
/// - an object with a `palette` array, as returned by the palette
///   generation service (other keys are ignored)
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteDocument {
    pub records: Vec<ColorRecord>,
}

impl PaletteDocument {
    /// Parse a palette document from JSON text
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value as a palette document
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let list = match value {
            Value::Array(items) => Value::Array(items),
            Value::Object(mut map) => match map.remove(PALETTE_KEY) {
                Some(list @ Value::Array(_)) => list,
                Some(other) => return Err(AppError::UnrecognizedPalette(kind(&other))),
                None => return Err(AppError::UnrecognizedPalette("an object without \"palette\"")),
            },
            other => return Err(AppError::UnrecognizedPalette(kind(&other))),
        };
        let records: Vec<ColorRecord> = serde_json::from_value(list)?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ColorRecord> {
        self.records
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_array() {
        let doc = PaletteDocument::from_json(
            r##"[{"hex": "#FF0000", "name": "Red", "description": "d"}]"##,
        )
        .unwrap();
        assert_eq!(doc.records, vec![ColorRecord::new("#FF0000", "Red", "d")]);
    }

    #[test]
    fn test_service_response_shape() {
        let doc = PaletteDocument::from_json(
            r##"{"palette": [{"hex": "#00FF00"}, {"hex": "#0000FF"}], "model": "x"}"##,
        )
        .unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.records[1].hex, "#0000FF");
    }

    #[test]
    fn test_empty_palette() {
        let doc = PaletteDocument::from_json("[]").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_unrecognized_shapes() {
        for (input, got) in [
            (r#""nope""#, "a string"),
            ("42", "a number"),
            (r#"{"colors": []}"#, "an object without \"palette\""),
            (r##"{"palette": {"hex": "#000000"}}"##, "an object"),
        ] {
            match PaletteDocument::from_json(input) {
                Err(AppError::UnrecognizedPalette(kind)) => assert_eq!(kind, got, "{input}"),
                other => panic!("Expected UnrecognizedPalette for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_record_without_hex_rejected() {
        let result = PaletteDocument::from_json(r#"[{"name": "Nameless"}]"#);
        assert!(matches!(result, Err(AppError::Palette(_))));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = PaletteDocument::from_json("[{");
        assert!(matches!(result, Err(AppError::Palette(_))));
    }
}
