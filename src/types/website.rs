use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Top-level fields every scrape record must carry, in contract order.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "title",
    "metaDescription",
    "headings",
    "images",
    "links",
    "content",
    "hasSchema",
    "schemaTypes",
    "loadTime",
    "wordCount",
];

/// Normalized scrape output for one page. The only input the scorers see.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteData {
    pub title: String,
    pub meta_description: String,
    pub headings: Vec<Heading>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    pub content: String,
    pub has_schema: bool,
    pub schema_types: BTreeSet<String>,
    /// Milliseconds.
    pub load_time: u64,
    pub word_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    pub has_alt: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub text: String,
    pub is_internal: bool,
}

impl WebsiteData {
    /// Parse and validate a scrape record, naming the first offending field.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| AuditError::invalid_input("<document>", e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| AuditError::invalid_input("<document>", "expected a JSON object"))?;

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|field| !object.contains_key(**field))
        {
            return Err(AuditError::invalid_input(
                *missing,
                "missing required field",
            ));
        }

        for field in REQUIRED_FIELDS {
            check_field_type(field, &object[field])?;
        }
        check_elements("headings", &object["headings"], HEADING_FIELDS)?;
        check_elements("images", &object["images"], IMAGE_FIELDS)?;
        check_elements("links", &object["links"], LINK_FIELDS)?;
        check_heading_levels(&object["headings"])?;
        check_schema_types(&object["schemaTypes"])?;

        let data: WebsiteData = serde_json::from_value(value)
            .map_err(|e| AuditError::invalid_input("<document>", e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<()> {
        for (index, heading) in self.headings.iter().enumerate() {
            if !(1..=6).contains(&heading.level) {
                return Err(AuditError::invalid_input(
                    format!("headings[{index}].level"),
                    format!("heading level must be between 1 and 6, got {}", heading.level),
                ));
            }
        }
        Ok(())
    }

    pub fn count_headings(&self, level: u8) -> usize {
        self.headings
            .iter()
            .filter(|heading| heading.level == level)
            .count()
    }

    pub fn images_missing_alt(&self) -> usize {
        self.images.iter().filter(|image| !image.has_alt).count()
    }

    pub fn external_links(&self) -> usize {
        self.links.iter().filter(|link| !link.is_internal).count()
    }

    pub fn internal_links(&self) -> usize {
        self.links.iter().filter(|link| link.is_internal).count()
    }
}

fn check_field_type(field: &str, value: &Value) -> Result<()> {
    let (ok, expected) = match field {
        "title" | "metaDescription" | "content" => (value.is_string(), "a string"),
        "headings" | "images" | "links" | "schemaTypes" => (value.is_array(), "an array"),
        "hasSchema" => (value.is_boolean(), "a boolean"),
        "loadTime" | "wordCount" => (value.is_u64(), "a non-negative integer"),
        _ => (true, ""),
    };
    if ok {
        Ok(())
    } else {
        Err(AuditError::invalid_input(field, format!("expected {expected}")))
    }
}

#[derive(Clone, Copy)]
enum ElementType {
    String,
    Boolean,
    Integer,
}

/// (name, type, required) for each field of an array element.
type ElementFields = &'static [(&'static str, ElementType, bool)];

const HEADING_FIELDS: ElementFields = &[
    ("level", ElementType::Integer, true),
    ("text", ElementType::String, true),
];
const IMAGE_FIELDS: ElementFields = &[
    ("src", ElementType::String, true),
    ("alt", ElementType::String, false),
    ("hasAlt", ElementType::Boolean, true),
];
const LINK_FIELDS: ElementFields = &[
    ("href", ElementType::String, true),
    ("text", ElementType::String, false),
    ("isInternal", ElementType::Boolean, true),
];

fn check_elements(field: &str, value: &Value, fields: ElementFields) -> Result<()> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };
    for (index, element) in elements.iter().enumerate() {
        let object = element.as_object().ok_or_else(|| {
            AuditError::invalid_input(format!("{field}[{index}]"), "expected an object")
        })?;
        for (name, kind, required) in fields {
            let path = format!("{field}[{index}].{name}");
            match object.get(*name) {
                None if *required => {
                    return Err(AuditError::invalid_input(path, "missing required field"));
                }
                None => {}
                Some(inner) => {
                    let (ok, expected) = match kind {
                        ElementType::String => (inner.is_string(), "a string"),
                        ElementType::Boolean => (inner.is_boolean(), "a boolean"),
                        ElementType::Integer => (inner.is_u64(), "a non-negative integer"),
                    };
                    if !ok {
                        return Err(AuditError::invalid_input(path, format!("expected {expected}")));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Levels too large for `u8` get the same range error `validate` gives.
fn check_heading_levels(value: &Value) -> Result<()> {
    let Some(headings) = value.as_array() else {
        return Ok(());
    };
    for (index, heading) in headings.iter().enumerate() {
        if let Some(level) = heading.get("level").and_then(Value::as_u64) {
            if u8::try_from(level).is_err() {
                return Err(AuditError::invalid_input(
                    format!("headings[{index}].level"),
                    format!("heading level must be between 1 and 6, got {level}"),
                ));
            }
        }
    }
    Ok(())
}

fn check_schema_types(value: &Value) -> Result<()> {
    let Some(types) = value.as_array() else {
        return Ok(());
    };
    match types.iter().position(|entry| !entry.is_string()) {
        Some(index) => Err(AuditError::invalid_input(
            format!("schemaTypes[{index}]"),
            "expected a string",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "title": "Rust Guide",
        "metaDescription": "A guide",
        "headings": [{"level": 1, "text": "Rust"}],
        "images": [{"src": "a.png", "alt": "logo", "hasAlt": true}],
        "links": [{"href": "/docs", "text": "Docs", "isInternal": true}],
        "content": "Rust is fast.",
        "hasSchema": true,
        "schemaTypes": ["Article"],
        "loadTime": 1200,
        "wordCount": 3
    }"#;

    #[test]
    fn from_json_parses_valid_record() {
        let data = WebsiteData::from_json(VALID).expect("record should parse");
        assert_eq!(data.title, "Rust Guide");
        assert_eq!(data.count_headings(1), 1);
        assert!(data.schema_types.contains("Article"));
        assert_eq!(data.internal_links(), 1);
    }

    #[test]
    fn from_json_names_missing_field() {
        let raw = VALID.replace("\"loadTime\": 1200,", "");
        let err = WebsiteData::from_json(&raw).expect_err("missing field should fail");
        assert!(matches!(
            err,
            AuditError::InvalidInput { ref field, .. } if field == "loadTime"
        ));
    }

    #[test]
    fn from_json_rejects_wrong_type() {
        let raw = VALID.replace("\"hasSchema\": true", "\"hasSchema\": \"yes\"");
        let err = WebsiteData::from_json(&raw).expect_err("wrong type should fail");
        assert!(err.to_string().contains("hasSchema"));
    }

    #[test]
    fn from_json_rejects_negative_load_time() {
        let raw = VALID.replace("1200", "-5");
        let err = WebsiteData::from_json(&raw).expect_err("negative load time should fail");
        assert!(err.to_string().contains("loadTime"));
    }

    #[test]
    fn validate_rejects_out_of_range_heading_level() {
        let raw = VALID.replace("\"level\": 1", "\"level\": 7");
        let err = WebsiteData::from_json(&raw).expect_err("level 7 should fail");
        assert!(err.to_string().contains("headings[0].level"));
    }

    fn invalid_field(raw: &str) -> String {
        match WebsiteData::from_json(raw).expect_err("record should be rejected") {
            AuditError::InvalidInput { field, .. } => field,
            other => panic!("expected invalid input, got {other}"),
        }
    }

    #[test]
    fn from_json_names_missing_image_flag() {
        let raw = VALID.replace(", \"hasAlt\": true", "");
        assert_eq!(invalid_field(&raw), "images[0].hasAlt");
    }

    #[test]
    fn from_json_names_oversized_heading_level() {
        let raw = VALID.replace("\"level\": 1", "\"level\": 300");
        let err = WebsiteData::from_json(&raw).expect_err("level 300 should fail");
        let message = err.to_string();
        assert!(message.contains("headings[0].level"), "{message}");
        assert!(!message.contains("u8"), "{message}");
    }

    #[test]
    fn from_json_names_mistyped_link_flag() {
        let raw = VALID.replace("\"isInternal\": true", "\"isInternal\": \"yes\"");
        assert_eq!(invalid_field(&raw), "links[0].isInternal");
    }

    #[test]
    fn from_json_names_mistyped_heading_text() {
        let raw = VALID.replace("\"text\": \"Rust\"", "\"text\": 5");
        assert_eq!(invalid_field(&raw), "headings[0].text");
    }

    #[test]
    fn from_json_names_non_object_element() {
        let raw = VALID.replace(
            "[{\"href\": \"/docs\", \"text\": \"Docs\", \"isInternal\": true}]",
            "[\"/docs\"]",
        );
        assert_eq!(invalid_field(&raw), "links[0]");
    }

    #[test]
    fn from_json_names_non_string_schema_type() {
        let raw = VALID.replace("[\"Article\"]", "[\"Article\", 3]");
        assert_eq!(invalid_field(&raw), "schemaTypes[1]");
    }

    #[test]
    fn from_json_allows_missing_optional_alt() {
        let raw = VALID.replace("\"alt\": \"logo\", ", "");
        let data = WebsiteData::from_json(&raw).expect("alt is optional");
        assert_eq!(data.images[0].alt, "");
    }
}
