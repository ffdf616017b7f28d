//! # Violation Hints
//!
//! Maps raw schema violations onto messages a manifest author can act on.
//! Matching is by failing keyword and the shape of the instance path. A
//! violation may match several hints or none; callers keep the raw message
//! either way.

use serde_json::Value;

use crate::validate::Violation;

const TIMESTAMP_FORMAT: &str = "YYYY-MM-DDThh:mm:ssZ";

fn instance_text(instance: &Value) -> String {
    match instance {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The property name a `propertyNames` violation is about.
///
/// Depending on the validator the instance is either the offending name
/// itself or the whole parent object; in the latter case the name is the
/// JSON string the message opens with, and must be a key of the object.
fn offending_name(violation: &Violation) -> Option<String> {
    match &violation.instance {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => serde_json::Deserializer::from_str(&violation.message)
            .into_iter::<String>()
            .next()
            .and_then(Result::ok)
            .filter(|name| map.contains_key(name)),
        _ => None,
    }
}

/// Human-readable hints for `violation`, most specific first.
pub fn hints_for(violation: &Violation) -> Vec<String> {
    let mut hints = Vec::new();
    let root = violation.key_at(0);
    let owner = violation.key_at(1);
    let field = violation.key_at(2);
    let depth = violation.path.len();

    if violation.under_keyword("propertyNames") {
        let name = offending_name(violation);
        match (root, name.as_deref().or(owner)) {
            (Some("pages"), Some(title)) if depth <= 2 => hints.push(format!(
                "Page title '{title}' must not contain underscores (use spaces instead)"
            )),
            (Some("packs"), Some(id)) if depth <= 2 => hints.push(format!(
                "Pack id '{id}' must be a slug (lowercase letters, digits, hyphens, underscores)"
            )),
            _ => {}
        }
        return hints;
    }

    match violation.keyword.as_str() {
        "anyOf" => {
            if let (Some("packs"), Some(pack), 2) = (root, owner, depth) {
                hints.push(format!(
                    "Pack '{pack}' must include at least one page or depend on at least two packs"
                ));
            }
        }
        "pattern" => match (root, owner, field) {
            (Some("packs"), Some(pack), Some("tags")) if depth >= 4 => {
                hints.push(format!(
                    "Pack '{pack}' has tag '{}' that must be slugified (lowercase letters, digits, hyphens)",
                    instance_text(&violation.instance)
                ));
            }
            (Some("packs"), Some(pack), Some("version")) => {
                hints.push(format!(
                    "Pack '{pack}' must have semantic version (MAJOR.MINOR.PATCH)"
                ));
            }
            (Some("pages"), Some(title), Some("last_updated")) => {
                hints.push(format!(
                    "Page '{title}' last_updated must match {TIMESTAMP_FORMAT}"
                ));
            }
            (Some("pages"), Some(title), Some("file")) => {
                hints.push(format!(
                    "Page '{title}' file path must start with 'pages/', have an extension and not contain ':' or whitespace"
                ));
            }
            (Some("last_updated"), None, None) => {
                hints.push(format!("'last_updated' must match {TIMESTAMP_FORMAT}"));
            }
            (Some("name"), None, None) => {
                hints.push(
                    "'name' may include letters, digits, spaces, hyphens, colons, underscores"
                        .to_string(),
                );
            }
            (Some("schema_version"), None, None) => {
                hints.push("'schema_version' must be a semantic version (MAJOR.MINOR.PATCH)".to_string());
            }
            _ => {}
        },
        "uniqueItems" => match (root, owner, field) {
            (Some("packs"), Some(pack), Some("tags")) => {
                hints.push(format!("Pack '{pack}' has duplicate tags"));
            }
            (Some("packs"), Some(pack), Some("pages")) => {
                hints.push(format!("Pack '{pack}' has duplicate page titles in 'pages'"));
            }
            (Some("packs"), Some(pack), Some("depends_on")) => {
                hints.push(format!("Pack '{pack}' has duplicate entries in 'depends_on'"));
            }
            _ => {}
        },
        "additionalProperties" => match (root, owner) {
            (Some("pages"), Some(title)) if depth == 2 => {
                hints.push(format!("Page '{title}' contains unknown field(s)"));
            }
            (Some("packs"), Some(pack)) if depth == 2 => {
                hints.push(format!("Pack '{pack}' contains unknown field(s)"));
            }
            (None, None) => {
                hints.push("Manifest contains unknown top-level field(s)".to_string());
            }
            _ => {}
        },
        "minLength" => {
            if root == Some("name") && depth == 1 {
                hints.push("'name' must not be empty".to_string());
            }
        }
        "type" => match (root, owner, field) {
            (Some("packs"), Some(pack), Some("pages")) if depth == 3 => {
                hints.push(format!("Pack '{pack}' pages must be an array"));
            }
            (Some("packs"), Some(pack), Some("depends_on")) if depth == 3 => {
                hints.push(format!("Pack '{pack}' depends_on must be an array"));
            }
            _ => {}
        },
        "required" => match (root, owner) {
            (Some("pages"), Some(title)) if depth == 2 => {
                hints.push(format!("Page '{title}' is missing required field(s)"));
            }
            (Some("packs"), Some(pack)) if depth == 2 => {
                hints.push(format!("Pack '{pack}' is missing required field(s)"));
            }
            _ => {}
        },
        _ => {}
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_pointer;
    use serde_json::json;

    fn violation(pointer: &str, schema_path: &str, instance: Value) -> Violation {
        Violation {
            instance_path: pointer.to_string(),
            path: parse_pointer(pointer),
            schema_path: schema_path.to_string(),
            keyword: schema_path.rsplit('/').next().unwrap().to_string(),
            message: "raw".to_string(),
            instance,
        }
    }

    #[test]
    fn any_of_hint_names_pack() {
        let v = violation(
            "/packs/p",
            "/properties/packs/additionalProperties/anyOf",
            json!({"version": "1.0.0"}),
        );
        assert_eq!(
            hints_for(&v),
            vec!["Pack 'p' must include at least one page or depend on at least two packs"]
        );
    }

    #[test]
    fn tag_slug_hint_quotes_tag() {
        let v = violation(
            "/packs/p/tags/0",
            "/properties/packs/additionalProperties/properties/tags/items/pattern",
            json!("Bad Tag"),
        );
        assert_eq!(
            hints_for(&v),
            vec!["Pack 'p' has tag 'Bad Tag' that must be slugified (lowercase letters, digits, hyphens)"]
        );
    }

    #[test]
    fn pack_version_hint() {
        let v = violation(
            "/packs/p/version",
            "/properties/packs/additionalProperties/properties/version/pattern",
            json!("v1"),
        );
        assert!(hints_for(&v)[0].contains("semantic version"));
    }

    #[test]
    fn timestamp_hints() {
        let page = violation(
            "/pages/Template:X/last_updated",
            "/properties/pages/additionalProperties/properties/last_updated/pattern",
            json!("yesterday"),
        );
        assert_eq!(
            hints_for(&page),
            vec!["Page 'Template:X' last_updated must match YYYY-MM-DDThh:mm:ssZ"]
        );
        let root = violation("/last_updated", "/properties/last_updated/pattern", json!("x"));
        assert_eq!(hints_for(&root), vec!["'last_updated' must match YYYY-MM-DDThh:mm:ssZ"]);
    }

    #[test]
    fn pages_type_hint() {
        let v = violation(
            "/packs/p/pages",
            "/properties/packs/additionalProperties/properties/pages/type",
            json!("Template:X"),
        );
        assert_eq!(hints_for(&v), vec!["Pack 'p' pages must be an array"]);
    }

    #[test]
    fn duplicate_hints() {
        let tags = violation(
            "/packs/p/tags",
            "/properties/packs/additionalProperties/properties/tags/uniqueItems",
            json!(["a", "a"]),
        );
        assert_eq!(hints_for(&tags), vec!["Pack 'p' has duplicate tags"]);
        let pages = violation(
            "/packs/p/pages",
            "/properties/packs/additionalProperties/properties/pages/uniqueItems",
            json!(["A", "A"]),
        );
        assert_eq!(hints_for(&pages), vec!["Pack 'p' has duplicate page titles in 'pages'"]);
    }

    #[test]
    fn name_hints() {
        let empty = violation("/name", "/properties/name/minLength", json!(""));
        assert_eq!(hints_for(&empty), vec!["'name' must not be empty"]);
        let bad = violation("/name", "/properties/name/pattern", json!("a/b"));
        assert!(hints_for(&bad)[0].starts_with("'name' may include"));
    }

    #[test]
    fn unknown_fields_and_required() {
        let page = violation(
            "/pages/A",
            "/properties/pages/additionalProperties/additionalProperties",
            json!({}),
        );
        assert_eq!(hints_for(&page), vec!["Page 'A' contains unknown field(s)"]);
        let pack = violation(
            "/packs/p",
            "/properties/packs/additionalProperties/required",
            json!({}),
        );
        assert_eq!(hints_for(&pack), vec!["Pack 'p' is missing required field(s)"]);
    }

    #[test]
    fn underscore_title_hint() {
        let v = violation(
            "/pages",
            "/properties/pages/propertyNames/pattern",
            json!("Template:Bad_Title"),
        );
        assert_eq!(
            hints_for(&v),
            vec!["Page title 'Template:Bad_Title' must not contain underscores (use spaces instead)"]
        );
    }

    #[test]
    fn property_name_hints_read_the_name_from_the_message() {
        let mut page = violation(
            "/pages",
            "/properties/pages/propertyNames/pattern",
            json!({"Template:Bad_Title": {"file": "pages/a.wiki"}, "Template:Ok": {}}),
        );
        page.message = r#""Template:Bad_Title" does not match "^[^_]+$""#.to_string();
        assert_eq!(
            hints_for(&page),
            vec!["Page title 'Template:Bad_Title' must not contain underscores (use spaces instead)"]
        );

        let mut pack = violation(
            "/packs",
            "/properties/packs/propertyNames/pattern",
            json!({"Bad Pack": {"version": "1.0.0"}}),
        );
        pack.message = r#""Bad Pack" does not match "^[a-z0-9][a-z0-9_-]*$""#.to_string();
        assert_eq!(
            hints_for(&pack),
            vec!["Pack id 'Bad Pack' must be a slug (lowercase letters, digits, hyphens, underscores)"]
        );
    }

    #[test]
    fn property_name_not_in_object_has_no_hint() {
        let mut v = violation(
            "/pages",
            "/properties/pages/propertyNames/pattern",
            json!({"Template:Ok": {}}),
        );
        v.message = r#""Elsewhere_X" does not match "^[^_]+$""#.to_string();
        assert!(hints_for(&v).is_empty());
    }

    #[test]
    fn unmatched_shapes_have_no_hint() {
        let v = violation("/pages/A/description", "/properties/pages/additionalProperties/properties/description/type", json!(3));
        assert!(hints_for(&v).is_empty());
    }
}
