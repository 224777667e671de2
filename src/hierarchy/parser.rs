use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::error::HierarchyError;
use crate::hierarchy::{HierarchyNode, NodeKind};

/// Node as it appears in the source document, before shape and type checks.
#[derive(Debug, Deserialize)]
struct RawNode {
    name: Option<Value>,
    value: Option<Value>,
    children: Option<Value>,
    details: Option<Value>,
}

/// Parse a hierarchy document into a validated `HierarchyNode` tree.
///
/// Only unparseable JSON is reported as `Json`; every shape or type problem
/// inside the document is `MalformedInput` with the offending node's path.
/// Internal values are recomputed as the sum of their children.
pub fn parse_document(json: &str) -> Result<HierarchyNode, HierarchyError> {
    let doc: Value = serde_json::from_str(json)?;
    let root = convert(doc, 0, "")?;
    log::info!(
        "parsed hierarchy '{}': {} categories, {} nodes",
        root.name,
        root.children.len(),
        root.node_count()
    );
    Ok(root)
}

fn convert(doc: Value, depth: usize, parent_path: &str) -> Result<HierarchyNode, HierarchyError> {
    let raw = RawNode::deserialize(doc)
        .map_err(|_| HierarchyError::malformed(child_path(parent_path, "?"), "node is not an object"))?;

    let name = match raw.name {
        Some(Value::String(name)) => name,
        Some(_) => {
            return Err(HierarchyError::malformed(
                child_path(parent_path, "?"),
                "name is not a string",
            ))
        }
        None => return Err(HierarchyError::malformed(child_path(parent_path, "?"), "missing name")),
    };
    let path = child_path(parent_path, &name);

    let kind = NodeKind::from_depth(depth)
        .ok_or_else(|| HierarchyError::malformed(&path, "nested deeper than four levels"))?;

    if kind == NodeKind::Leaf {
        match raw.children {
            None => {}
            Some(Value::Array(children)) if children.is_empty() => {}
            Some(Value::Array(_)) => {
                return Err(HierarchyError::malformed(&path, "nested deeper than four levels"))
            }
            Some(_) => return Err(HierarchyError::malformed(&path, "children is not an array")),
        }
        let value = match raw.value {
            Some(value) => number(value, &path, "leaf value is not a number")?,
            None => return Err(HierarchyError::malformed(&path, "leaf is missing a numeric value")),
        };
        let mut leaf = HierarchyNode::leaf(name, value);
        leaf.details = match raw.details {
            None => None,
            Some(Value::Object(details)) => Some(details),
            Some(_) => return Err(HierarchyError::malformed(&path, "details is not an object")),
        };
        return Ok(leaf);
    }

    let raw_children = match raw.children {
        Some(Value::Array(children)) if children.is_empty() => {
            return Err(HierarchyError::malformed(
                &path,
                format!("no children at depth {}", depth),
            ))
        }
        Some(Value::Array(children)) => children,
        None => return Err(HierarchyError::malformed(&path, "missing children")),
        Some(_) => return Err(HierarchyError::malformed(&path, "children is not an array")),
    };

    let declared = raw
        .value
        .map(|v| number(v, &path, "value is not a number"))
        .transpose()?;

    let mut seen = HashSet::with_capacity(raw_children.len());
    let mut children = Vec::with_capacity(raw_children.len());
    for raw_child in raw_children {
        let child = convert(raw_child, depth + 1, &path)?;
        if !seen.insert(child.name.clone()) {
            return Err(HierarchyError::malformed(
                &path,
                format!("duplicate child name '{}'", child.name),
            ));
        }
        children.push(child);
    }

    if raw.details.is_some() {
        log::warn!("{}: details on a non-leaf node are ignored", path);
    }

    let node = HierarchyNode::branch(name, children);
    if let Some(declared) = declared {
        if (declared - node.value).abs() > f64::EPSILON * node.value.abs().max(1.0) {
            log::warn!(
                "{}: declared value {} differs from sum of children {}",
                path,
                declared,
                node.value
            );
        }
    }
    Ok(node)
}

fn number(value: Value, path: &str, reason: &str) -> Result<f64, HierarchyError> {
    value
        .as_f64()
        .ok_or_else(|| HierarchyError::malformed(path, reason))
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "name": "Root",
        "children": [
            {"name": "Top", "children": [
                {"name": "Lagos", "children": [
                    {"name": "Ikeja", "value": 60, "details": {"order_count": 12, "top_size": "M"}}
                ]},
                {"name": "Abuja", "children": [{"name": "Wuse", "value": 40}]}
            ]}
        ]
    }"#;

    #[test]
    fn parse_sums_internal_values() {
        let root = parse_document(DOC).unwrap();
        assert_eq!(root.name, "Root");
        assert_eq!(root.value, 100.0);
        let top = root.child("Top").unwrap();
        assert_eq!(top.child("Lagos").unwrap().value, 60.0);
        assert_eq!(top.child("Abuja").unwrap().value, 40.0);
    }

    #[test]
    fn leaf_details_keep_document_order() {
        let root = parse_document(DOC).unwrap();
        let ikeja = &root.children[0].children[0].children[0];
        let keys: Vec<&str> = ikeja
            .details
            .as_ref()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, ["order_count", "top_size"]);
    }

    #[test]
    fn rejects_fifth_level() {
        let doc = r#"{"name":"Root","children":[{"name":"A","children":[{"name":"B","children":[
            {"name":"C","children":[{"name":"D","value":1}]}]}]}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, .. } if path == "Root/A/B/C"),
            "{err}"
        );
    }

    #[test]
    fn rejects_missing_children_on_category() {
        let doc = r#"{"name":"Root","children":[{"name":"A"}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, HierarchyError::MalformedInput { ref reason, .. } if reason == "missing children"));
    }

    #[test]
    fn rejects_missing_name() {
        let doc = r#"{"name":"Root","children":[{"children":[]}]}"#;
        assert!(matches!(
            parse_document(doc),
            Err(HierarchyError::MalformedInput { .. })
        ));
    }

    #[test]
    fn rejects_leaf_without_value() {
        let doc = r#"{"name":"Root","children":[{"name":"A","children":[{"name":"B","children":[{"name":"C"}]}]}]}"#;
        assert!(matches!(
            parse_document(doc),
            Err(HierarchyError::MalformedInput { ref path, .. }) if path == "Root/A/B/C"
        ));
    }

    #[test]
    fn rejects_duplicate_siblings() {
        let doc = r#"{"name":"Root","children":[
            {"name":"A","children":[{"name":"S","children":[{"name":"L","value":1}]}]},
            {"name":"A","children":[{"name":"S","children":[{"name":"L","value":2}]}]}]}"#;
        assert!(matches!(
            parse_document(doc),
            Err(HierarchyError::MalformedInput { ref reason, .. }) if reason.contains("duplicate")
        ));
    }

    #[test]
    fn rejects_string_leaf_value() {
        let doc = r#"{"name":"Root","children":[{"name":"A","children":[{"name":"B","children":[
            {"name":"C","value":"12"}]}]}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, ref reason }
                if path == "Root/A/B/C" && reason == "leaf value is not a number"),
            "{err}"
        );
    }

    #[test]
    fn rejects_non_string_name() {
        let doc = r#"{"name":"Root","children":[{"name":7,"children":[]}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, ref reason }
                if path == "Root/?" && reason == "name is not a string"),
            "{err}"
        );
    }

    #[test]
    fn rejects_children_object() {
        let doc = r#"{"name":"Root","children":[{"name":"A","children":{}}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, ref reason }
                if path == "Root/A" && reason == "children is not an array"),
            "{err}"
        );
    }

    #[test]
    fn rejects_non_object_node() {
        let doc = r#"{"name":"Root","children":[42]}"#;
        assert!(matches!(
            parse_document(doc),
            Err(HierarchyError::MalformedInput { ref reason, .. }) if reason == "node is not an object"
        ));
    }

    #[test]
    fn rejects_childless_category_and_state() {
        let doc = r#"{"name":"Root","children":[{"name":"A","value":5,"children":[]}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, ref reason }
                if path == "Root/A" && reason == "no children at depth 1"),
            "{err}"
        );

        let doc = r#"{"name":"Root","children":[{"name":"A","children":[{"name":"B","children":[]}]}]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, ref reason }
                if path == "Root/A/B" && reason == "no children at depth 2"),
            "{err}"
        );
    }

    #[test]
    fn leaf_may_carry_empty_children() {
        let doc = r#"{"name":"Root","children":[{"name":"A","children":[{"name":"B","children":[
            {"name":"C","value":3,"children":[]}]}]}]}"#;
        let root = parse_document(doc).unwrap();
        assert_eq!(root.value, 3.0);
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(parse_document("{"), Err(HierarchyError::Json(_))));
    }
}
