//! Defensive access into a loosely-shaped JSON document
//!
//! Every lookup yields a [`Node`], which is either a present value or absent.
//! Accessors substitute empty defaults, so a missing section, a `null`, or a
//! value of the wrong type all degrade to "nothing here" instead of failing.

use indexmap::IndexMap;
use serde_json::Value;

/// A position in the profile document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Present(&'a Value),
    Absent,
}

impl<'a> Node<'a> {
    /// Wrap a value; `null` counts as absent
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Null) | None => Node::Absent,
            Some(v) => Node::Present(v),
        }
    }

    /// Child field of an object node
    pub fn get(self, key: &str) -> Node<'a> {
        match self {
            Node::Present(Value::Object(map)) => Node::of(map.get(key)),
            _ => Node::Absent,
        }
    }

    /// First of `self` and `other` that has non-blank text
    pub fn or(self, other: Node<'a>) -> Node<'a> {
        if self.text().is_empty() { other } else { self }
    }

    pub fn is_object(self) -> bool {
        matches!(self, Node::Present(Value::Object(_)))
    }

    /// Scalar as trimmed text; non-scalars and absence yield ""
    pub fn text(self) -> String {
        match self {
            Node::Present(Value::String(s)) => s.trim().to_string(),
            Node::Present(Value::Number(n)) => n.to_string(),
            Node::Present(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Scalar text, or `default` when blank
    pub fn text_or(self, default: &str) -> String {
        let text = self.text();
        if text.is_empty() { default.to_string() } else { text }
    }

    /// Elements of an array node; anything else is an empty list
    pub fn items(self) -> Vec<Node<'a>> {
        match self {
            Node::Present(Value::Array(values)) => values.iter().map(|v| Node::of(Some(v))).collect(),
            _ => Vec::new(),
        }
    }

    /// Elements of an array node rendered as text, one per item.
    /// Blank and non-scalar items keep their place as "".
    pub fn lines(self) -> Vec<String> {
        self.items().into_iter().map(Node::text).collect()
    }

    /// Key/value pairs of an object node in document order; blank values stay as ""
    pub fn pairs(self) -> IndexMap<String, String> {
        match self {
            Node::Present(Value::Object(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), Node::of(Some(v)).text()))
                .collect(),
            _ => IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_through_missing_and_wrong_types() {
        let doc = json!({"a": {"b": "x"}, "n": null, "s": "str"});
        let root = Node::of(Some(&doc));
        assert_eq!(root.get("a").get("b").text(), "x");
        assert_eq!(root.get("missing").get("b"), Node::Absent);
        assert_eq!(root.get("n"), Node::Absent);
        assert_eq!(root.get("s").get("b"), Node::Absent);
    }

    #[test]
    fn test_text_defaults() {
        let doc = json!({"blank": "   ", "num": 3, "flag": true, "list": [1]});
        let root = Node::of(Some(&doc));
        assert_eq!(root.get("blank").text(), "");
        assert_eq!(root.get("blank").text_or("Value"), "Value");
        assert_eq!(root.get("num").text(), "3");
        assert_eq!(root.get("flag").text(), "true");
        assert_eq!(root.get("list").text(), "");
    }

    #[test]
    fn test_lines_keep_every_item() {
        let doc = json!({"l": ["one", "", {"x": 1}, null, 2], "not_list": "one"});
        let root = Node::of(Some(&doc));
        assert_eq!(root.get("l").lines(), vec!["one", "", "", "", "2"]);
        assert!(root.get("not_list").lines().is_empty());
    }

    #[test]
    fn test_pairs_preserve_document_order() {
        let doc: Value = serde_json::from_str(r#"{"m": {"English": "B3", "Chinese": "A2", "Art": ""}}"#).unwrap();
        let pairs = Node::of(Some(&doc)).get("m").pairs();
        let keys: Vec<&str> = pairs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["English", "Chinese", "Art"]);
        assert_eq!(pairs["Art"], "");
    }

    #[test]
    fn test_or_prefers_non_blank() {
        let doc = json!({"a": "", "b": "fallback", "c": "first"});
        let root = Node::of(Some(&doc));
        assert_eq!(root.get("a").or(root.get("b")).text(), "fallback");
        assert_eq!(root.get("c").or(root.get("b")).text(), "first");
        assert_eq!(root.get("x").or(root.get("y")), Node::Absent);
    }
}
