//! Documented entity records — the decoded shape of per-class documentation
//! files. Markup-bearing fields stay raw here; transformation happens later.

use serde::Deserialize;

/// Documentation record for a full class.
#[derive(Debug, Default, Deserialize)]
pub struct DocClass {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub inherits: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub version: Option<String>,
    #[serde(default)]
    pub brief_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tutorials: Vec<DocTutorial>,
    #[serde(default)]
    pub methods: Vec<DocMethod>,
    #[serde(default)]
    pub members: Vec<DocMember>,
    #[serde(default)]
    pub signals: Vec<DocSignal>,
    #[serde(default)]
    pub constants: Vec<DocConstant>,
}

/// Documentation record for a builtin value type.
#[derive(Debug, Default, Deserialize)]
pub struct DocBuiltinClass {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub version: Option<String>,
    #[serde(default)]
    pub brief_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tutorials: Vec<DocTutorial>,
    #[serde(default)]
    pub constructors: Vec<DocMethod>,
    #[serde(default)]
    pub methods: Vec<DocMethod>,
    #[serde(default)]
    pub members: Vec<DocMember>,
    #[serde(default)]
    pub constants: Vec<DocConstant>,
    #[serde(default)]
    pub operators: Vec<DocMethod>,
}

#[derive(Debug, Deserialize)]
pub struct DocTutorial {
    pub title: String,
    pub link: String,
}

/// Shared shape for methods, constructors, and operators.
#[derive(Debug, Default, Deserialize)]
pub struct DocMethod {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub qualifiers: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub params: Vec<DocParam>,
}

/// Parameter indices are unique and order-preserving within one overload.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct DocParam {
    pub index: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Deserialize)]
pub struct DocSignal {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub params: Vec<DocParam>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct DocMember {
    pub name: String,
    #[serde(rename = "type", default)]
    #[allow(dead_code)]
    pub ty: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct DocConstant {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_class_record() {
        let doc: DocClass = serde_json::from_str(
            r#"{
                "name": "Node2D",
                "inherits": "Node",
                "brief_description": "A 2D node.",
                "description": "Long text.",
                "tutorials": [ { "title": "Movement", "link": "https://example.com" } ],
                "methods": [
                    { "name": "set_position",
                      "description": "Moves the node.",
                      "params": [ { "index": 0, "name": "position", "type": "Vector2" } ] }
                ],
                "signals": [ { "name": "moved", "description": "Emitted on move." } ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.name, "Node2D");
        assert_eq!(doc.inherits.as_deref(), Some("Node"));
        assert_eq!(doc.methods[0].params[0].name, "position");
        assert_eq!(doc.signals[0].name, "moved");
        assert!(doc.constants.is_empty());
    }

    #[test]
    fn decodes_builtin_record() {
        let doc: DocBuiltinClass = serde_json::from_str(
            r#"{
                "name": "Vector2",
                "brief_description": "A 2D vector.",
                "description": "",
                "constructors": [ { "name": "Vector2", "description": "Zero vector." } ],
                "operators": [ { "name": "operator +", "description": "Adds." } ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.constructors.len(), 1);
        assert_eq!(doc.operators[0].name, "operator +");
    }
}
