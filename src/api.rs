//! Extension API model — the master list of classes, builtins, and global
//! enums that seeds the symbol table.
//!
//! The on-disk shape is a subset of Godot's `extension_api.json`: unknown
//! fields are ignored, absent collections default to empty.

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct ExtensionApi {
    #[serde(default)]
    pub classes: Vec<ApiClass>,
    #[serde(default)]
    pub builtin_classes: Vec<ApiBuiltin>,
    #[serde(default)]
    pub global_enums: Vec<ApiEnum>,
}

#[derive(Debug, Deserialize)]
pub struct ApiClass {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub inherits: Option<String>,
    #[serde(default)]
    pub enums: Vec<ApiEnum>,
    #[serde(default)]
    pub constants: Vec<ApiConstant>,
    #[serde(default)]
    pub methods: Vec<ApiMethod>,
}

#[derive(Debug, Deserialize)]
pub struct ApiBuiltin {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<ApiEnum>,
    #[serde(default)]
    pub constants: Vec<ApiConstant>,
    #[serde(default)]
    pub methods: Vec<ApiMethod>,
}

#[derive(Debug, Deserialize)]
pub struct ApiEnum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<ApiEnumValue>,
}

#[derive(Debug, Deserialize)]
pub struct ApiEnumValue {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct ApiConstant {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct ApiMethod {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ApiArgument>,
}

#[derive(Debug, Deserialize)]
pub struct ApiArgument {
    pub name: String,
    #[serde(rename = "type", default)]
    #[allow(dead_code)]
    pub ty: Option<String>,
}

/// Load and decode the extension API description.
pub fn load(path: &Path) -> Result<ExtensionApi> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read API description: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to decode API description: {}", path.display()))
}
