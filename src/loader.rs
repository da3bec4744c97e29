//! Per-symbol documentation record loading.
//!
//! Missing files mean "undocumented" and are silent; malformed files are
//! logged and degrade to the same absence. Nothing here propagates a hard
//! failure to the caller.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::model::{DocBuiltinClass, DocClass};

fn read_record(base: &Path, name: &str) -> Option<String> {
    let path = base.join("classes").join(format!("{name}.json"));
    fs::read_to_string(path).ok()
}

/// Load the documentation record for a full class.
pub fn load_class_doc(base: &Path, name: &str) -> Option<DocClass> {
    let data = read_record(base, name)?;
    match serde_json::from_str(&data) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("failed to load docs for {name}: {e}");
            None
        }
    }
}

/// Load the documentation record for a builtin value type.
pub fn load_builtin_doc(base: &Path, name: &str) -> Option<DocBuiltinClass> {
    let data = read_record(base, name)?;
    match serde_json::from_str(&data) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("failed to load docs for {name}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docs_dir() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir(dir.path().join("classes")).unwrap();
        dir
    }

    #[test]
    fn missing_record_is_absent() {
        let dir = docs_dir();
        assert!(load_class_doc(dir.path(), "Foo").is_none());
        assert!(load_builtin_doc(dir.path(), "Foo").is_none());
    }

    #[test]
    fn malformed_record_degrades_to_absent() {
        let dir = docs_dir();
        let mut f = fs::File::create(dir.path().join("classes/Broken.json")).unwrap();
        f.write_all(b"{ not json").unwrap();
        assert!(load_class_doc(dir.path(), "Broken").is_none());
    }

    #[test]
    fn well_formed_record_loads() {
        let dir = docs_dir();
        fs::write(
            dir.path().join("classes/Timer.json"),
            r#"{ "name": "Timer", "brief_description": "b", "description": "d" }"#,
        )
        .unwrap();
        let doc = load_class_doc(dir.path(), "Timer").unwrap();
        assert_eq!(doc.name, "Timer");
    }
}
