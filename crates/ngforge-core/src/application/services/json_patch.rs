//! Read-modify-write of JSON configuration files.
//!
//! Files are read leniently (comments are stripped first, so Angular's
//! `tsconfig*.json` files parse) and written strictly: pretty-printed with a
//! fixed indent and exactly one trailing newline. Comments do not survive a
//! write. Key order follows the document (`serde_json`'s `preserve_order`).

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::jsonc;
use crate::error::ForgeResult;

/// Indentation used when no explicit width is requested.
pub const DEFAULT_INDENT: usize = 2;

/// JSON file helper bound to a [`Filesystem`].
#[derive(Clone, Copy)]
pub struct JsonFile<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> JsonFile<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Parse a JSON (or JSON-with-comments) file.
    pub fn read<T: DeserializeOwned>(&self, path: &Path) -> ForgeResult<T> {
        let raw = self.fs.read_to_string(path)?;
        let stripped = jsonc::strip_comments(&raw);
        serde_json::from_str(&stripped).map_err(|e| {
            ApplicationError::JsonParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Write `data` with the default indent.
    pub fn write<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> ForgeResult<()> {
        self.write_with_indent(path, data, DEFAULT_INDENT)
    }

    /// Write `data` pretty-printed with `indent` spaces and a trailing newline.
    pub fn write_with_indent<T: Serialize + ?Sized>(
        &self,
        path: &Path,
        data: &T,
        indent: usize,
    ) -> ForgeResult<()> {
        let text = to_pretty_string(data, indent).map_err(|reason| ApplicationError::JsonShape {
            path: path.to_path_buf(),
            reason,
        })?;
        self.fs.write_file(path, &text)
    }

    /// Read, transform, write back. Not atomic.
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn modify<T, F>(&self, path: &Path, transform: F) -> ForgeResult<()>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(T) -> T,
    {
        let data: T = self.read(path)?;
        let modified = transform(data);
        self.write(path, &modified)?;
        debug!("JSON file updated");
        Ok(())
    }

    /// [`modify`](Self::modify) for documents whose root is an object.
    pub fn modify_object<F>(&self, path: &Path, f: F) -> ForgeResult<()>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let mut map = match self.read::<Value>(path)? {
            Value::Object(map) => map,
            other => {
                return Err(ApplicationError::JsonShape {
                    path: path.to_path_buf(),
                    reason: format!("expected an object at the root, found {}", kind_of(&other)),
                }
                .into());
            }
        };
        f(&mut map);
        self.write(path, &Value::Object(map))
    }

    /// Shallow-merge `fields` into the root object.
    ///
    /// Same-named keys are replaced wholesale, other keys keep their value
    /// and position, new keys are appended.
    pub fn update(&self, path: &Path, fields: Map<String, Value>) -> ForgeResult<()> {
        self.modify_object(path, |map| {
            for (key, value) in fields {
                map.insert(key, value);
            }
        })
    }
}

/// Nested object at `key`, created (or replacing a non-object) when needed.
pub fn object_entry<'m>(map: &'m mut Map<String, Value>, key: &str) -> &'m mut Map<String, Value> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(inner) => inner,
        _ => unreachable!("slot was just set to an object"),
    }
}

fn to_pretty_string<T: Serialize + ?Sized>(data: &T, indent: usize) -> Result<String, String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser).map_err(|e| e.to_string())?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| e.to_string())
}

fn kind_of(value: &Value) -> &'static str {
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
    use crate::application::ports::MockFilesystem;
    use serde_json::json;

    fn reading(content: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(move |_| Ok(content.to_string()));
        fs
    }

    #[test]
    fn write_uses_two_space_indent_and_trailing_newline() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("a.json") && content == "{\n  \"a\": 1\n}\n")
            .times(1)
            .returning(|_, _| Ok(()));

        JsonFile::new(&fs)
            .write(Path::new("a.json"), &json!({ "a": 1 }))
            .unwrap();
    }

    #[test]
    fn write_with_custom_indent() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|_, content| content == "{\n    \"a\": [\n        1\n    ]\n}\n")
            .times(1)
            .returning(|_, _| Ok(()));

        JsonFile::new(&fs)
            .write_with_indent(Path::new("a.json"), &json!({ "a": [1] }), 4)
            .unwrap();
    }

    #[test]
    fn read_strips_comments() {
        let fs = reading("/* header */\n{ \"strict\": true // yes\n}");
        let value: Value = JsonFile::new(&fs).read(Path::new("tsconfig.json")).unwrap();
        assert_eq!(value, json!({ "strict": true }));
    }

    #[test]
    fn read_reports_parse_errors_with_path() {
        let fs = reading("{ not json }");
        let err = JsonFile::new(&fs)
            .read::<Value>(Path::new("package.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ForgeError::Application(ApplicationError::JsonParse { ref path, .. })
                if path == Path::new("package.json")
        ));
    }

    #[test]
    fn update_preserves_siblings_and_order() {
        let mut fs = reading(r#"{"name":"demo","version":"0.0.0","private":true}"#);
        fs.expect_write_file()
            .withf(|_, content| {
                content == "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\",\n  \"private\": true,\n  \"license\": \"MIT\"\n}\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut fields = Map::new();
        fields.insert("version".into(), json!("1.0.0"));
        fields.insert("license".into(), json!("MIT"));
        JsonFile::new(&fs)
            .update(Path::new("package.json"), fields)
            .unwrap();
    }

    #[test]
    fn modify_object_rejects_array_root() {
        let fs = reading("[1, 2]");
        let err = JsonFile::new(&fs)
            .modify_object(Path::new("x.json"), |_| {})
            .unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn modify_applies_typed_transform() {
        let mut fs = reading(r#"{"scripts":{"start":"ng serve"}}"#);
        fs.expect_write_file()
            .withf(|_, content| content.contains("\"test\": \"jest\""))
            .times(1)
            .returning(|_, _| Ok(()));

        JsonFile::new(&fs)
            .modify(Path::new("package.json"), |mut pkg: Value| {
                pkg["scripts"]["test"] = json!("jest");
                pkg
            })
            .unwrap();
    }

    #[test]
    fn object_entry_creates_and_replaces() {
        let mut map = Map::new();
        map.insert("scripts".into(), json!("oops"));

        object_entry(&mut map, "scripts").insert("lint".into(), json!("ng lint"));
        object_entry(&mut map, "extra").insert("a".into(), json!(1));

        assert_eq!(
            Value::Object(map),
            json!({ "scripts": { "lint": "ng lint" }, "extra": { "a": 1 } })
        );
    }
}
