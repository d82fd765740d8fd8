//! DICOM-JSON-style text form of a [`Document`].
//!
//! `{"GGGGEEEE": {"vr": "LO", "Value": [...]}}`, with sequence items as nested
//! objects. Numbers are accepted and stored as their text; person names may be
//! given as `{"Alphabetic": "..."}`.

use serde_json::{json, Map, Value as Json};

use crate::document::{DatasetId, Document};
use crate::error::CoreError;
use crate::tag::Tag;
use crate::value::Value;
use crate::vr::Vr;

pub fn document_from_json(json: &Json) -> Result<Document, CoreError> {
    let mut doc = Document::new();
    let root = doc.root();
    read_dataset(&mut doc, root, json)?;
    Ok(doc)
}

pub fn document_from_str(text: &str) -> Result<Document, CoreError> {
    let json: Json = serde_json::from_str(text).map_err(|e| CoreError::Json(e.to_string()))?;
    document_from_json(&json)
}

pub fn document_to_json(doc: &Document) -> Json {
    dataset_to_json(doc, doc.root())
}

/// One dataset (and everything below it) as a JSON object.
pub fn dataset_to_json(doc: &Document, ds: DatasetId) -> Json {
    let mut out = Map::new();
    for (tag, element) in doc.dataset(ds).iter() {
        let mut attr = Map::new();
        attr.insert("vr".into(), json!(element.vr.as_str()));
        let values: Vec<Json> = match &element.value {
            Value::Items(items) => items.iter().map(|&item| dataset_to_json(doc, item)).collect(),
            Value::Text(s) if s.is_empty() => Vec::new(),
            value => value.entries().into_iter().map(|s| scalar_to_json(element.vr, s)).collect(),
        };
        if !values.is_empty() {
            attr.insert("Value".into(), Json::Array(values));
        }
        out.insert(tag.to_key(), Json::Object(attr));
    }
    Json::Object(out)
}

fn scalar_to_json(vr: Vr, s: &str) -> Json {
    if vr == Vr::PN {
        json!({ "Alphabetic": s })
    } else {
        json!(s)
    }
}

fn read_dataset(doc: &mut Document, ds: DatasetId, json: &Json) -> Result<(), CoreError> {
    let object = json
        .as_object()
        .ok_or_else(|| CoreError::Json(format!("expected dataset object, got {json}")))?;
    for (key, attr) in object {
        let tag = Tag::from_key(key)?;
        let vr: Vr = attr
            .get("vr")
            .and_then(Json::as_str)
            .ok_or_else(|| CoreError::Json(format!("{tag}: missing \"vr\"")))?
            .parse()?;
        let values = match attr.get("Value") {
            None | Some(Json::Null) => &[][..],
            Some(Json::Array(values)) => values.as_slice(),
            Some(other) => return Err(CoreError::Json(format!("{tag}: \"Value\" must be an array, got {other}"))),
        };
        if vr == Vr::SQ {
            doc.insert_sequence(ds, tag);
            for item in values {
                let id = doc.push_item(ds, tag)?;
                read_dataset(doc, id, item)?;
            }
            continue;
        }
        let mut entries = values
            .iter()
            .map(|v| scalar_from_json(tag, v))
            .collect::<Result<Vec<_>, _>>()?;
        let value = match entries.len() {
            0 => Value::empty(),
            1 => Value::Text(entries.remove(0)),
            _ => Value::Multi(entries),
        };
        doc.insert(ds, tag, vr, value);
    }
    Ok(())
}

fn scalar_from_json(tag: Tag, json: &Json) -> Result<String, CoreError> {
    match json {
        Json::String(s) => Ok(s.clone()),
        Json::Number(n) => Ok(n.to_string()),
        Json::Null => Ok(String::new()),
        Json::Object(o) => o
            .get("Alphabetic")
            .and_then(Json::as_str)
            .map(str::to_string)
            .ok_or_else(|| CoreError::Json(format!("{tag}: unsupported value object {json}"))),
        other => Err(CoreError::Json(format!("{tag}: unsupported value {other}"))),
    }
}
