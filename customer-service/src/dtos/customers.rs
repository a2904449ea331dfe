//! JSON rendering of stored customer documents.
//!
//! Documents are schema-less, so a response is an ordered field map rather than a
//! fixed struct. `_id` always becomes a plain string; everything else keeps its
//! stored shape and order.

use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};

pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CustomerResponse(pub Map<String, Value>);

impl From<Document> for CustomerResponse {
    fn from(doc: Document) -> Self {
        let fields = doc
            .into_iter()
            .map(|(key, value)| {
                let value = if key == ID_FIELD {
                    Value::String(identifier_text(value))
                } else {
                    bson_to_json(value)
                };
                (key, value)
            })
            .collect();
        Self(fields)
    }
}

/// Canonical text of a document identifier: 24-char hex for ObjectIds, the raw
/// value for strings, the display form for anything else.
pub fn identifier_text(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        // Remaining types use relaxed extended JSON ($binary, $numberDecimal, ...)
        other => other.into_relaxed_extjson(),
    }
}
