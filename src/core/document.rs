use bson::Bson;
use serde_json::{Map, Number, Value};

use crate::Document;

/// Converts a wire document into the schema-less [`Document`] the fetcher hands out.
///
/// Field order is kept as the server sent it.
pub fn from_bson(doc: &bson::Document) -> Document {
    let mut map = Map::new();
    for (k, v) in doc {
        map.insert(k.clone(), bson_value_to_value(v));
    }
    map
}

fn bson_value_to_value(bson: &Bson) -> Value {
    match bson {
        Bson::Double(d) => Number::from_f64(*d).map(Value::Number).unwrap_or(Value::Null),
        Bson::String(s) => Value::String(s.clone()),
        Bson::Document(d) => Value::Object(from_bson(d)),
        Bson::Array(a) => Value::Array(a.iter().map(bson_value_to_value).collect()),
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Null => Value::Null,
        Bson::Int32(i) => Value::Number((*i).into()),
        Bson::Int64(i) => Value::Number((*i).into()),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        // Dates, decimals, binaries and friends keep their relaxed extended JSON shape.
        other => other.clone().into_relaxed_extjson(),
    }
}
