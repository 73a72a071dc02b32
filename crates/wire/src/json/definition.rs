//! Storage definition encoding
//!
//! Describes a schema to an external vector index: every field with its role
//! and type, and for the vector field its dimension and distance metric tag.

use serde_json::{json, Value as Json};
use vecrecord_core::{FieldRole, RecordSchema};

/// Encode the storage layout of a schema to JSON
pub fn encode_storage_definition(schema: &RecordSchema) -> String {
    let fields: Vec<Json> = schema
        .fields()
        .iter()
        .enumerate()
        .map(|(i, desc)| {
            let mut field = json!({
                "name": desc.name(),
                "interchange_name": schema.interchange_name_at(i),
                "role": role_name(desc.role()),
                "type": desc.value_type().name(),
                "optional": desc.is_optional(),
            });
            if let (FieldRole::Vector, Some(config)) = (desc.role(), schema.vector_config()) {
                field["dimension"] = json!(config.dimension);
                field["metric"] = json!(config.metric.name());
            }
            field
        })
        .collect();

    json!({ "fields": fields }).to_string()
}

fn role_name(role: FieldRole) -> &'static str {
    match role {
        FieldRole::Key => "key",
        FieldRole::Data => "data",
        FieldRole::Vector => "vector",
    }
}
