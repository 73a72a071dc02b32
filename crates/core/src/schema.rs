//! Record schemas
//!
//! A [`RecordSchema`] is an ordered list of [`FieldDescriptor`]s plus the
//! options that govern interchange naming and, for immutable records, the
//! single designated constructor. Schemas are registered explicitly through
//! [`RecordSchema::builder`] or [`RecordSchema::build`]; nothing is discovered
//! by reflection.
//!
//! ## Invariants (checked at build time)
//!
//! - Exactly one field has the Key role, typed `int`, `string` or `timestamp`,
//!   not optional
//! - At most one field has the Vector role, with a positive dimension
//! - Only the Vector role carries `float_vector` values
//! - Declared names and resolved interchange names are unique
//!
//! A built schema is immutable and can be shared across threads.

use crate::error::SchemaError;
use crate::naming::NamingPolicy;
use crate::value::ValueType;
use crate::vector::{DistanceMetric, VectorConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Role of a field within a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Uniquely identifies the record
    Key,
    /// Descriptive content, not used for search
    Data,
    /// Fixed-length embedding used for similarity search
    Vector,
}

/// Declaration of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interchange_name: Option<String>,
    role: FieldRole,
    value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vector_dimensions: Option<i64>,
    #[serde(default)]
    metric: DistanceMetric,
    #[serde(default)]
    optional: bool,
}

impl FieldDescriptor {
    /// Key field
    pub fn key(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, FieldRole::Key, value_type)
    }

    /// Data field
    pub fn data(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, FieldRole::Data, value_type)
    }

    /// Vector field with the default (cosine) metric
    ///
    /// The dimension is validated when the schema is built.
    pub fn vector(name: impl Into<String>, dimensions: i64) -> Self {
        FieldDescriptor {
            vector_dimensions: Some(dimensions),
            ..Self::new(name, FieldRole::Vector, ValueType::FloatVector)
        }
    }

    fn new(name: impl Into<String>, role: FieldRole, value_type: ValueType) -> Self {
        FieldDescriptor {
            name: name.into(),
            interchange_name: None,
            role,
            value_type,
            vector_dimensions: None,
            metric: DistanceMetric::default(),
            optional: false,
        }
    }

    /// Override the interchange name; the naming policy is not applied to it
    pub fn rename(mut self, interchange_name: impl Into<String>) -> Self {
        self.interchange_name = Some(interchange_name.into());
        self
    }

    /// Set the distance metric tag of a vector field
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Allow the field to be absent (`null`)
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Declared field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit interchange name override, if any
    pub fn interchange_override(&self) -> Option<&str> {
        self.interchange_name.as_deref()
    }

    /// Field role
    pub fn role(&self) -> FieldRole {
        self.role
    }

    /// Semantic type
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Declared vector dimension (Vector role only)
    pub fn vector_dimensions(&self) -> Option<i64> {
        self.vector_dimensions
    }

    /// Whether the field may be absent
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Schema-wide options
///
/// Deserializable so schemas can be configured from any serde source;
/// missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    /// Naming policy for fields without an explicit override
    pub naming: NamingPolicy,
    /// Match payload field names ignoring case
    pub case_insensitive: bool,
    /// Accept int and float values written as JSON strings (`"-1"`)
    pub numbers_from_strings: bool,
}

impl SchemaOptions {
    /// Web defaults: camelCase names, case-insensitive matching, numbers
    /// accepted from strings
    pub fn web() -> Self {
        SchemaOptions {
            naming: NamingPolicy::CamelCase,
            case_insensitive: true,
            numbers_from_strings: true,
        }
    }
}

/// Designated constructor declaration: ordered parameter names
///
/// Each parameter maps onto the field with the same declared name, falling
/// back to a unique case-insensitive match (`temperatureC` -> `TemperatureC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    parameters: Vec<String>,
}

impl Constructor {
    /// Declare a constructor by its parameter names, in call order
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constructor {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// A constructor parameter resolved against the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    field: usize,
}

impl Parameter {
    /// Parameter name as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the field supplying this parameter
    pub fn field_index(&self) -> usize {
        self.field
    }
}

/// Immutable description of a record type
#[derive(Debug, Clone)]
pub struct RecordSchema {
    fields: Vec<FieldDescriptor>,
    interchange_names: Vec<String>,
    options: SchemaOptions,
    key: usize,
    vector: Option<(usize, VectorConfig)>,
    constructor: Option<Vec<Parameter>>,
}

impl RecordSchema {
    /// Build a schema with default options and no designated constructor
    pub fn build(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        Self::assemble(fields, SchemaOptions::default(), Vec::new())
    }

    /// Start explicit field registration
    pub fn builder() -> RecordSchemaBuilder {
        RecordSchemaBuilder::default()
    }

    fn assemble(
        fields: Vec<FieldDescriptor>,
        options: SchemaOptions,
        constructors: Vec<Constructor>,
    ) -> Result<Self, SchemaError> {
        Self::validate(fields, options, constructors).map_err(|e| {
            debug!(error = %e, "rejected record schema");
            e
        })
    }

    fn validate(
        fields: Vec<FieldDescriptor>,
        options: SchemaOptions,
        mut constructors: Vec<Constructor>,
    ) -> Result<Self, SchemaError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        let mut key: Option<usize> = None;
        let mut vector: Option<(usize, VectorConfig)> = None;

        for (i, field) in fields.iter().enumerate() {
            // A dimension is only meaningful on the vector field
            if field.role != FieldRole::Vector && field.vector_dimensions.is_some() {
                return Err(SchemaError::InvalidFieldType {
                    field: field.name.clone(),
                    value_type: field.value_type.name(),
                });
            }
            match field.role {
                FieldRole::Key => {
                    if let Some(first) = key {
                        return Err(SchemaError::MultipleKeyFields {
                            first: fields[first].name.clone(),
                            second: field.name.clone(),
                        });
                    }
                    let identifying = matches!(
                        field.value_type,
                        ValueType::Int | ValueType::String | ValueType::Timestamp
                    );
                    if !identifying || field.optional {
                        return Err(SchemaError::InvalidKeyType {
                            field: field.name.clone(),
                            value_type: field.value_type.name(),
                        });
                    }
                    key = Some(i);
                }
                FieldRole::Vector => {
                    if let Some((first, _)) = vector {
                        return Err(SchemaError::MultipleVectorFields {
                            first: fields[first].name.clone(),
                            second: field.name.clone(),
                        });
                    }
                    if field.value_type != ValueType::FloatVector {
                        return Err(SchemaError::InvalidFieldType {
                            field: field.name.clone(),
                            value_type: field.value_type.name(),
                        });
                    }
                    let config = VectorConfig::new(
                        &field.name,
                        field.vector_dimensions.unwrap_or(0),
                        field.metric,
                    )?;
                    vector = Some((i, config));
                }
                FieldRole::Data => {
                    if field.value_type == ValueType::FloatVector {
                        return Err(SchemaError::InvalidFieldType {
                            field: field.name.clone(),
                            value_type: field.value_type.name(),
                        });
                    }
                }
            }
        }

        let key = key.ok_or(SchemaError::NoKeyField)?;

        let interchange_names: Vec<String> = fields
            .iter()
            .map(|f| match &f.interchange_name {
                Some(name) => name.clone(),
                None => options.naming.apply(&f.name),
            })
            .collect();

        for (i, name) in interchange_names.iter().enumerate() {
            let clash = interchange_names[..i]
                .iter()
                .any(|other| names_match(other, name, options.case_insensitive));
            if clash {
                return Err(SchemaError::DuplicateInterchangeName(name.clone()));
            }
        }

        if constructors.len() > 1 {
            return Err(SchemaError::MultipleConstructors);
        }
        let constructor = match constructors.pop() {
            Some(ctor) => Some(resolve_constructor(&fields, key, ctor)?),
            None => None,
        };

        Ok(RecordSchema {
            fields,
            interchange_names,
            options,
            key,
            vector,
            constructor,
        })
    }

    /// All fields in declared order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Schema options
    pub fn options(&self) -> SchemaOptions {
        self.options
    }

    /// Field matching a payload name, honoring case-insensitivity
    pub fn field_for(&self, interchange_name: &str) -> Option<&FieldDescriptor> {
        self.index_for(interchange_name).map(|i| &self.fields[i])
    }

    /// Position of the field matching a payload name
    pub fn index_for(&self, interchange_name: &str) -> Option<usize> {
        if let Some(i) = self
            .interchange_names
            .iter()
            .position(|n| n == interchange_name)
        {
            return Some(i);
        }
        if self.options.case_insensitive {
            return self
                .interchange_names
                .iter()
                .position(|n| names_match(n, interchange_name, true));
        }
        None
    }

    /// Field by declared name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The key field
    pub fn key_field(&self) -> &FieldDescriptor {
        &self.fields[self.key]
    }

    /// Position of the key field
    pub fn key_index(&self) -> usize {
        self.key
    }

    /// The vector field, if declared
    pub fn vector_field(&self) -> Option<&FieldDescriptor> {
        self.vector.map(|(i, _)| &self.fields[i])
    }

    /// Validated configuration of the vector field, if declared
    pub fn vector_config(&self) -> Option<VectorConfig> {
        self.vector.map(|(_, config)| config)
    }

    /// Interchange name of the field at `index`
    pub fn interchange_name_at(&self, index: usize) -> &str {
        &self.interchange_names[index]
    }

    /// Interchange name of a declared field
    pub fn interchange_name(&self, field: &FieldDescriptor) -> Option<&str> {
        self.fields
            .iter()
            .position(|f| f.name == field.name)
            .map(|i| self.interchange_names[i].as_str())
    }

    /// Resolved designated constructor parameters, if declared
    pub fn constructor(&self) -> Option<&[Parameter]> {
        self.constructor.as_deref()
    }
}

fn names_match(a: &str, b: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        a.to_lowercase() == b.to_lowercase()
    } else {
        a == b
    }
}

fn resolve_constructor(
    fields: &[FieldDescriptor],
    key: usize,
    ctor: Constructor,
) -> Result<Vec<Parameter>, SchemaError> {
    let mut resolved: Vec<Parameter> = Vec::with_capacity(ctor.parameters.len());

    for name in ctor.parameters {
        let field = match fields.iter().position(|f| f.name == name) {
            Some(i) => i,
            None => {
                let candidates: Vec<usize> = fields
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| names_match(&f.name, &name, true))
                    .map(|(i, _)| i)
                    .collect();
                match candidates.as_slice() {
                    [i] => *i,
                    [] => {
                        return Err(SchemaError::InvalidConstructor(format!(
                            "parameter {name} matches no field"
                        )))
                    }
                    _ => {
                        return Err(SchemaError::InvalidConstructor(format!(
                            "parameter {name} matches more than one field"
                        )))
                    }
                }
            }
        };
        if resolved.iter().any(|p| p.field == field) {
            return Err(SchemaError::InvalidConstructor(format!(
                "field {} bound to more than one parameter",
                fields[field].name
            )));
        }
        resolved.push(Parameter { name, field });
    }

    if !resolved.iter().any(|p| p.field == key) {
        return Err(SchemaError::InvalidConstructor(format!(
            "key field {} is not a parameter",
            fields[key].name
        )));
    }

    Ok(resolved)
}

/// Explicit, ordered field registration
#[derive(Debug, Default)]
pub struct RecordSchemaBuilder {
    fields: Vec<FieldDescriptor>,
    options: SchemaOptions,
    constructors: Vec<Constructor>,
}

impl RecordSchemaBuilder {
    /// Register a key field
    pub fn key(self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.field(FieldDescriptor::key(name, value_type))
    }

    /// Register a data field
    pub fn data(self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.field(FieldDescriptor::data(name, value_type))
    }

    /// Register a vector field
    pub fn vector(self, name: impl Into<String>, dimensions: i64, metric: DistanceMetric) -> Self {
        self.field(FieldDescriptor::vector(name, dimensions).metric(metric))
    }

    /// Register a fully configured descriptor
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Set schema options
    pub fn options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    /// Designate the constructor used for immutable records
    ///
    /// Designating more than one fails at [`build`](Self::build).
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Validate and freeze the schema
    pub fn build(self) -> Result<RecordSchema, SchemaError> {
        RecordSchema::assemble(self.fields, self.options, self.constructors)
    }
}
