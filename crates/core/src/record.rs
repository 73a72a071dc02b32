//! Record access and two-phase assembly
//!
//! Records expose their fields through [`Record::field`]. Decoding never
//! touches a record until every value has been gathered and validated:
//!
//! 1. **Gathering**: a [`FieldValues`] collects typed values per field.
//! 2. **Constructed**: [`FieldValues::into_mutable`] or
//!    [`FieldValues::construct`] consumes the gathered values and produces
//!    the record, calling the designated constructor exactly once.
//! 3. **Failed**: any error consumes the gathered values too.
//!
//! Both terminal states consume `FieldValues`, so a partially built record
//! is never observable.

use crate::error::{DecodeError, EncodeError};
use crate::schema::{FieldDescriptor, FieldRole, RecordSchema};
use crate::value::{Value, WrongType};
use tracing::{debug, trace};

/// Read access to the fields of a record
pub trait Record {
    /// Current value of a declared field, by declared name
    ///
    /// `None` means the record does not carry the field.
    fn field(&self, name: &str) -> Option<Value>;
}

/// Record built empty and filled field by field
pub trait MutableRecord: Record + Default {
    /// Assign a decoded value. Names the record does not know are ignored.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), WrongType>;
}

/// Record built atomically through its designated constructor
pub trait ImmutableRecord: Record + Sized {
    /// The designated constructor
    ///
    /// Receives every parameter declared by the schema's
    /// [`Constructor`](crate::Constructor), in declaration order.
    fn construct(args: ConstructorArgs) -> Result<Self, DecodeError>;
}

/// Named arguments for a designated constructor
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorArgs {
    entries: Vec<(String, Value)>,
}

impl ConstructorArgs {
    /// Number of arguments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the constructor takes no arguments
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow an argument by parameter name
    pub fn get(&self, parameter: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == parameter)
            .map(|(_, v)| v)
    }

    /// Move an argument out, converted to `T`
    pub fn take<T>(&mut self, parameter: &str) -> Result<T, DecodeError>
    where
        T: TryFrom<Value, Error = WrongType>,
    {
        let value = self.take_value(parameter)?;
        T::try_from(value).map_err(|e| wrong_type(parameter, e))
    }

    /// Move an optional argument out; `Null` becomes `None`
    pub fn take_optional<T>(&mut self, parameter: &str) -> Result<Option<T>, DecodeError>
    where
        T: TryFrom<Value, Error = WrongType>,
    {
        match self.take_value(parameter)? {
            Value::Null => Ok(None),
            value => T::try_from(value)
                .map(Some)
                .map_err(|e| wrong_type(parameter, e)),
        }
    }

    /// Arguments in parameter order
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    fn take_value(&mut self, parameter: &str) -> Result<Value, DecodeError> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == parameter)
            .map(|(_, v)| std::mem::replace(v, Value::Null))
            .ok_or_else(|| DecodeError::MissingConstructorArgument(parameter.to_string()))
    }
}

fn wrong_type(field: &str, e: WrongType) -> DecodeError {
    DecodeError::WrongType {
        field: field.to_string(),
        expected: e.expected,
        actual: e.actual,
    }
}

/// Read and validate every field of a record, in declared order
pub fn extract<R: Record + ?Sized>(
    schema: &RecordSchema,
    record: &R,
) -> Result<Vec<Value>, EncodeError> {
    schema
        .fields()
        .iter()
        .map(|desc| {
            let value = record.field(desc.name()).unwrap_or(Value::Null);
            check_encodable(schema, desc, &value)?;
            Ok(value)
        })
        .collect::<Result<Vec<_>, EncodeError>>()
        .map_err(|e| {
            debug!(error = %e, "record rejected for encoding");
            e
        })
}

fn check_encodable(
    schema: &RecordSchema,
    desc: &FieldDescriptor,
    value: &Value,
) -> Result<(), EncodeError> {
    let Some(actual) = value.value_type() else {
        return if desc.is_optional() {
            Ok(())
        } else {
            Err(EncodeError::MissingField(desc.name().to_string()))
        };
    };

    if actual != desc.value_type() {
        return Err(EncodeError::WrongType {
            field: desc.name().to_string(),
            expected: desc.value_type().name(),
            actual: actual.name(),
        });
    }

    match value {
        Value::Float(f) if !f.is_finite() => {
            Err(EncodeError::NonFiniteValue(desc.name().to_string()))
        }
        Value::Timestamp(ts) if ts.offset().local_minus_utc() % 60 != 0 => {
            Err(EncodeError::OffsetNotRepresentable {
                field: desc.name().to_string(),
                offset_seconds: ts.offset().local_minus_utc(),
            })
        }
        Value::Vector(v) => {
            let expected = expected_dimension(schema, desc);
            if v.len() != expected {
                return Err(EncodeError::DimensionMismatch {
                    field: desc.name().to_string(),
                    expected,
                    actual: v.len(),
                });
            }
            if v.iter().any(|x| !x.is_finite()) {
                return Err(EncodeError::NonFiniteValue(desc.name().to_string()));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn expected_dimension(schema: &RecordSchema, desc: &FieldDescriptor) -> usize {
    // Only the vector field carries vectors, so its config is always present here.
    match (desc.role(), schema.vector_config()) {
        (FieldRole::Vector, Some(config)) => config.dimension,
        _ => 0,
    }
}

/// Values gathered for one record, before the record exists
#[derive(Debug)]
pub struct FieldValues<'s> {
    schema: &'s RecordSchema,
    values: Vec<Option<Value>>,
}

impl<'s> FieldValues<'s> {
    /// Start gathering for `schema`
    pub fn new(schema: &'s RecordSchema) -> Self {
        FieldValues {
            schema,
            values: vec![None; schema.fields().len()],
        }
    }

    /// The schema values are gathered for
    pub fn schema(&self) -> &'s RecordSchema {
        self.schema
    }

    /// Store the value of the field at `index`, replacing any earlier one
    ///
    /// Fails with `MalformedPayload` when the schema has no field at `index`.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), DecodeError> {
        let schema = self.schema;
        let desc = schema.fields().get(index).ok_or_else(|| {
            DecodeError::MalformedPayload(format!(
                "no field at index {index} (schema has {})",
                schema.fields().len()
            ))
        })?;

        match value.value_type() {
            None if desc.is_optional() => {}
            None => {
                return Err(DecodeError::WrongType {
                    field: desc.name().to_string(),
                    expected: desc.value_type().name(),
                    actual: "null",
                })
            }
            Some(actual) if actual != desc.value_type() => {
                return Err(DecodeError::WrongType {
                    field: desc.name().to_string(),
                    expected: desc.value_type().name(),
                    actual: actual.name(),
                })
            }
            Some(_) => {}
        }

        if let Value::Vector(v) = &value {
            let expected = expected_dimension(schema, desc);
            if v.len() != expected {
                return Err(DecodeError::DimensionMismatch {
                    field: desc.name().to_string(),
                    expected,
                    actual: v.len(),
                });
            }
        }

        self.values[index] = Some(value);
        Ok(())
    }

    /// Value gathered for the field at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Allocate a default record and assign every gathered field
    ///
    /// Fails with `MissingRequiredField` when the key was not gathered.
    pub fn into_mutable<R: MutableRecord>(self) -> Result<R, DecodeError> {
        let key = self.schema.key_index();
        if self.values[key].is_none() {
            let e = DecodeError::MissingRequiredField(self.schema.key_field().name().to_string());
            debug!(error = %e, "record rejected for decoding");
            return Err(e);
        }

        let mut record = R::default();
        for (desc, value) in self.schema.fields().iter().zip(self.values) {
            if let Some(value) = value {
                record
                    .set_field(desc.name(), value)
                    .map_err(|e| wrong_type(desc.name(), e))?;
            }
        }
        Ok(record)
    }

    /// Collect constructor arguments, then invoke the designated constructor once
    pub fn construct<R: ImmutableRecord>(mut self) -> Result<R, DecodeError> {
        let params = self
            .schema
            .constructor()
            .ok_or(DecodeError::NoDesignatedConstructor)?;

        let mut entries = Vec::with_capacity(params.len());
        for param in params {
            let desc = &self.schema.fields()[param.field_index()];
            let value = match self.values[param.field_index()].take() {
                Some(value) => value,
                None if desc.is_optional() => Value::Null,
                None => {
                    let e = DecodeError::MissingConstructorArgument(param.name().to_string());
                    debug!(error = %e, "record rejected for decoding");
                    return Err(e);
                }
            };
            entries.push((param.name().to_string(), value));
        }

        trace!(arguments = entries.len(), "invoking designated constructor");
        R::construct(ConstructorArgs { entries })
    }
}
