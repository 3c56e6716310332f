use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// A value bound to a statement or read from a row.
///
/// The set of variants is the typecast target set of the drivers: whatever the underlying database client hands back
/// is converted into one of these before reaching the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    String(String),
    Blob(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Decimal(Decimal),
}

impl Value {
    /// The name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int64(_) => "Int64",
            Value::UInt64(_) => "UInt64",
            Value::Float64(_) => "Float64",
            Value::String(_) => "String",
            Value::Blob(_) => "Blob",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
            Value::DateTime(_) => "DateTime",
            Value::Decimal(_) => "Decimal",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from_for_value {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::$variant(value.into())
            }
        }
    };
}

impl_from_for_value!(bool, Bool);
impl_from_for_value!(i8, Int64);
impl_from_for_value!(i16, Int64);
impl_from_for_value!(i32, Int64);
impl_from_for_value!(i64, Int64);
impl_from_for_value!(u8, UInt64);
impl_from_for_value!(u16, UInt64);
impl_from_for_value!(u32, UInt64);
impl_from_for_value!(u64, UInt64);
impl_from_for_value!(f32, Float64);
impl_from_for_value!(f64, Float64);
impl_from_for_value!(String, String);
impl_from_for_value!(&str, String);
impl_from_for_value!(Vec<u8>, Blob);
impl_from_for_value!(NaiveDate, Date);
impl_from_for_value!(NaiveTime, Time);
impl_from_for_value!(NaiveDateTime, DateTime);
impl_from_for_value!(Decimal, Decimal);

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(value.to_vec())
    }
}

/// Convert an Option<T> into a Value::Null if None, otherwise convert the value into a Value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

/// Conversion of a {{Value}} back into a Rust type.
///
/// Used by the row accessors. A conversion to the wrong type is an error, it never coerces silently.
pub trait FromValue: Sized {
    fn try_from_value(value: &Value) -> Result<Self>;
}

fn invalid_type(expected: &str, actual: &Value) -> Error {
    Error::InvalidType { expected: expected.to_string(), actual: actual.type_name().to_string() }
}

macro_rules! impl_from_value_for_int {
    ($t:ty) => {
        impl FromValue for $t {
            fn try_from_value(value: &Value) -> Result<Self> {
                match value {
                    Value::Int64(v) => <$t>::try_from(*v).map_err(|_| invalid_type(stringify!($t), value)),
                    Value::UInt64(v) => <$t>::try_from(*v).map_err(|_| invalid_type(stringify!($t), value)),
                    _ => Err(invalid_type(stringify!($t), value)),
                }
            }
        }
    };
}

impl_from_value_for_int!(i8);
impl_from_value_for_int!(i16);
impl_from_value_for_int!(i32);
impl_from_value_for_int!(i64);
impl_from_value_for_int!(u8);
impl_from_value_for_int!(u16);
impl_from_value_for_int!(u32);
impl_from_value_for_int!(u64);

impl FromValue for bool {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(*v),
            // Boolean columns commonly surface as TINYINT(1).
            Value::Int64(v) => Ok(*v != 0),
            Value::UInt64(v) => Ok(*v != 0),
            _ => Err(invalid_type("bool", value)),
        }
    }
}

impl FromValue for f64 {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float64(v) => Ok(*v),
            _ => Err(invalid_type("f64", value)),
        }
    }
}

impl FromValue for String {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v.clone()),
            _ => Err(invalid_type("String", value)),
        }
    }
}

impl FromValue for Vec<u8> {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v.clone()),
            _ => Err(invalid_type("Vec<u8>", value)),
        }
    }
}

impl FromValue for NaiveDate {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(*v),
            Value::DateTime(v) => Ok(v.date()),
            _ => Err(invalid_type("NaiveDate", value)),
        }
    }
}

impl FromValue for NaiveTime {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Time(v) => Ok(*v),
            Value::DateTime(v) => Ok(v.time()),
            _ => Err(invalid_type("NaiveTime", value)),
        }
    }
}

impl FromValue for NaiveDateTime {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(*v),
            _ => Err(invalid_type("NaiveDateTime", value)),
        }
    }
}

impl FromValue for Decimal {
    fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Decimal(v) => Ok(*v),
            Value::Int64(v) => Ok(Decimal::from(*v)),
            Value::UInt64(v) => Ok(Decimal::from(*v)),
            _ => Err(invalid_type("Decimal", value)),
        }
    }
}
