use crate::driver::DriverDefinition;
use crate::parameters::Parameters;
use crate::values::Value;
use crate::{Error, Result};

/// Render a single value as a SQL literal using the quoting rules of the given driver definition.
pub fn quote_value(definition: &dyn DriverDefinition, value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(v) => definition.quote_boolean(*v),
        Value::Int64(v) => v.to_string(),
        Value::UInt64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Decimal(v) => v.to_string(),
        Value::String(v) => definition.quote_string(v),
        Value::Blob(v) => definition.quote_blob(v),
        Value::Date(v) => definition.quote_date(v),
        Value::Time(v) => definition.quote_time(v),
        Value::DateTime(v) => definition.quote_date_time(v),
    }
}

/// Build the final statement text by substituting the parameters into the `?` placeholders.
///
/// Placeholder scanning is textual: a literal `?` inside a quoted string of the statement counts as a placeholder.
/// The number of parameters must match the number of placeholders otherwise an error is returned.
pub fn escape_sql(definition: &dyn DriverDefinition, text: &str, parameters: &Parameters) -> Result<String> {
    let expected = text.matches('?').count();
    let actual = parameters.len();
    if expected != actual {
        return Err(Error::InvalidParameterCount { expected, actual });
    }
    if actual == 0 {
        return Ok(text.to_string());
    }
    let mut escaped = String::with_capacity(text.len() + 16 * actual);
    let mut values = parameters.iter();
    for (i, part) in text.split('?').enumerate() {
        if i > 0 {
            // `values` yields exactly `expected` items, one per separator.
            if let Some(value) = values.next() {
                escaped.push_str(&quote_value(definition, value));
            }
        }
        escaped.push_str(part);
    }
    Ok(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    struct GenericDefinition;

    impl DriverDefinition for GenericDefinition {}

    #[test]
    fn test_escape_sql_without_parameters() {
        let definition = GenericDefinition;
        assert_eq!(escape_sql(&definition, "SELECT 1", &Parameters::None).unwrap(), "SELECT 1");
    }

    #[test]
    fn test_escape_sql() {
        let definition = GenericDefinition;
        let parameters = params!(42i64, "O'Brien").unwrap();
        assert_eq!(
            escape_sql(&definition, "SELECT * FROM users WHERE id = ? AND name = ?", &parameters).unwrap(),
            "SELECT * FROM users WHERE id = 42 AND name = 'O''Brien'"
        );
    }

    #[test]
    fn test_escape_sql_parameter_count_mismatch() {
        let definition = GenericDefinition;
        let error = escape_sql(&definition, "SELECT ?", &Parameters::None).unwrap_err();
        assert!(matches!(error, Error::InvalidParameterCount { expected: 1, actual: 0 }));
        let error = escape_sql(&definition, "SELECT 1", &params!(1i64).unwrap()).unwrap_err();
        assert!(matches!(error, Error::InvalidParameterCount { expected: 0, actual: 1 }));
    }

    #[test]
    fn test_quote_value() {
        let definition = GenericDefinition;
        assert_eq!(quote_value(&definition, &Value::Null), "NULL");
        assert_eq!(quote_value(&definition, &Value::Bool(true)), "TRUE");
        assert_eq!(quote_value(&definition, &Value::Int64(-7)), "-7");
        assert_eq!(quote_value(&definition, &Value::UInt64(7)), "7");
        assert_eq!(quote_value(&definition, &Value::Float64(1.5)), "1.5");
        assert_eq!(quote_value(&definition, &Value::Decimal("12.34".parse().unwrap())), "12.34");
        assert_eq!(quote_value(&definition, &Value::String("it's".to_string())), "'it''s'");
        assert_eq!(quote_value(&definition, &Value::Blob(vec![0x01, 0xff])), "x'01ff'");
        let date = chrono::NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
        assert_eq!(quote_value(&definition, &Value::Date(date)), "'2024-07-14'");
    }
}
