use crate::parameters::Parameters;
use crate::row::Row;

/// The error type that the drivers will use to return errors.
///
/// It's a pass-through error type that the drivers will use to return errors. Because each driver may have to deal with
/// specific error types coming from the underlying crate used to interact with the database, the drivers will have to
/// convert those errors to this error type.
///
/// It doesn't prevent the drivers from using {{crate::error::Error}} when appropriate but it should be converted into
/// this error type using {{crate::error::Error::into}}.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, DriverError>;

/// The capability descriptor of a database family.
///
/// One stateless implementing type exists per supported database family, constructed once as a process-wide static and
/// immutable thereafter. The default implementations follow the SQL standard; a driver overrides the ones its database
/// family handles differently.
pub trait DriverDefinition: Sync + Send {
    /// Whether the database returns auto-generated key values after an insert.
    fn supports_generated_keys(&self) -> bool {
        false
    }

    /// Whether result set cursors support non-sequential row navigation.
    fn supports_scrollable_result_sets(&self) -> bool {
        false
    }

    /// Return a SQL-literal-safe quoted version of an arbitrary text value.
    ///
    /// The default implementation wraps the value in single quotes and doubles every embedded single quote, as per the
    /// SQL standard.
    fn quote_string(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('\'');
        for c in value.chars() {
            if c == '\'' {
                quoted.push('\'');
            }
            quoted.push(c);
        }
        quoted.push('\'');
        quoted
    }

    fn quote_boolean(&self, value: bool) -> String {
        if value {
            "TRUE".to_string()
        } else {
            "FALSE".to_string()
        }
    }

    fn quote_date(&self, value: &chrono::NaiveDate) -> String {
        format!("'{}'", value.format("%Y-%m-%d"))
    }

    fn quote_time(&self, value: &chrono::NaiveTime) -> String {
        format!("'{}'", value.format("%H:%M:%S%.f"))
    }

    fn quote_date_time(&self, value: &chrono::NaiveDateTime) -> String {
        format!("'{}'", value.format("%Y-%m-%d %H:%M:%S%.f"))
    }

    fn quote_blob(&self, value: &[u8]) -> String {
        let mut quoted = String::with_capacity(value.len() * 2 + 3);
        quoted.push_str("x'");
        for byte in value {
            quoted.push_str(&format!("{:02x}", byte));
        }
        quoted.push('\'');
        quoted
    }

    /// Return a human-readable version of a statement rendered by the underlying driver.
    ///
    /// Some drivers render their statements with a boilerplate prefix that is of no interest in diagnostic output. The
    /// default implementation returns the rendering unchanged.
    fn statement_to_string(&self, rendered: &str) -> String {
        rendered.to_string()
    }
}

pub trait DriverConnection {
    /// Get the name of the driver.
    ///
    /// The name of the driver should be one of the schemes used to register the driver with the factory but it's not
    /// enforced. This name is mostly intended for logging and debugging purposes.
    fn driver_name(&self) -> &str;

    /// Prepare a statement for execution.
    ///
    /// If the statement uses parameters, the statement should be prepared with `?` placeholders for the parameters.
    fn prepare<'c: 's, 's>(&'c mut self, statement: &str) -> Result<Box<dyn DriverStatement + 's>>;

    /// Get the key auto-generated by the last insert statement executed on this connection.
    ///
    /// Returns `None` if no insert statement was executed yet or if the last statement did not generate a key. Only
    /// meaningful for drivers whose definition reports `supports_generated_keys()`.
    fn last_insert_id(&self) -> Option<u64>;

    /// Close the connection.
    fn close(self: Box<Self>) -> Result<()>;
}

/// A prepared statement ready to be executed.
///
/// A prepared statement can be executed multiple times with different parameters.
pub trait DriverStatement {
    /// Execute the statement.
    ///
    /// Returns the number of rows affected by the statement.
    /// Executing a statement that starts with "SELECT" may return an error depending on the driver implementation.
    fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64>;

    /// Execute a `SELECT` statement.
    ///
    /// Returns an iterator over the rows returned by the statement.
    fn query<'s>(&'s mut self, parameters: Option<Parameters>) -> Result<Box<dyn Iterator<Item = Result<Row>> + 's>>;
}

pub trait DriverFactory: Sync + Send {
    /// Get the schemes associated with the driver.
    fn schemes(&self) -> &'static [&'static str];

    fn open(&self, uri: &str) -> Result<Box<dyn DriverConnection>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GenericDefinition;

    impl DriverDefinition for GenericDefinition {}

    #[test]
    fn test_definition_defaults() {
        let definition = GenericDefinition;
        assert!(!definition.supports_generated_keys());
        assert!(!definition.supports_scrollable_result_sets());
        assert_eq!(definition.quote_string("hello"), "'hello'");
        assert_eq!(definition.quote_string("O'Brien"), "'O''Brien'");
        assert_eq!(definition.quote_boolean(true), "TRUE");
        assert_eq!(definition.quote_boolean(false), "FALSE");
        assert_eq!(definition.quote_blob(&[0xde, 0xad, 0x01]), "x'dead01'");
        assert_eq!(definition.statement_to_string("SELECT 1"), "SELECT 1");
    }

    #[test]
    fn test_definition_quote_temporal() {
        let definition = GenericDefinition;
        let date = chrono::NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
        assert_eq!(definition.quote_date(&date), "'2024-07-14'");
        let time = chrono::NaiveTime::from_hms_opt(13, 37, 5).unwrap();
        assert_eq!(definition.quote_time(&time), "'13:37:05'");
        let date_time = date.and_time(time);
        assert_eq!(definition.quote_date_time(&date_time), "'2024-07-14 13:37:05'");
    }
}
