use crate::ERROR_NAME;
use dao_core::error::Error;

/// Convert a `mysql::Error` into a `dao_core::error::Error`.
///
/// Duplicate-key server errors are surfaced as constraint violations, everything else is reported under the
/// registered error name.
pub(crate) fn driver_error(error: mysql::Error) -> Error {
    if let mysql::Error::MySqlError(ref server_error) = error {
        match server_error.code {
            // ER_DUP_KEY, ER_DUP_ENTRY, ER_DUP_ENTRY_WITH_KEY_NAME
            1022 | 1062 | 1586 => return Error::ConstraintViolation { error: Box::new(error) },
            _ => {}
        }
    }
    Error::Driver { name: ERROR_NAME, error: Box::new(error) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(code: u16, message: &str) -> mysql::Error {
        mysql::Error::MySqlError(mysql::error::MySqlError {
            state: "HY000".to_string(),
            message: message.to_string(),
            code,
        })
    }

    #[test]
    fn test_driver_error() {
        assert!(matches!(
            driver_error(server_error(1062, "Duplicate entry '1' for key 'PRIMARY'")),
            Error::ConstraintViolation { .. }
        ));
        assert!(matches!(
            driver_error(server_error(1146, "Table 'test.users' doesn't exist")),
            Error::Driver { name: "MysqlError", .. }
        ));
    }

    #[test]
    fn test_driver_error_display() {
        let error = driver_error(server_error(1146, "Table 'test.users' doesn't exist"));
        let message = error.to_string();
        assert!(message.starts_with("MysqlError: "));
        assert!(message.contains("1146"));
    }
}
