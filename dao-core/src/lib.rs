#![forbid(unsafe_code)]

pub mod connection;
pub mod driver;
pub mod error;
pub mod escape;
pub mod extension;
pub mod factory;
pub mod macros;
pub mod parameters;
pub mod row;
pub mod statement;
pub mod values;

/// The mock module is only available when running tests or when the `mock` feature is enabled.
/// It provides a mock driver registered under the `mock://` scheme to be used in tests.
#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// The error type used across the library.
///
/// All errors produced by the crates in this workspace are supposed to be {{Error}}. Only the drivers are allowed to
/// return their own error type {{driver::DriverError}} which will be then converted to an {{Error}}.
pub type Error = error::Error;

/// A specialized `Result` type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Return a clean version of the input string for logging purposes.
/// The returned statement is cleaned by removing all non significant characters.
pub fn clean_statement(input: &str) -> String {
    let mut result = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            // Replace by a space and skip following spaces
            result.push(' ');
            while let Some(' ') = chars.peek() {
                chars.next();
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_statement() {
        assert_eq!(clean_statement("SELECT 1"), "SELECT 1");
        assert_eq!(clean_statement("SELECT *\n  FROM users\n  WHERE id = 1"), "SELECT * FROM users WHERE id = 1");
    }
}
