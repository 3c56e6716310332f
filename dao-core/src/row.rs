use crate::values::{FromValue, Value};
use crate::{Error, Result};
use std::sync::Arc;

/// A row returned by a query.
///
/// The column names are shared between all the rows of a result set.
#[derive(Debug)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Row {
    /// Create a new row.
    ///
    /// Users are not expected to call this function directly as it's intended to be only used by the drivers.
    pub fn new(columns: Arc<Vec<String>>, values: Vec<Value>) -> Self {
        Row { columns, values }
    }

    /// Get the column names of the row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns in the row.
    pub fn num_columns(&self) -> usize {
        self.values.len()
    }

    /// Check if the value of a column from its index is null.
    ///
    /// # Panics
    /// Panics if the column index is out of bounds (`usize` index) or not found (`&str` index).
    pub fn is_null<I: ColumnIndex>(&self, index: I) -> bool {
        match self.try_value(index) {
            Ok(value) => value.is_null(),
            Err(e) => panic!("{}", e),
        }
    }

    /// Get a value from a column by its index.
    ///
    /// The index of the column can be either a 0-based index or the name of the column.
    ///
    /// # Panics
    /// Panics if the column index is out of bounds (`usize` index) or not found (`&str` index) or if the type is not
    /// the expected one.
    pub fn get<I: ColumnIndex, T: FromValue>(&self, index: I) -> T {
        match self.try_get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Get a nullable value from a column by its index.
    ///
    /// # Panics
    /// Panics like {{get}} except on null values which are returned as `None`.
    pub fn get_nullable<I: ColumnIndex, T: FromValue>(&self, index: I) -> Option<T> {
        match self.try_get_nullable(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Get a value from a column by its index.
    ///
    /// The index of the column can be either a 0-based index or the name of the column.
    /// This method returns an error if the column index is out of bounds, or if the type is not the expected one, or
    /// if the value is null.
    pub fn try_get<I: ColumnIndex, T: FromValue>(&self, index: I) -> Result<T> {
        T::try_from_value(self.try_value(index)?)
    }

    pub fn try_get_nullable<I: ColumnIndex, T: FromValue>(&self, index: I) -> Result<Option<T>> {
        let value = self.try_value(index)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(T::try_from_value(value)?))
    }

    /// Get the raw value of a column by its index.
    pub fn try_value<I: ColumnIndex>(&self, index: I) -> Result<&Value> {
        let index = index.index(self)?;
        match self.values.get(index) {
            Some(value) => Ok(value),
            None => Err(Error::OutOfBounds { index }),
        }
    }
}

/// The index of a column in a row, either a 0-based position or a column name.
pub trait ColumnIndex {
    fn index(&self, row: &Row) -> Result<usize>;
}

impl ColumnIndex for usize {
    fn index(&self, row: &Row) -> Result<usize> {
        if *self >= row.num_columns() {
            return Err(Error::OutOfBounds { index: *self });
        }
        Ok(*self)
    }
}

impl ColumnIndex for &str {
    fn index(&self, row: &Row) -> Result<usize> {
        match row.columns.iter().position(|name| name == self) {
            Some(index) => Ok(index),
            None => Err(Error::ColumnNotFound { name: self.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_row() -> Row {
        Row::new(
            Arc::new(vec!["id".to_string(), "username".to_string(), "deleted_at".to_string()]),
            vec![Value::Int64(1), Value::String("alice".to_string()), Value::Null],
        )
    }

    #[test]
    fn test_row_get() {
        let row = test_row();
        assert_eq!(row.num_columns(), 3);
        assert_eq!(row.columns(), &["id", "username", "deleted_at"]);
        assert_eq!(row.get::<_, i64>(0), 1);
        assert_eq!(row.get::<_, i32>("id"), 1);
        assert_eq!(row.get::<_, String>("username"), "alice");
        assert!(!row.is_null("username"));
        assert!(row.is_null("deleted_at"));
        assert_eq!(row.get_nullable::<_, String>("deleted_at"), None);
        assert_eq!(row.get_nullable::<_, String>("username"), Some("alice".to_string()));
    }

    #[test]
    fn test_row_try_get() {
        let row = test_row();
        assert_eq!(row.try_get::<_, i64>("id").unwrap(), 1);
        assert!(matches!(row.try_get::<_, i64>(42).unwrap_err(), Error::OutOfBounds { index: 42 }));
        assert!(matches!(row.try_get::<_, i64>("unknown").unwrap_err(), Error::ColumnNotFound { .. }));
        assert!(matches!(row.try_get::<_, i64>("username").unwrap_err(), Error::InvalidType { .. }));
        assert!(row.try_get::<_, String>("deleted_at").is_err());
        assert_eq!(row.try_get_nullable::<_, String>("deleted_at").unwrap(), None);
    }
}
