use crate::driver::DriverStatement;
use crate::parameters::Parameters;
use crate::row::Row;
use crate::{Error, Result};

/// A prepared statement.
///
/// A statement is a query that has been prepared for execution. It borrows the connection that prepared it, so all
/// statements must be dropped before the connection can be closed.
pub struct Statement<'c> {
    pub(crate) inner: Box<dyn DriverStatement + 'c>,
}

impl Statement<'_> {
    /// Execute the statement.
    ///
    /// Returns the number of rows affected.
    pub fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64> {
        self.inner.execute(parameters).map_err(Error::from)
    }

    /// Execute the statement and return an iterator over the rows of the result set.
    pub fn query<'s: 'i, 'i>(
        &'s mut self,
        parameters: Option<Parameters>,
    ) -> Result<Box<dyn Iterator<Item = Result<Row>> + 'i>> {
        match self.inner.query(parameters) {
            Ok(iterator) => {
                let iterator = iterator.map(|result| result.map_err(Error::from));
                Ok(Box::new(iterator))
            }
            Err(e) => Err(Error::from(e)),
        }
    }
}
