use crate::driver::DriverConnection;
use crate::factory::Factory;
use crate::parameters::Parameters;
use crate::row::Row;
use crate::statement::Statement;
use crate::{Error, Result};

/// A connection to a data source.
///
/// ```rust,no_run
/// use dao_core::connection::Connection;
/// use dao_core::params;
///
/// # fn main() -> dao_core::Result<()> {
/// let mut conn = Connection::open("mysql://user@localhost/test")?;
///
/// conn.execute("CREATE TABLE employee (id BIGINT, name TEXT)", None)?;
/// conn.execute("INSERT INTO employee (id, name) VALUES (?, ?)", params!(1i64, "Alice"))?;
///
/// let mut stmt = conn.prepare("SELECT * FROM employee")?;
/// for row in stmt.query(None)? {
///     let row = row?;
///     println!("{}: {}", row.get::<_, i64>("id"), row.get::<_, String>("name"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct Connection {
    inner: Box<dyn DriverConnection>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").field("driver", &self.inner.driver_name()).finish()
    }
}

impl Connection {
    pub fn open(uri: &str) -> Result<Self> {
        let inner = Factory::open(uri)?;
        Ok(Self { inner })
    }

    /// Get the driver name used by the connection.
    pub fn driver_name(&self) -> &str {
        self.inner.driver_name()
    }

    /// Prepare a statement.
    ///
    /// Return a [Statement] that can be later used by the `query` or `execute` functions. A prepared statement can be
    /// used multiple times with different parameters.
    pub fn prepare<S: AsRef<str>>(&mut self, statement: S) -> Result<Statement<'_>> {
        Ok(Statement { inner: self.inner.prepare(statement.as_ref())? })
    }

    /// Execute a statement.
    ///
    /// Returns the number of rows affected.
    pub fn execute<S: AsRef<str>>(&mut self, command: S, parameters: Option<Parameters>) -> Result<u64> {
        let mut statement = self.prepare(command.as_ref())?;
        statement.execute(parameters)
    }

    /// Get the key auto-generated by the last insert statement executed on this connection.
    ///
    /// Returns `None` if no statement generated a key yet, or if the driver does not report generated keys (see
    /// {{crate::driver::DriverDefinition::supports_generated_keys}}).
    pub fn last_insert_id(&self) -> Option<u64> {
        self.inner.last_insert_id()
    }

    /// Query a statement that is expected to return a single [Row].
    ///
    /// Returns `Ok(None)` if the query returned no rows.
    /// If the query returns more than one row, the function will return the first row and ignore the rest.
    pub fn query_row<S: AsRef<str>>(&mut self, command: S, parameters: Option<Parameters>) -> Result<Option<Row>> {
        let mut statement = self.prepare(command.as_ref())?;
        let mut rows = statement.query(parameters)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }

    /// Query a statement that is expected to return a single row and map it to a value.
    ///
    /// Returns `Ok(None)` if the query returned no rows.
    pub fn query_map_row<S: AsRef<str>, F, T>(
        &mut self,
        command: S,
        parameters: Option<Parameters>,
        mapping_fn: F,
    ) -> Result<Option<T>>
    where
        F: FnOnce(Row) -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
    {
        match self.query_row(command, parameters)? {
            Some(row) => Ok(Some(mapping_fn(row).map_err(Error::from)?)),
            None => Ok(None),
        }
    }

    /// Close the connection.
    ///
    /// Because a {{Statement}} borrows the connection, all statements must be dropped before calling `close()`.
    pub fn close(self) -> Result<()> {
        self.inner.close().map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_connection_open() {
        assert!(matches!(Connection::open("unknown://"), Err(Error::DriverNotFound { .. })));
        assert!(Connection::open("mock://?error").is_err());
        let conn = Connection::open("mock://").unwrap();
        assert_eq!(conn.driver_name(), "mock");
        assert!(conn.close().is_ok());
    }

    #[test]
    fn test_connection_prepare() {
        let mut conn = Connection::open("mock://").unwrap();
        assert!(conn.prepare("XINSERT").is_err());
        assert!(conn.prepare("SELECT 1").is_ok());
    }

    #[test]
    fn test_connection_execute() {
        let mut conn = Connection::open("mock://").unwrap();
        assert!(conn.execute("XINSERT", None).is_err());
        assert_eq!(conn.execute("INSERT 1", None).unwrap(), 1);
        // SELECT is not allowed for execute().
        assert!(conn.execute("SELECT 1", None).is_err());
        // Number of parameters does not match the number of placeholders.
        assert!(conn.execute("INSERT ?", params!(1i64, 2i64)).is_err());
        assert_eq!(conn.execute("INSERT ?", params!(1i64)).unwrap(), 1);
        assert_eq!(conn.last_insert_id(), Some(1));
    }

    #[test]
    fn test_connection_query_row() {
        let mut conn = Connection::open("mock://").unwrap();

        assert_eq!(conn.query_row("SELECT 2", None).unwrap().unwrap().get::<_, i64>(0), 1);
        assert_eq!(conn.query_row("SELECT 1", None).unwrap().unwrap().get::<_, i64>(0), 1);
        assert!(conn.query_row("SELECT 0", None).unwrap().is_none());
        assert!(conn.query_row("SELECT -1", None).is_err());
        assert!(conn.query_row("SELECT X", None).is_err());
    }

    #[test]
    fn test_connection_query_map_row() {
        struct TestUser {
            id: i64,
            username: String,
        }

        let mut conn = Connection::open("mock://").unwrap();

        // some rows
        let user = conn
            .query_map_row("SELECT 1", None, |row| {
                Ok(TestUser { id: row.get::<_, _>(0), username: row.get::<_, _>(1) })
            })
            .unwrap()
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "user1");

        // no rows
        assert!(conn
            .query_map_row("SELECT 0", None, |row| Ok(TestUser { id: row.get(0), username: "".to_string() }))
            .unwrap()
            .is_none());

        // error by the query
        assert!(conn
            .query_map_row("SELECT X", None, |row| Ok(TestUser { id: row.get(0), username: "".to_string() }))
            .is_err());

        // error by the mapping function
        assert!(conn
            .query_map_row("SELECT 1", None, |_row| Err::<TestUser, _>("error".into()))
            .is_err());
    }

    #[test]
    fn test_connection_query_rows() {
        let mut conn = Connection::open("mock://").unwrap();

        // some rows
        let mut stmt = conn.prepare("SELECT 2").unwrap();
        let mut rows = stmt.query(None).unwrap();
        assert_eq!(rows.next().unwrap().unwrap().get::<_, i64>("id"), 1);
        assert_eq!(rows.next().unwrap().unwrap().get::<_, String>("username"), "user2");
        assert!(rows.next().is_none());
        drop(rows);
        drop(stmt);

        // no rows
        let mut stmt = conn.prepare("SELECT 0").unwrap();
        let mut rows = stmt.query(None).unwrap();
        assert!(rows.next().is_none());
        drop(rows);
        drop(stmt);

        // error on first call to next()
        let mut stmt = conn.prepare("SELECT -1").unwrap();
        let mut rows = stmt.query(None).unwrap();
        assert!(matches!(rows.next(), Some(Err(_))));
        drop(rows);
        drop(stmt);

        // error on call to query()
        let mut stmt = conn.prepare("SELECT X").unwrap();
        assert!(stmt.query(None).is_err());
    }
}
