use crate::statement::MysqlStatement;
use crate::DRIVER_NAME;
use dao_core::driver::{DriverConnection, DriverDefinition, DriverStatement, Result};

/// The capability descriptor of the MySQL database family.
///
/// A stateless singleton, see {{DRIVER_DEFINITION}}.
pub struct MysqlDriverDefinition;

pub static DRIVER_DEFINITION: MysqlDriverDefinition = MysqlDriverDefinition;

impl DriverDefinition for MysqlDriverDefinition {
    /// MySQL always returns auto-generated key values after an insert.
    fn supports_generated_keys(&self) -> bool {
        true
    }

    fn supports_scrollable_result_sets(&self) -> bool {
        true
    }

    /// Quote a text value the MySQL way: embedded single quotes are escaped with a backslash instead of being
    /// doubled.
    ///
    /// Embedded backslashes are not escaped, so a value containing a literal backslash immediately followed by a
    /// quote produces an incorrectly escaped literal. Kept as-is, see the regression test below.
    fn quote_string(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('\'');
        for c in value.chars() {
            if c == '\'' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('\'');
        quoted
    }

    fn quote_boolean(&self, value: bool) -> String {
        if value {
            "1".to_string()
        } else {
            "0".to_string()
        }
    }

    /// Strip the boilerplate prefix the underlying driver puts in front of its statement renderings, leaving only the
    /// human-readable SQL with the bound values.
    ///
    /// This is a best-effort text transform: a rendering without the expected marker is returned unchanged.
    fn statement_to_string(&self, rendered: &str) -> String {
        match rendered.find("]-") {
            Some(position) => rendered[position + 2..].trim_start().to_string(),
            None => rendered.to_string(),
        }
    }
}

pub(crate) struct MysqlConnection {
    pub(crate) conn: mysql::Conn,
    pub(crate) last_insert_id: Option<u64>,
}

impl DriverConnection for MysqlConnection {
    fn driver_name(&self) -> &str {
        DRIVER_NAME
    }

    fn prepare<'c: 's, 's>(&'c mut self, statement: &str) -> Result<Box<dyn DriverStatement + 's>> {
        Ok(Box::new(MysqlStatement { session: self, text: statement.to_string() }))
    }

    fn last_insert_id(&self) -> Option<u64> {
        self.last_insert_id
    }

    fn close(self: Box<Self>) -> Result<()> {
        // The underlying connection sends the COM_QUIT packet when dropped.
        Ok(())
    }
}
