use crate::driver::{MysqlConnection, DRIVER_DEFINITION};
use crate::errors::driver_error;
use crate::values::typecast;
use dao_core::driver::{DriverDefinition, DriverStatement, Result};
use dao_core::escape::escape_sql;
use dao_core::parameters::Parameters;
use dao_core::row::Row;
use mysql::prelude::{Protocol, Queryable};
use std::sync::Arc;

/// A statement prepared on a MySQL connection.
///
/// The driver uses the text protocol: parameters are substituted into the statement text using the quoting rules of
/// the driver definition before the statement is sent, the way the host framework builds commands from arguments.
pub(crate) struct MysqlStatement<'c> {
    pub(crate) session: &'c mut MysqlConnection,
    pub(crate) text: String,
}

impl MysqlStatement<'_> {
    fn render(&self, parameters: Option<Parameters>) -> Result<String> {
        let sql = escape_sql(&DRIVER_DEFINITION, &self.text, &parameters.unwrap_or(Parameters::None))?;
        Ok(sql)
    }
}

impl DriverStatement for MysqlStatement<'_> {
    fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64> {
        let sql = self.render(parameters)?;
        let start = std::time::Instant::now();
        let result = self.session.conn.query_iter(sql.as_str()).map_err(driver_error)?;
        let affected_rows = result.affected_rows();
        let last_insert_id = result.last_insert_id();
        drop(result);
        self.session.last_insert_id = last_insert_id;
        tracing::debug!(
            "({:.6}) {}",
            start.elapsed().as_secs_f64(),
            DRIVER_DEFINITION.statement_to_string(&dao_core::clean_statement(&sql))
        );
        Ok(affected_rows)
    }

    fn query<'s>(&'s mut self, parameters: Option<Parameters>) -> Result<Box<dyn Iterator<Item = Result<Row>> + 's>> {
        let sql = self.render(parameters)?;
        let start = std::time::Instant::now();
        let result = self.session.conn.query_iter(sql.as_str()).map_err(driver_error)?;
        tracing::debug!(
            "({:.6}) {}",
            start.elapsed().as_secs_f64(),
            DRIVER_DEFINITION.statement_to_string(&dao_core::clean_statement(&sql))
        );
        Ok(Box::new(MysqlRows { inner: result, columns: None }))
    }
}

struct MysqlRows<'s, P: Protocol> {
    inner: mysql::QueryResult<'s, 's, 's, P>,
    columns: Option<Arc<Vec<String>>>,
}

impl<P: Protocol> MysqlRows<'_, P> {
    fn convert(&mut self, row: mysql::Row) -> Result<Row> {
        let columns = match &self.columns {
            Some(columns) => columns.clone(),
            None => {
                let names: Vec<String> = row.columns_ref().iter().map(|c| c.name_str().to_string()).collect();
                let columns = Arc::new(names);
                self.columns = Some(columns.clone());
                columns
            }
        };
        let metadata: Vec<(mysql::consts::ColumnType, mysql::consts::ColumnFlags)> =
            row.columns_ref().iter().map(|c| (c.column_type(), c.flags())).collect();
        let mut values = Vec::with_capacity(metadata.len());
        for (raw, (column_type, flags)) in row.unwrap().into_iter().zip(metadata) {
            values.push(typecast(raw, column_type, flags)?);
        }
        Ok(Row::new(columns, values))
    }
}

impl<P: Protocol> Iterator for MysqlRows<'_, P> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(Ok(row)) => Some(self.convert(row)),
            Some(Err(e)) => Some(Err(driver_error(e).into())),
            None => None,
        }
    }
}
