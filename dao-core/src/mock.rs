use crate::driver::{DriverConnection, DriverFactory, DriverStatement, Result};
use crate::factory::Factory;
use crate::parameters::Parameters;
use crate::row::Row;
use crate::values::Value;
use ctor::ctor;
use std::sync::Arc;

/// A mock driver registered under the `mock://` scheme.
///
/// The mock is intended for tests of the facade and of downstream crates:
/// - Opening a connection with a URI containing `?error` returns an error.
/// - `prepare` returns an error for the statement "XINSERT".
/// - `execute` returns an error for SELECT statements, checks that the number of parameters matches the number of `?`
///   placeholders, and otherwise reports 1 affected row.
/// - `query` expects a statement of the form "SELECT n": a positive `n` returns `n` rows with an `id` and a `username`
///   column, `0` returns an empty result set, a negative `n` returns an iterator failing at the first call, anything
///   else is an error.
pub(crate) struct MockFactory {}

impl DriverFactory for MockFactory {
    fn schemes(&self) -> &'static [&'static str] {
        &["mock"]
    }

    fn open(&self, uri: &str) -> Result<Box<dyn DriverConnection>> {
        if uri.contains("?error") {
            return Err("Invalid URI".into());
        }
        Ok(Box::new(MockConnection {}))
    }
}

pub(crate) struct MockConnection {}

impl DriverConnection for MockConnection {
    fn driver_name(&self) -> &str {
        "mock"
    }

    fn prepare<'c: 's, 's>(&'c mut self, statement: &str) -> Result<Box<dyn DriverStatement + 's>> {
        match statement {
            "XINSERT" => Err("Invalid statement".into()),
            _ => Ok(Box::new(MockStatement { text: statement.to_string() })),
        }
    }

    fn last_insert_id(&self) -> Option<u64> {
        Some(1)
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

pub(crate) struct MockStatement {
    text: String,
}

impl MockStatement {
    fn check_parameters(&self, parameters: &Option<Parameters>) -> Result<()> {
        let expected = self.text.matches('?').count();
        let actual = parameters.as_ref().map_or(0, |p| p.len());
        if expected != actual {
            return Err("Invalid parameter count".into());
        }
        Ok(())
    }
}

impl DriverStatement for MockStatement {
    fn execute(&mut self, parameters: Option<Parameters>) -> Result<u64> {
        if self.text.starts_with("SELECT ") {
            return Err("Invalid statement".into());
        }
        self.check_parameters(&parameters)?;
        Ok(1)
    }

    fn query<'s>(&'s mut self, parameters: Option<Parameters>) -> Result<Box<dyn Iterator<Item = Result<Row>> + 's>> {
        self.check_parameters(&parameters)?;
        match regex::Regex::new(r"^SELECT\s+(-?[0-9]+)").unwrap().captures(self.text.as_str()) {
            Some(captures) => {
                let count = captures.get(1).unwrap().as_str().parse::<i64>().unwrap();
                match count {
                    _ if count < 0 => {
                        // Fails at the first iteration
                        Ok(Box::new(std::iter::once::<Result<Row>>(Err("Invalid count".into()))))
                    }
                    0 => {
                        // No rows
                        Ok(Box::new(std::iter::empty()))
                    }
                    _ => {
                        // Returns `count` rows
                        let columns = Arc::new(vec!["id".to_string(), "username".to_string()]);
                        let rows = (1..=count).map(move |n| {
                            Ok(Row::new(
                                columns.clone(),
                                vec![Value::Int64(n), Value::String(format!("user{}", n))],
                            ))
                        });
                        Ok(Box::new(rows))
                    }
                }
            }
            None => Err(format!("Invalid statement: {}", self.text).into()),
        }
    }
}

pub fn register_driver() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        Factory::register(Box::new(MockFactory {}));
    });
}

#[ctor]
fn init() {
    register_driver();
}
