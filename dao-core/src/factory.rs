use lazy_static::lazy_static;
use std::sync::Arc;
use std::sync::Mutex;

use crate::driver::DriverConnection;
use crate::driver::DriverFactory;
use crate::{Error, Result};

lazy_static! {
    pub static ref DRIVER_FACTORIES: Factory = Factory { registered_factories: Mutex::new(Vec::new()) };
}

pub struct Factory {
    registered_factories: Mutex<Vec<Arc<Box<dyn DriverFactory>>>>,
}

impl Factory {
    pub fn register(driver: Box<dyn DriverFactory>) {
        DRIVER_FACTORIES.registered_factories.lock().unwrap().push(Arc::new(driver));
    }

    #[cfg(test)]
    pub fn unregister(scheme: &str) {
        let mut factories = DRIVER_FACTORIES.registered_factories.lock().unwrap();
        factories.retain(|f| !f.schemes().contains(&scheme));
    }

    pub fn open(uri: &str) -> Result<Box<dyn DriverConnection>> {
        match uri.split(':').next() {
            Some(scheme) => {
                let scheme_regex = regex::Regex::new("^[a-zA-Z][a-zA-Z0-9+.-]*$")?;
                if !scheme_regex.is_match(scheme) {
                    return Err(Error::InvalidUri { uri: uri.to_string(), reason: "invalid scheme".to_string() });
                }
                match DRIVER_FACTORIES.find(scheme) {
                    Some(driver) => driver.open(uri).map_err(Error::from),
                    None => Err(Error::DriverNotFound { scheme: scheme.to_string() }),
                }
            }
            None => Err(Error::InvalidUri { uri: uri.to_string(), reason: "missing scheme".to_string() }),
        }
    }

    fn find(&self, scheme: &str) -> Option<Arc<Box<dyn DriverFactory>>> {
        for driver_factory in self.registered_factories.lock().unwrap().iter() {
            if driver_factory.schemes().contains(&scheme) {
                return Some(driver_factory.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverStatement;

    struct FakeConnection {}

    impl DriverConnection for FakeConnection {
        fn driver_name(&self) -> &str {
            "fake"
        }

        fn prepare<'c: 's, 's>(&'c mut self, _statement: &str) -> crate::driver::Result<Box<dyn DriverStatement + 's>> {
            Err("not implemented".into())
        }

        fn last_insert_id(&self) -> Option<u64> {
            None
        }

        fn close(self: Box<Self>) -> crate::driver::Result<()> {
            Ok(())
        }
    }

    struct FakeFactory {}

    impl DriverFactory for FakeFactory {
        fn schemes(&self) -> &'static [&'static str] {
            &["fake"]
        }

        fn open(&self, _uri: &str) -> crate::driver::Result<Box<dyn DriverConnection>> {
            Ok(Box::new(FakeConnection {}))
        }
    }

    #[test]
    fn test_register() {
        Factory::register(Box::new(FakeFactory {}));

        assert!(Factory::open("fake://").is_ok());
        assert!(matches!(Factory::open("unknown://"), Err(Error::DriverNotFound { .. })));
        assert!(matches!(Factory::open("invalid/:://"), Err(Error::InvalidUri { .. })));

        Factory::unregister("fake");
        assert!(Factory::open("fake://").is_err());
    }
}
