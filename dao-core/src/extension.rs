use lazy_static::lazy_static;
use std::sync::Arc;
use std::sync::Mutex;

use crate::driver::DriverDefinition;

lazy_static! {
    pub static ref DRIVER_EXTENSIONS: Extensions = Extensions { registered_extensions: Mutex::new(Vec::new()) };
}

/// The registration descriptor of a database family.
///
/// An extension tells the host framework under which external names a database family is exposed and which driver
/// definition backs it. Implementations are immutable singletons, the association between an extension and its driver
/// definition never changes.
pub trait Extension: Sync + Send {
    /// The name under which the database family is exposed, e.g. "Mysql".
    fn module_name(&self) -> &'static str;

    /// The name used when reporting errors raised by the driver, e.g. "MysqlError".
    fn error_name(&self) -> &'static str;

    /// The capability descriptor backing this registration.
    fn driver_definition(&self) -> &'static dyn DriverDefinition;
}

pub struct Extensions {
    registered_extensions: Mutex<Vec<Arc<Box<dyn Extension>>>>,
}

impl Extensions {
    pub fn register(extension: Box<dyn Extension>) {
        DRIVER_EXTENSIONS.registered_extensions.lock().unwrap().push(Arc::new(extension));
    }

    #[cfg(test)]
    pub fn unregister(module_name: &str) {
        let mut extensions = DRIVER_EXTENSIONS.registered_extensions.lock().unwrap();
        extensions.retain(|e| e.module_name() != module_name);
    }

    /// Find a registered extension by its module name.
    pub fn find(module_name: &str) -> Option<Arc<Box<dyn Extension>>> {
        for extension in DRIVER_EXTENSIONS.registered_extensions.lock().unwrap().iter() {
            if extension.module_name() == module_name {
                return Some(extension.clone());
            }
        }
        None
    }
}
