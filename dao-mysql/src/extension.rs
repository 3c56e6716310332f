use crate::driver::DRIVER_DEFINITION;
use crate::{ERROR_NAME, MODULE_NAME};
use dao_core::driver::DriverDefinition;
use dao_core::extension::Extension;

/// The registration descriptor of the MySQL database family.
///
/// Maps the fixed module and error names to the driver definition singleton.
pub struct MysqlExtension {}

impl Extension for MysqlExtension {
    fn module_name(&self) -> &'static str {
        MODULE_NAME
    }

    fn error_name(&self) -> &'static str {
        ERROR_NAME
    }

    fn driver_definition(&self) -> &'static dyn DriverDefinition {
        &DRIVER_DEFINITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        let extension = MysqlExtension {};
        assert_eq!(extension.module_name(), "Mysql");
        assert_eq!(extension.error_name(), "MysqlError");
        assert!(extension.driver_definition().supports_generated_keys());
        assert!(extension.driver_definition().supports_scrollable_result_sets());
    }

    #[test]
    fn test_registered_extension() {
        crate::register_driver();
        let extension = dao_core::extension::Extensions::find("Mysql").unwrap();
        assert_eq!(extension.error_name(), "MysqlError");
        assert_eq!(extension.driver_definition().quote_string("O'Brien"), "'O\\'Brien'");
    }
}
