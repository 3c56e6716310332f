use dao_core::extension::Extensions;
use dao_core::factory::Factory;

/// The name of the driver for MySQL.
pub const DRIVER_NAME: &str = "mysql";

/// The name under which the MySQL database family is exposed to the host framework.
pub const MODULE_NAME: &str = "Mysql";

/// The name used when reporting errors raised by the MySQL driver.
pub const ERROR_NAME: &str = "MysqlError";

mod driver;
mod errors;
mod extension;
mod factory;
mod statement;
mod values;

pub use driver::MysqlDriverDefinition;
pub use extension::MysqlExtension;

pub fn register_driver() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        Factory::register(Box::new(factory::MysqlFactory {}));
        Extensions::register(Box::new(MysqlExtension {}));
    });
}
