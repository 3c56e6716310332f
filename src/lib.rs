//! # Crate Topology
//!
//! The [`dao-drivers`] project is implemented as multiple sub-crates, which are then re-exported by
//! this top-level crate.
//!
//! Crate authors can choose to depend on this top-level crate, or just
//! the sub-crates they need.
//!
//! The current list of sub-crates is:
//!
//! * [`dao-core`][dao_core] - the core traits and types
//! * [`dao-mysql`][dao_mysql] - the [MySQL](https://www.mysql.com) driver

pub use dao_core::connection::Connection;
pub use dao_core::parameters::Parameters;
pub use dao_core::row::Row;
pub use dao_core::values::Value;
pub use dao_core::Error;
pub use dao_core::Result;

// Re-export the `params!` macro.
pub use dao_core::params;

pub fn register_drivers() {
    #[cfg(feature = "mysql")]
    dao_mysql::register_driver();
}
