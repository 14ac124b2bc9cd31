//! Command implementations.

pub mod ask;
pub mod clear;
pub mod config;
pub mod documents;
pub mod upload;

pub use self::ask::execute_ask;
pub use self::clear::execute_clear;
pub use self::config::execute_config;
pub use self::documents::{execute_list, execute_show};
pub use self::upload::{execute_upload, upload_file};
