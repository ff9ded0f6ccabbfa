pub mod config;
pub mod init;
pub mod schema;
pub mod submit;
