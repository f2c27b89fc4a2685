pub mod a001_connection;
pub mod a002_configuration;
