pub mod a001_connection;
