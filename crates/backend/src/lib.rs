pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use domain::a001_connection::repository::ConnectionRepository;
use domain::a002_configuration::repository::ConfigurationRepository;

/// Shared state handed to every handler
#[derive(Clone, Default)]
pub struct AppState {
    pub connections: ConnectionRepository,
    pub configuration: ConfigurationRepository,
}
