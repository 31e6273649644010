pub mod handlers;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod upstream;

pub use server::RelayServer;
pub use state::AppState;
pub use upstream::HttpGatewayClient;

#[cfg(test)]
pub mod tests;
