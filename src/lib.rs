pub mod auth;
pub mod cli_args;
pub mod extractor;
pub mod middleware;
pub mod response;
mod route;
pub mod server;
pub mod state;
pub mod traits;
pub mod types;
