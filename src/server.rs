use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use axum::{middleware, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    middleware::{method_not_allowed::method_not_allowed, not_found::not_found},
    route,
    state::ApiState,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    /// Allow every origin, method and header.
    #[default]
    Permissive,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    socket_address: SocketAddr,
    #[serde(default)]
    cors: CorsMode,
}

impl ServerConfig {
    pub fn new(socket_address: SocketAddr, cors: CorsMode) -> Self {
        Self {
            socket_address,
            cors,
        }
    }

    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(ConfigError::Read)?;

        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(ConfigError::Parse)
    }

    /// Replaces the port of the socket address.
    pub fn with_port(mut self, port: u16) -> Self {
        self.socket_address.set_port(port);
        self
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn cors(&self) -> CorsMode {
        self.cors
    }
}

/// Builds the application router.
pub fn app(state: ApiState, cors: CorsMode) -> Router {
    let app = Router::new()
        .nest("/v1", route::v1::app::app())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            method_not_allowed::<ApiState>,
        ))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );

    match cors {
        CorsMode::Permissive => app.layer(CorsLayer::permissive()),
        CorsMode::Disabled => app,
    }
}

pub struct Server {
    config: ServerConfig,
    state: ApiState,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, ApiState::default())
    }

    pub fn with_state(config: ServerConfig, state: ApiState) -> Self {
        Self { config, state }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = app(self.state, self.config.cors);

        tracing::info!(
            addr = %self.config.socket_address,
            cors = ?self.config.cors,
            "Starting server"
        );

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;

        tracing::info!("SIGTERM received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_defaults_to_permissive() {
        let config = ServerConfig::from_yaml("socket_address: 127.0.0.1:8080").unwrap();

        assert_eq!(config.socket_address(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors(), CorsMode::Permissive);
    }

    #[test]
    fn cors_can_be_disabled() {
        let config =
            ServerConfig::from_yaml("socket_address: 0.0.0.0:80\ncors: disabled").unwrap();

        assert_eq!(config.cors(), CorsMode::Disabled);
    }

    #[test]
    fn port_can_be_overridden() {
        let config = ServerConfig::from_yaml("socket_address: 127.0.0.1:8080")
            .unwrap()
            .with_port(9000);

        assert_eq!(
            config.socket_address(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn invalid_socket_address_is_a_parse_error() {
        let err = ServerConfig::from_yaml("socket_address: not-an-address").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let err = ServerConfig::from_config_file("does-not-exist.yaml")
            .await
            .unwrap_err();

        assert!(matches!(err, ConfigError::Read(_)));
    }
}
