//! HTTP server
//!
//! Combines the sales, health and observability routers behind one CORS
//! layer. With no allowed origins configured any origin may call the API.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::{ConfigResult, ServerConfig};
use crate::observability::{Event, Logger};
use crate::search::SearchService;

use super::observability_routes::{health_routes, observability_routes};
use super::sales_routes::sales_routes;

pub struct HttpServer {
    bind_addr: SocketAddr,
    router: Router,
}

impl HttpServer {
    /// Fails when an allowed origin is not a valid header value
    pub fn new(config: &ServerConfig, service: SearchService) -> ConfigResult<Self> {
        let allow_origin = match config.cors_origins()? {
            Some(origins) => AllowOrigin::list(origins),
            None => AllowOrigin::from(Any),
        };
        let cors = CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any);

        let metrics = service.metrics().clone();
        let router = Router::new()
            .merge(health_routes())
            .nest("/api", sales_routes(service))
            .nest("/observability", observability_routes(metrics))
            .layer(cors);

        Ok(Self {
            bind_addr: config.bind_addr(),
            router,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// The assembled router (for tests and embedding)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until the listener fails
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.bind_addr).await?;
        Logger::event(
            Event::Serving,
            &[("addr", self.bind_addr.to_string().as_str())],
        );
        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;

    use crate::observability::MetricsRegistry;
    use crate::source::MemoryRowSource;
    use crate::store::MemoryStore;

    fn service() -> SearchService {
        SearchService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryRowSource::new(vec![])),
            Arc::new(MetricsRegistry::new()),
        )
    }

    #[test]
    fn test_bind_addr_from_config() {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 9191,
            ..Default::default()
        };
        let server = HttpServer::new(&config, service()).unwrap();
        assert_eq!(server.bind_addr().to_string(), "127.0.0.1:9191");
    }

    #[test]
    fn test_router_with_origin_list() {
        let config = ServerConfig {
            allowed_origins: vec!["http://localhost:5173".into()],
            ..Default::default()
        };
        assert!(HttpServer::new(&config, service()).is_ok());
    }

    #[test]
    fn test_bad_origin_rejected() {
        let config = ServerConfig {
            allowed_origins: vec!["http://a\nb".into()],
            ..Default::default()
        };
        let err = HttpServer::new(&config, service()).err().unwrap();
        assert_eq!(err.code(), "RETAIL_CONFIG_INVALID");
    }
}
