use crate::{
    config::{Config, CorsConfig},
    prediction::Predictor,
    routes::api_routes,
};
use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::broadcast::Receiver, task::JoinHandle};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct SharedState {
    pub predictor: Arc<dyn Predictor>,
}

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    pub async fn new(predictor: Arc<dyn Predictor>, config: &Config) -> anyhow::Result<Self> {
        let addr = config.server.get_address();

        let app_state = SharedState { predictor };

        let router = Router::new()
            .merge(api_routes())
            .with_state(app_state)
            .layer(cors_layer(&config.cors)?)
            .layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(addr).await?;

        Ok(Self { router, listener })
    }

    pub async fn run(
        self,
        shutdown_rx: Receiver<()>,
    ) -> anyhow::Result<JoinHandle<anyhow::Result<()>>> {
        tracing::info!("Starting app on {}", self.listener.local_addr()?);

        let listener = self.listener;
        let router = self.router;
        let server_handle = tokio::spawn({
            let mut shutdown_rx = shutdown_rx.resubscribe();
            async move {
                axum::serve(listener, router)
                    .with_graceful_shutdown(async move {
                        shutdown_rx.recv().await.ok();
                    })
                    .await?;
                Ok(())
            }
        });

        Ok(server_handle)
    }
}

fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
