use crate::config::{Config, PredictorMode};
use crate::prediction::{MockPredictor, Predictor};
use crate::server::HttpServer;
use crate::toy_model::ToyModelPredictor;
use crate::vocabulary::GLOSSES;

use std::{error::Error, sync::Arc};
use tokio::{signal, sync::broadcast};

pub async fn start_app(config: Config) -> Result<(), Box<dyn Error>> {
    let predictor: Arc<dyn Predictor> = match config.predictor.mode {
        PredictorMode::Mock => Arc::new(MockPredictor::new()),
        PredictorMode::Toy => Arc::new(ToyModelPredictor::new()),
    };
    tracing::info!(
        "Loaded {} glosses, predictor mode: {}",
        GLOSSES.len(),
        config.predictor.mode.as_str()
    );

    let server = HttpServer::new(predictor, &config).await?;

    let (shutdown_tx, _) = broadcast::channel(1);
    let server_shutdown_rx = shutdown_tx.subscribe();

    let server_handle = server.run(server_shutdown_rx).await?;

    shutdown_signal().await;
    tracing::info!("Shutdown signal received, starting graceful shutdown.");

    let _ = shutdown_tx.send(());
    let _ = server_handle.await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
