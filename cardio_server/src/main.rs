use cardio_model::DenseBackend;
use cardio_server::{routes, AppState};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_MODEL_PATH: &str = "artifacts/cardiac_nn.json";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let model_path =
        std::env::var("CARDIO_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
    let addr: SocketAddr = std::env::var("CARDIO_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .unwrap_or_else(|e| {
            error!("invalid CARDIO_ADDR: {e}");
            std::process::exit(1);
        });

    info!("loading model artifact from {model_path}");
    let model = match DenseBackend::load(&model_path) {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            // Startup-fatal: never serve without a model.
            error!("could not load model: {e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(model));
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("cardio_server listening on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}
