pub mod html;

pub use html::render_page;

use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared, immutable server state: the page rendered at start-up.
#[derive(Clone)]
pub struct AppState {
    page: Bytes,
}

impl AppState {
    pub fn new(page: String) -> Self {
        Self {
            page: Bytes::from(page),
        }
    }

    pub fn page_len(&self) -> usize {
        self.page.len()
    }
}

async fn dashboard(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page.clone())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("🌐 Dashboard available at http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
