pub mod api;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::info;

use crate::relay::ChatRelay;

pub struct Server {
    addr: SocketAddr,
    relay: Arc<ChatRelay>,
}

impl Server {
    pub fn new(addr: SocketAddr, relay: Arc<ChatRelay>) -> Self {
        Self { addr, relay }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::router(self.relay.clone());
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Server listening on http://{}", listener.local_addr()?);
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
