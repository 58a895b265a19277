pub mod cli;
pub mod config;
pub mod llm;
pub mod markup;
pub mod models;
pub mod relay;
pub mod server;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::{ info, warn };

use cli::Args;
use llm::gemini::GeminiChatClient;
use relay::ChatRelay;
use server::Server;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Port: {}", args.port);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url.as_deref().unwrap_or("api default"));
    info!("-------------------------");

    if args.api_key.is_empty() {
        warn!("API_KEY is empty; generation requests will be rejected upstream");
    }

    let chat_client = Arc::new(
        GeminiChatClient::new(args.api_key.clone(), args.chat_model.clone(), args.chat_base_url.clone())
    );
    let relay = Arc::new(ChatRelay::new(chat_client));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let server = Server::new(addr, relay);
    server.run().await?;

    Ok(())
}
