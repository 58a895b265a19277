use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the HTTP server to listen on.
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// API key for the Generative Language service.
    #[arg(long, env = "API_KEY", default_value = "")]
    pub api_key: String,

    /// Model name for chat completion.
    #[arg(long, env = "CHAT_MODEL", default_value = "gemini-1.5-flash")]
    pub chat_model: String,

    /// Base URL override for the Generative Language API.
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,
}
