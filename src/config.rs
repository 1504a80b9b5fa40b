use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the JSON model artifact (encoders, classifier table, results map)
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Bearer token for the image classification service
    #[serde(default)]
    pub hf_token: Option<String>,

    /// Zero-shot image classification endpoint
    #[serde(default = "default_clip_api_url")]
    pub clip_api_url: String,

    /// Timeout for a single image classification call, in seconds
    #[serde(default = "default_image_timeout_secs")]
    pub image_timeout_secs: u64,

    /// CORS allow-list. Entries may use a `*.` wildcard for one subdomain level.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model_path() -> String {
    "models/fashion_model.json".to_string()
}

fn default_clip_api_url() -> String {
    "https://api-inference.huggingface.co/models/openai/clip-vit-base-patch32".to_string()
}

fn default_image_timeout_secs() -> u64 {
    30
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
