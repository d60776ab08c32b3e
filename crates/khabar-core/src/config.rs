use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            news: NewsConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// API key for the English article search (NEWSAPI_KEY overrides)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Maximum articles fetched per request
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            max_articles: default_max_articles(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// AI provider: "gemini" or "openai"
    #[serde(default = "default_ai_provider")]
    pub provider: String,
    /// Gemini API key (GEMINI_API_KEY overrides)
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// OpenAI API key (OPENAI_API_KEY overrides)
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// OpenAI model name
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Max tokens for one summary
    #[serde(default = "default_max_tokens")]
    pub max_summary_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: default_ai_provider(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            openai_api_key: None,
            openai_model: default_openai_model(),
            max_summary_tokens: default_max_tokens(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_articles() -> usize {
    5
}

fn default_timeout() -> u64 {
    30
}

fn default_ai_provider() -> String {
    "gemini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    256
}

impl AppConfig {
    /// Load configuration from file (or defaults), then apply environment
    /// overrides for the API keys
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        let mut config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/khabar/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("khabar")
            .join("config.toml")
    }

    /// Environment variables take precedence over file values for secrets
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("NEWSAPI_KEY") {
            self.news.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.ai.gemini_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.ai.openai_api_key = Some(key);
        }
    }
}
