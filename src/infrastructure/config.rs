// Application configuration
use crate::domain::integrations::IntegrationMode;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub plaid: PlaidSettings,
    pub stripe: StripeSettings,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PlaidSettings {
    pub client_id: Option<String>,
    pub secret: Option<String>,
}

impl PlaidSettings {
    pub fn mode(&self) -> IntegrationMode {
        match credential_mode(self.client_id.as_deref()) {
            IntegrationMode::Live
                if self.secret.as_deref().map_or(true, str::is_empty) =>
            {
                IntegrationMode::NotConfigured
            }
            mode => mode,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StripeSettings {
    pub secret_key: Option<String>,
    pub base_url: String,
}

impl Default for StripeSettings {
    fn default() -> Self {
        Self {
            secret_key: None,
            base_url: "https://api.stripe.com/v1".to_string(),
        }
    }
}

impl StripeSettings {
    pub fn mode(&self) -> IntegrationMode {
        credential_mode(self.secret_key.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
        }
    }
}

impl OpenAiSettings {
    pub fn mode(&self) -> IntegrationMode {
        credential_mode(self.api_key.as_deref())
    }
}

/// An absent or empty credential means the integration was never set up;
/// the literal "demo" means demo mode was chosen deliberately.
fn credential_mode(credential: Option<&str>) -> IntegrationMode {
    match credential {
        None | Some("") => IntegrationMode::NotConfigured,
        Some("demo") => IntegrationMode::DemoConfigured,
        Some(_) => IntegrationMode::Live,
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;

    // Environment overrides use the integration vendors' conventional names.
    if let Ok(v) = std::env::var("BIND_ADDR") {
        app_config.server.bind_addr = v;
    }
    if let Ok(v) = std::env::var("PLAID_CLIENT_ID") {
        app_config.plaid.client_id = Some(v);
    }
    if let Ok(v) = std::env::var("PLAID_SECRET") {
        app_config.plaid.secret = Some(v);
    }
    if let Ok(v) = std::env::var("STRIPE_SECRET_KEY") {
        app_config.stripe.secret_key = Some(v);
    }
    if let Ok(v) = std::env::var("OPENAI_API_KEY") {
        app_config.openai.api_key = Some(v);
    }

    Ok(app_config)
}
