use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb_url: String,
    pub mongodb_db: String,
    pub catalog_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            mongodb_url: std::env::var("MONGODB_URL")?,
            mongodb_db: std::env::var("MONGODB_DB").unwrap_or_else(|_| "storefront".into()),
            catalog_base_url: std::env::var("F2P_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.freetogame.com/api".into()),
        })
    }
}
