use std::sync::Arc;

use anyhow::Context;
use bson::doc;
use mongodb::{Client, Database};

use crate::catalog::{CatalogClient, FreeToGameClient};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
    pub catalog: Arc<dyn CatalogClient>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let client = Client::with_uri_str(&config.mongodb_url)
            .await
            .context("parse mongodb url")?;
        let db = client.database(&config.mongodb_db);

        // The driver connects lazily; ping so a dead database is caught here.
        db.run_command(doc! { "ping": 1 })
            .await
            .context("connect to database")?;

        let catalog =
            Arc::new(FreeToGameClient::new(&config.catalog_base_url)) as Arc<dyn CatalogClient>;

        Ok(Self::from_parts(db, config, catalog))
    }

    pub fn from_parts(
        db: Database,
        config: Arc<AppConfig>,
        catalog: Arc<dyn CatalogClient>,
    ) -> Self {
        Self {
            db,
            config,
            catalog,
        }
    }
}
