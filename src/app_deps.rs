use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::home;

#[async_trait]
pub trait HomeApi: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;
}

pub trait HomeApiFactory: Send + Sync {
    fn create(&self, host: &str, api_key: String) -> Result<Box<dyn HomeApi>>;
}

pub struct RealHomeApi {
    inner: home::HomeClient,
}

#[async_trait]
impl HomeApi for RealHomeApi {
    async fn get(&self, path: &str) -> Result<Value> {
        self.inner.get(path).await
    }
}

pub struct RealHomeApiFactory;

impl HomeApiFactory for RealHomeApiFactory {
    fn create(&self, host: &str, api_key: String) -> Result<Box<dyn HomeApi>> {
        let client = home::HomeClient::new(host, api_key)?;
        Ok(Box::new(RealHomeApi { inner: client }))
    }
}
