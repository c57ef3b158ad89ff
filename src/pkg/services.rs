use async_trait::async_trait;

use crate::prelude::Result;

/// The injected collaborator behind the sample function. Each operation
/// completes or fails with no payload; the handler only calls `insert`.
#[async_trait]
pub trait SampleService: Send + Sync {
    async fn insert(&self) -> Result<()>;
    async fn update(&self) -> Result<()>;
    async fn delete(&self) -> Result<()>;
}

/// Template placeholder. Real deployments swap this out via
/// `AppState::with_service`.
pub struct DefaultSampleService;

#[async_trait]
impl SampleService for DefaultSampleService {
    async fn insert(&self) -> Result<()> {
        tracing::debug!("insert called");
        Ok(())
    }

    async fn update(&self) -> Result<()> {
        tracing::debug!("update called");
        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        tracing::debug!("delete called");
        Ok(())
    }
}
