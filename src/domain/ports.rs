use crate::domain::model::Greeting;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Console: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Greeter: Send + Sync {
    async fn greet(&self, name: &str) -> Result<Greeting>;
}
