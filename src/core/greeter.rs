use crate::core::{Console, Greeter, Greeting};
use crate::utils::error::Result;

pub struct PlainGreeter<S: Console> {
    console: S,
}

impl<S: Console> PlainGreeter<S> {
    pub fn new(console: S) -> Self {
        Self { console }
    }
}

#[async_trait::async_trait]
impl<S: Console> Greeter for PlainGreeter<S> {
    async fn greet(&self, name: &str) -> Result<Greeting> {
        let message = format!("Hello, {}!", name);

        tracing::debug!("Delivering greeting to: {}", name);
        self.console.write_line(&message).await?;
        tracing::debug!("Greeting delivered");

        Ok(Greeting {
            recipient: name.to_string(),
            message,
        })
    }
}
