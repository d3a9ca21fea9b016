use crate::core::{Greeter, Greeting};
use crate::utils::error::Result;

// Fixed startup recipient; no flag or config field may change it.
const RECIPIENT: &str = "Nkwenti";

pub struct GatewayApp<G: Greeter> {
    greeter: G,
}

impl<G: Greeter> GatewayApp<G> {
    pub fn new(greeter: G) -> Self {
        Self { greeter }
    }

    pub async fn run(&self) -> Result<Greeting> {
        tracing::info!("Gateway context ready");

        let greeting = self.greeter.greet(RECIPIENT).await?;

        tracing::info!("Greeted {}", greeting.recipient);
        Ok(greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GatewayError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct RecordingGreeter {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingGreeter {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn recorded_calls(&self) -> Vec<String> {
            let calls = self.calls.lock().await;
            calls.clone()
        }
    }

    #[async_trait::async_trait]
    impl Greeter for RecordingGreeter {
        async fn greet(&self, name: &str) -> Result<Greeting> {
            let mut calls = self.calls.lock().await;
            calls.push(name.to_string());
            Ok(Greeting {
                recipient: name.to_string(),
                message: format!("Hello, {}!", name),
            })
        }
    }

    struct FailingGreeter;

    #[async_trait::async_trait]
    impl Greeter for FailingGreeter {
        async fn greet(&self, _name: &str) -> Result<Greeting> {
            Err(GatewayError::GreetingError {
                message: "delivery refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_run_greets_nkwenti_exactly_once() {
        let greeter = RecordingGreeter::new();
        let app = GatewayApp::new(greeter.clone());

        let greeting = app.run().await.unwrap();

        assert_eq!(greeting.recipient, "Nkwenti");
        assert_eq!(greeting.message, "Hello, Nkwenti!");

        let calls = greeter.recorded_calls().await;
        assert_eq!(calls, vec!["Nkwenti".to_string()]);
    }

    #[tokio::test]
    async fn test_run_propagates_greeter_failure() {
        let app = GatewayApp::new(FailingGreeter);

        let result = app.run().await;

        assert!(result.is_err());
        match result.unwrap_err() {
            GatewayError::GreetingError { message } => assert_eq!(message, "delivery refused"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
