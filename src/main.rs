use clap::Parser;
use linksphere_gateway::utils::{logger, validation::Validate};
use linksphere_gateway::{CliConfig, GatewayApp, PlainGreeter, StdoutConsole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_filter.as_deref());

    tracing::info!("Starting linksphere-gateway");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 組裝服務：控制台 → 問候服務 → 應用
    let console = StdoutConsole::new();
    let greeter = PlainGreeter::new(console);
    let app = GatewayApp::new(greeter);

    match app.run().await {
        Ok(greeting) => {
            tracing::info!("✅ Gateway startup greeting delivered!");
            tracing::info!("👋 Recipient: {}", greeting.recipient);
        }
        Err(e) => {
            tracing::error!(
                "❌ Gateway bootstrap failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                linksphere_gateway::utils::error::ErrorSeverity::Low => 0,
                linksphere_gateway::utils::error::ErrorSeverity::Medium => 2,
                linksphere_gateway::utils::error::ErrorSeverity::High => 1,
                linksphere_gateway::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
