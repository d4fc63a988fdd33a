use dreamfactory_tools::{retry::RetryPolicy, tools::ToolRegistry, DreamFactoryClient, ToolCall};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let registry = ToolRegistry::dreamfactory(Arc::new(DreamFactoryClient::from_env()));

    let mut args = std::env::args().skip(1);
    let Some(tool) = args.next() else {
        println!("{}", serde_json::to_string_pretty(&registry.to_tools())?);
        return Ok(());
    };
    let arguments = args.next().unwrap_or_else(|| "{}".to_string());

    let call = ToolCall::new("cli", tool, arguments);
    let output = RetryPolicy::default()
        .run(|| registry.dispatch_to_string(&call))
        .await?;

    println!("{}", output);
    Ok(())
}
