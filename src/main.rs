use anyhow::Result;
use dify_probe::client::DifyClient;
use dify_probe::config::{mask_key, Config};
use dify_probe::models::chat::ChatMessageRequest;
use dify_probe::util::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Fails before any network activity when a variable is unset or blank.
    let config = Config::from_env()?;
    let client = DifyClient::new(&config.base_url);

    println!("Starting Dify API smoke probe...");

    probe(
        &client,
        &config.base_url,
        "workflow 1 (teaching design)",
        &config.workflow_1_key,
    )
    .await?;

    probe(
        &client,
        &config.base_url,
        "workflow 2 (general)",
        &config.workflow_2_key,
    )
    .await?;

    Ok(())
}

/// Send the fixed smoke payload to one workflow and print the outcome.
///
/// A non-200 status is reported and does not abort the run; only transport
/// failures propagate.
async fn probe(client: &DifyClient, base_url: &str, label: &str, key: &str) -> Result<()> {
    println!("\nProbing {label}...");
    println!("base URL: {base_url}");
    println!("workflow key: {}", mask_key(key));

    let outcome = client
        .send_chat_message(key, &ChatMessageRequest::smoke())
        .await?;
    println!("{}", outcome.render());

    Ok(())
}
