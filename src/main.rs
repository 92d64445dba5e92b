//! MarketDeck headless entry point

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    marketdeck_lib::run().await?;
    Ok(())
}
