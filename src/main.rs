use anyhow::Result;
use xroot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
