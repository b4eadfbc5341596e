use crate::advisor::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod advisor;
mod cli;
mod config;
mod llm;
mod search;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let prompt = args.prompt.clone();
    let config = args.into_config();

    let output = launch(&config, &prompt).await?;
    println!("{}", output);
    Ok(())
}
