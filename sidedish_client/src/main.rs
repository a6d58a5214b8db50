use clap::Parser;
use sidedish_client::interface_adapters::cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    sidedish_client::run(cli).await
}
