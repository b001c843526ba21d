use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = trialwise_indexer::Args::parse();
	trialwise_indexer::run(args).await
}
