use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = trialwise_api::Args::parse();
	trialwise_api::run(args).await
}
