use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod indexer;

#[derive(Debug, Parser)]
#[command(
	version = trialwise_cli::VERSION,
	rename_all = "kebab",
	styles = trialwise_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: std::path::PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = trialwise_config::load(&args.config)?;
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let records = trialwise_storage::records::RecordStore::load(&config.data)?;
	let qdrant = trialwise_storage::qdrant::QdrantStore::new(&config.storage.qdrant)?;

	let state = indexer::IndexerState {
		records,
		qdrant,
		embedding: config.providers.embedding,
		truncate_chars: config.index.truncate_chars,
		batch_size: config.index.batch_size as usize,
	};

	indexer::run_indexer(state).await
}
