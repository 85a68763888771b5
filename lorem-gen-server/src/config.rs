use clap::Parser;

/// Command-line and environment configuration of the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "lorem-gen-server", version, about = "Serves lorem filler text and preset preview texts over HTTP")]
pub struct ServerConfig {
	/// Address to bind.
	#[arg(long, env = "LOREM_GEN_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind.
	#[arg(long, env = "LOREM_GEN_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Upper bound applied to the `count` query parameter.
	#[arg(long, env = "LOREM_GEN_MAX_COUNT", default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..))]
	pub max_count: i64,

	/// Seed for a shared, reproducible random source. Unseeded when absent.
	#[arg(long, env = "LOREM_GEN_SEED")]
	pub seed: Option<u64>,
}
