use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the denormalization sync to completion
    Run {
        #[arg(long, help = "Connection string; falls back to MONGO_URL")]
        uri: Option<String>,

        #[arg(long, help = "KEY=VALUE file consulted after the environment")]
        env_file: Option<String>,

        #[arg(long, default_value = "sample_analytics", help = "Database name")]
        database: String,

        #[arg(
            long,
            default_value = "accounts",
            help = "Collection the projections are read from"
        )]
        source_collection: String,

        #[arg(
            long,
            default_value = "transactions",
            help = "Collection receiving the embedded projections"
        )]
        target_collection: String,

        #[arg(long, default_value_t = 100, help = "Records per page")]
        page_size: usize,

        #[arg(
            long,
            default_value_t = 1,
            help = "Attempts per page fetch/submission; 1 disables retry"
        )]
        retry_attempts: u32,

        #[arg(
            long,
            default_value_t = 10,
            help = "Connect and server-selection timeout in seconds"
        )]
        connect_timeout_secs: u64,

        #[arg(long, help = "Print the final report as JSON to stdout")]
        json: bool,
    },
    /// Test the connection string against the deployment
    TestConn {
        #[arg(long, help = "Connection string; falls back to MONGO_URL")]
        uri: Option<String>,

        #[arg(long, help = "KEY=VALUE file consulted after the environment")]
        env_file: Option<String>,

        #[arg(
            long,
            default_value_t = 10,
            help = "Connect and server-selection timeout in seconds"
        )]
        connect_timeout_secs: u64,
    },
}
