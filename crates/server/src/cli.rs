use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "tracker.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Directory served for requests that don't match an API route
    #[clap(long, env, default_value = "static")]
    pub static_dir: PathBuf,
}
