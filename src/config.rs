use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, clap::Parser)]
#[command(about = "A small blog that keeps its posts in one JSON file")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BLOG_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "BLOG_PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON file holding every post, created on first use
    #[arg(long, env = "BLOG_STORE", default_value = crate::blog::STORE_PATH)]
    pub store: PathBuf,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
