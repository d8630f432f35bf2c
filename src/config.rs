use std::env;
use std::net::SocketAddr;

const PORT_ENV: &str = "PORT";
const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Port 80 unless `PORT` holds a valid port number.
    pub fn from_env() -> ServerConfig {
        Self::from_port(env::var(PORT_ENV).ok())
    }

    fn from_port(port: Option<String>) -> ServerConfig {
        let port = port
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        ServerConfig { port }
    }

    pub fn bind_address(&self) -> SocketAddr {
        ([0, 0, 0, 0], self.port).into()
    }
}
