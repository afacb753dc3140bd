use std::env;

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_proxy_url() -> String {
    "http://127.0.0.1:3000/api/translate".to_string()
}

/// Where the proxy listens and where the translation client reaches it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Full URL of the translate endpoint as seen by the client
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| default_host());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);

        let proxy_url = env::var("PROXY_URL").unwrap_or_else(|_| default_proxy_url());

        Self {
            host,
            port,
            proxy_url,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            proxy_url: default_proxy_url(),
        }
    }
}
