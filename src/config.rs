// Runtime configuration shared by the terminal and web front ends.
// Values come from command-line flags; anything not given falls back to the
// defaults below.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "web";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON document
    pub data_path: PathBuf,
    /// Address the web server listens on
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Log destination; `None` means stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: default_bind_addr(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_file: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

impl Config {
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = path;
        }
        self
    }

    pub fn with_bind_addr(mut self, addr: Option<SocketAddr>) -> Self {
        if let Some(addr) = addr {
            self.bind_addr = addr;
        }
        self
    }

    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.static_dir = dir;
        }
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}
