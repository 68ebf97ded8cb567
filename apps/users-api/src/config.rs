use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000 unless set

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
