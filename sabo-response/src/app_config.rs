use serde::Deserialize;
use std::env;

use sabo_schedule::ProposalConfig;
use sabo_venue::DirectoryConfig;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub proposal: ProposalConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file layer is optional: the engine is a library and the
            // defaults reproduce the platform behavior on their own.
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment, e.g. SABO__DIRECTORY__SUGGESTION_LIMIT=3
            .add_source(config::Environment::with_prefix("SABO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
