//! Settings shared by the command handlers

use thinkers_core::{ApiKey, GenerationConfig, Generator, Roster};
use thinkers_llm::{ClientConfig, OpenAiClient, TokioSleeper};

use crate::cli::GlobalArgs;

/// Environment defaults overlaid with command-line flags
pub fn load_config(global: &GlobalArgs) -> GenerationConfig {
    let mut config = GenerationConfig::from_env();
    if let Some(model) = &global.model {
        config.model = model.clone();
    }
    if let Some(dir) = &global.output_dir {
        config.output_root = dir.clone();
    }
    config
}

pub fn load_roster(global: &GlobalArgs) -> anyhow::Result<Roster> {
    match &global.roster {
        Some(path) => Ok(Roster::from_json_file(path)?),
        None => Ok(Roster::builtin()),
    }
}

pub fn build_generator(
    api_key: &ApiKey,
    config: GenerationConfig,
) -> anyhow::Result<Generator<OpenAiClient, TokioSleeper>> {
    let client = OpenAiClient::new(ClientConfig {
        timeout: config.request_timeout,
        ..ClientConfig::new(api_key.expose(), config.model.clone())
    })?;
    Ok(Generator::new(client, TokioSleeper, config))
}

/// Single-threaded runtime: items are processed strictly one after another
pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
