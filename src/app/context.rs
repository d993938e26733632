use std::path::Path;

use crate::app::error::{FeedError, Result};
use crate::codec::JsonFeedCodec;
use crate::config::Config;
use crate::domain::{Feed, JsonFeed};
use crate::normalizer::Normalizer;
use crate::reader;

pub struct AppContext {
    pub config: Config,
    pub normalizer: Normalizer,
    pub codec: JsonFeedCodec,
}

impl AppContext {
    /// Loads configuration from `config_path`, or from the default location.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| FeedError::Config(e.to_string()))?;

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let normalizer = Normalizer::with_options(config.normalizer);
        let codec = JsonFeedCodec::with_options(config.codec);

        Self {
            config,
            normalizer,
            codec,
        }
    }

    /// Forces indented output regardless of the loaded configuration.
    pub fn with_pretty_output(mut self) -> Self {
        self.config.codec.pretty = true;
        self.codec = JsonFeedCodec::with_options(self.config.codec);
        self
    }

    pub fn read(&self, bytes: &[u8]) -> Result<Feed> {
        reader::read_feed(bytes, &self.codec)
    }

    pub fn normalize(&self, bytes: &[u8]) -> Result<JsonFeed> {
        let feed = self.read(bytes)?;
        Ok(self.normalizer.normalize(&feed))
    }

    /// Reads any supported feed and writes it back as JSON Feed 1.1.
    pub fn convert(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let feed = self.normalize(bytes)?;
        Ok(self.codec.encode(&feed))
    }
}
