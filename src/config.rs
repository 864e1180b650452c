// Configuration module: gathers every tunable of the tool in one place
// and resolves it once at startup, so the rest of the code receives
// explicit values instead of reading the environment ad hoc.

use std::path::PathBuf;
use std::time::Duration;

/// Default API key baked into the binary, used when `PLANTNET_API_KEY`
/// is unset. PlantNet hands these out freely for the public tier.
pub const DEFAULT_API_KEY: &str = "2b10EfVpLTVMBcHs9nZrBldLP";

/// Identification endpoint for the public "all floras" project.
pub const DEFAULT_API_URL: &str = "https://my-api.plantnet.org/v2/identify/all";

/// Image uploaded when no path is given on the command line.
pub const DEFAULT_IMAGE_PATH: &str = "image.jpg";

/// Organ hint sent with every request. Telling the service which plant
/// part the photo shows improves match accuracy.
pub const ORGAN: &str = "leaf";

/// Hard timeout for the single outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolved configuration for one run of the tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub image_path: PathBuf,
}

impl Config {
    /// Build a Config from the environment and an optional image path
    /// taken from the command line. `PLANTNET_API_URL` exists so the
    /// tool can be pointed at a local mock or proxy; normal runs never
    /// set it.
    pub fn from_env(image_arg: Option<String>) -> Self {
        let api_key =
            std::env::var("PLANTNET_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.into());
        let api_url =
            std::env::var("PLANTNET_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let image_path = PathBuf::from(image_arg.unwrap_or_else(|| DEFAULT_IMAGE_PATH.into()));
        Config {
            api_key,
            api_url,
            image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_overrides_default_image_path() {
        let cfg = Config::from_env(Some("photos/rose.jpg".into()));
        assert_eq!(cfg.image_path, PathBuf::from("photos/rose.jpg"));
    }

    #[test]
    fn image_path_falls_back_to_default() {
        let cfg = Config::from_env(None);
        assert_eq!(cfg.image_path, PathBuf::from(DEFAULT_IMAGE_PATH));
    }
}
