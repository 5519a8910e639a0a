use serde::{Deserialize, Serialize};

/// Where the REST API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// Browser storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_credential_key")]
    pub credential_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credential_key: default_credential_key(),
        }
    }
}

fn default_credential_key() -> String {
    "token".to_string()
}

/// Static image location for the pass status widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    #[serde(default = "default_image_base")]
    pub base_path: String,
    #[serde(default = "default_image")]
    pub default_image: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_path: default_image_base(),
            default_image: default_image(),
        }
    }
}

impl ImagesConfig {
    pub fn path_for(&self, filename: &str) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), filename)
    }
}

fn default_image_base() -> String {
    "/static/images".to_string()
}

fn default_image() -> String {
    "default_pass.jpg".to_string()
}

/// Top-level client config matching `config.toml`.
///
/// Every section defaults independently so a partial file still works.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

impl ClientConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
