use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::path_matcher::OriginMatcher;
use crate::error::WorkspaceError;

pub const CONFIG_FILE_NAME: &str = "ngviewconfig.json";

/// ngviewconfig.json の設定
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    /// サードパーティ宣言とみなすglobパターン
    #[serde(default = "default_third_party")]
    pub third_party: Vec<String>,
    /// フレームワーク宣言（angular: true）とみなすglobパターン
    #[serde(default = "default_framework")]
    pub framework: Vec<String>,
    /// 最初に表示するシンボルID（"<file>#<name>"）または宣言名
    #[serde(default)]
    pub entry: Option<String>,
}

fn default_third_party() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_framework() -> Vec<String> {
    vec!["**/node_modules/@angular/**".to_string()]
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            third_party: default_third_party(),
            framework: default_framework(),
            entry: None,
        }
    }
}

impl NavConfig {
    /// 指定ディレクトリからngviewconfig.jsonを読み込む
    pub fn load_from_dir(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(CONFIG_FILE_NAME))
    }

    /// 指定パスからngviewconfig.jsonを読み込む
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", CONFIG_FILE_NAME, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", CONFIG_FILE_NAME, e);
                Self::default()
            }
        }
    }

    /// OriginMatcherを作成
    pub fn create_origin_matcher(&self) -> Result<OriginMatcher, WorkspaceError> {
        OriginMatcher::new(&self.third_party, &self.framework)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert_eq!(config.third_party, vec!["**/node_modules/**"]);
        assert_eq!(config.framework, vec!["**/node_modules/@angular/**"]);
        assert!(config.entry.is_none());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "thirdParty": ["vendor/**"],
            "entry": "src/app.component.ts#AppComponent"
        }"#;
        let config: NavConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.third_party, vec!["vendor/**"]);
        assert_eq!(config.framework, vec!["**/node_modules/@angular/**"]);
        assert_eq!(config.entry.as_deref(), Some("src/app.component.ts#AppComponent"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NavConfig::load_from_dir(dir.path());
        assert_eq!(config.third_party, vec!["**/node_modules/**"]);
    }

    #[test]
    fn test_broken_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        let config = NavConfig::load_from_dir(dir.path());
        assert!(config.entry.is_none());
        assert_eq!(config.framework, vec!["**/node_modules/@angular/**"]);
    }
}
