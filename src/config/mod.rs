pub mod nav_config;
pub mod path_matcher;

pub use nav_config::{NavConfig, CONFIG_FILE_NAME};
pub use path_matcher::OriginMatcher;
