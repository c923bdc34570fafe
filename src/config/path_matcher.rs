use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::WorkspaceError;
use crate::model::Origin;

/// 宣言ファイルの出自を判定する構造体
#[derive(Debug, Clone)]
pub struct OriginMatcher {
    third_party: GlobSet,
    framework: GlobSet,
}

impl OriginMatcher {
    /// thirdParty/frameworkパターンからOriginMatcherを作成
    pub fn new(third_party: &[String], framework: &[String]) -> Result<Self, WorkspaceError> {
        Ok(Self {
            third_party: build_set(third_party)?,
            framework: build_set(framework)?,
        })
    }

    /// ファイルの出自（ワークスペース内 / サードパーティ）を判定
    pub fn origin_of(&self, file: &Path) -> Origin {
        if self.third_party.is_match(file) {
            Origin::ThirdParty
        } else {
            Origin::Workspace
        }
    }

    /// フレームワーク自身（@angular/*）の宣言かどうか
    pub fn is_framework(&self, file: &Path) -> bool {
        self.framework.is_match(file)
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet, WorkspaceError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| WorkspaceError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| WorkspaceError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> OriginMatcher {
        OriginMatcher::new(
            &["**/node_modules/**".to_string()],
            &["**/node_modules/@angular/**".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_workspace_file() {
        let m = matcher();
        assert_eq!(m.origin_of(Path::new("src/app/app.component.ts")), Origin::Workspace);
        assert!(!m.is_framework(Path::new("src/app/app.component.ts")));
    }

    #[test]
    fn test_third_party_file() {
        let m = matcher();
        let path = Path::new("node_modules/ngx-charts/chart.component.d.ts");
        assert_eq!(m.origin_of(path), Origin::ThirdParty);
        assert!(!m.is_framework(path));
    }

    #[test]
    fn test_framework_file() {
        let m = matcher();
        let path = Path::new("node_modules/@angular/common/index.d.ts");
        assert_eq!(m.origin_of(path), Origin::ThirdParty);
        assert!(m.is_framework(path));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = OriginMatcher::new(&["a[".to_string()], &[]);
        assert!(matches!(result, Err(WorkspaceError::InvalidPattern { .. })));
    }
}
