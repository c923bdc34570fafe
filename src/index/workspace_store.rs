use std::fs;
use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{NavConfig, OriginMatcher};
use crate::error::WorkspaceError;
use crate::model::{Declaration, DeclarationKind, SymbolId};

pub const WORKSPACE_FILE_NAME: &str = "workspace.json";

/// 解析エンジンが出力するワークスペースダンプ
#[derive(Debug, Deserialize)]
struct WorkspaceDump {
    #[serde(default)]
    declarations: Vec<Declaration>,
}

/// ワークスペース内の宣言シンボルの管理ストア
///
/// ナビゲーションセッション全体で読み取り専用として共有される。
pub struct WorkspaceSymbols {
    /// シンボルID -> 宣言
    declarations: DashMap<SymbolId, Arc<Declaration>>,
    matcher: OriginMatcher,
}

impl WorkspaceSymbols {
    pub fn new(matcher: OriginMatcher) -> Self {
        Self {
            declarations: DashMap::new(),
            matcher,
        }
    }

    /// 宣言を登録（origin / angular が未指定ならファイルパスから判定）
    pub fn add_declaration(&self, mut declaration: Declaration) -> SymbolId {
        if declaration.origin.is_none() {
            declaration.origin = Some(self.matcher.origin_of(&declaration.file));
        }
        if declaration.angular.is_none() {
            declaration.angular = Some(self.matcher.is_framework(&declaration.file));
        }
        let id = declaration.id();
        if self.declarations.contains_key(&id) {
            debug!("Duplicate declaration {}, keeping the latest", id);
        }
        self.declarations.insert(id.clone(), Arc::new(declaration));
        id
    }

    pub fn get(&self, id: &str) -> Option<Arc<Declaration>> {
        self.declarations.get(id).map(|d| Arc::clone(d.value()))
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Arc<Declaration>> {
        let mut found: Vec<_> = self
            .declarations
            .iter()
            .filter(|entry| entry.value().name == name)
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        found.sort_by_key(|d| d.id());
        found
    }

    /// 全宣言をシンボルID順で取得
    pub fn get_all_declarations(&self) -> Vec<Arc<Declaration>> {
        let mut all: Vec<_> = self
            .declarations
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        all.sort_by_key(|d| d.id());
        all
    }

    /// ワークスペース内（サードパーティ以外）のコンポーネント
    pub fn workspace_components(&self) -> Vec<Arc<Declaration>> {
        self.get_all_declarations()
            .into_iter()
            .filter(|d| d.kind == DeclarationKind::Component && !d.is_third_party())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// JSON文字列からストアを構築
    pub fn from_json(json: &str, matcher: OriginMatcher) -> Result<Self, WorkspaceError> {
        let dump: WorkspaceDump = serde_json::from_str(json)?;
        let store = Self::new(matcher);
        for declaration in dump.declarations {
            store.add_declaration(declaration);
        }
        Ok(store)
    }

    /// ダンプファイルからストアを構築
    pub fn load_from_path(path: &Path, config: &NavConfig) -> Result<Self, WorkspaceError> {
        let content = fs::read_to_string(path)?;
        let store = Self::from_json(&content, config.create_origin_matcher()?)?;
        info!(
            "Loaded {} declarations from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// ディレクトリ内の workspace.json と ngviewconfig.json を読み込む
    pub fn load_from_dir(dir: &Path) -> Result<(NavConfig, Self), WorkspaceError> {
        let config = NavConfig::load_from_dir(dir);
        let store = Self::load_from_path(&dir.join(WORKSPACE_FILE_NAME), &config)?;
        Ok((config, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclarationBuilder, Origin};

    fn store() -> WorkspaceSymbols {
        WorkspaceSymbols::new(NavConfig::default().create_origin_matcher().unwrap())
    }

    #[test]
    fn test_origin_derived_from_path() {
        let store = store();
        let local = store.add_declaration(
            DeclarationBuilder::new("AppComponent", DeclarationKind::Component, "src/app.ts")
                .build(),
        );
        let external = store.add_declaration(
            DeclarationBuilder::new(
                "NgIf",
                DeclarationKind::Directive,
                "node_modules/@angular/common/index.d.ts",
            )
            .build(),
        );

        let local = store.get(&local).unwrap();
        assert_eq!(local.origin, Some(Origin::Workspace));
        assert!(!local.is_angular());

        let external = store.get(&external).unwrap();
        assert!(external.is_third_party());
        assert!(external.is_angular());
    }

    #[test]
    fn test_explicit_origin_kept() {
        let store = store();
        let id = store.add_declaration(
            DeclarationBuilder::new("Legacy", DeclarationKind::Component, "src/legacy.ts")
                .origin(Origin::ThirdParty)
                .build(),
        );
        assert!(store.get(&id).unwrap().is_third_party());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "declarations": [
                {
                    "name": "AppComponent",
                    "kind": "component",
                    "file": "src/app.ts",
                    "template": [
                        { "name": "div", "children": [null, { "name": "span" }] }
                    ]
                },
                { "name": "DataService", "kind": "injectable", "file": "src/data.ts" }
            ]
        }"#;
        let store = WorkspaceSymbols::from_json(json, store().matcher.clone()).unwrap();
        assert_eq!(store.len(), 2);

        let app = store.get("src/app.ts#AppComponent").unwrap();
        let template = app.template_ast().unwrap();
        let div = template[0].as_ref().unwrap();
        assert!(div.children[0].is_none());
        assert_eq!(div.children[1].as_ref().unwrap().name, "span");

        assert_eq!(store.workspace_components().len(), 1);
        assert_eq!(store.find_by_name("DataService").len(), 1);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = WorkspaceSymbols::from_json("{ broken", store().matcher.clone());
        assert!(matches!(result, Err(WorkspaceError::Parse(_))));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(WORKSPACE_FILE_NAME),
            r#"{ "declarations": [{ "name": "Foo", "kind": "pipe", "file": "vendor/foo.ts" }] }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(crate::config::CONFIG_FILE_NAME),
            r#"{ "thirdParty": ["vendor/**"] }"#,
        )
        .unwrap();

        let (_, store) = WorkspaceSymbols::load_from_dir(dir.path()).unwrap();
        assert!(store.get("vendor/foo.ts#Foo").unwrap().is_third_party());
    }

    #[test]
    fn test_load_from_dir_missing_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let result = WorkspaceSymbols::load_from_dir(dir.path());
        assert!(matches!(result, Err(WorkspaceError::Io(_))));
    }
}
