use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// シンボルID（"<file>#<name>"）
pub type SymbolId = String;

/// ファイルパスと名前からシンボルIDを生成
pub fn symbol_id(file: &str, name: &str) -> SymbolId {
    format!("{}#{}", file, name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Component,
    Directive,
    /// @Injectable で宣言されたプロバイダー
    Injectable,
    Pipe,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Component => "component",
            DeclarationKind::Directive => "directive",
            DeclarationKind::Injectable => "injectable",
            DeclarationKind::Pipe => "pipe",
        }
    }

    /// コンポーネントまたはディレクティブか
    pub fn is_directive_like(&self) -> bool {
        matches!(self, DeclarationKind::Component | DeclarationKind::Directive)
    }
}

/// 宣言の出自
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Origin {
    #[default]
    Workspace,
    /// node_modules 等、解析対象外の依存から来た宣言
    ThirdParty,
}

/// コンポーネント / ディレクティブ / プロバイダー / パイプの宣言
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub file: PathBuf,
    /// 未指定の場合はレジストリ登録時にファイルパスから判定
    #[serde(default)]
    pub origin: Option<Origin>,
    /// フレームワーク（@angular/*）自身の宣言か。未指定の場合はパスから判定
    #[serde(default)]
    pub angular: Option<bool>,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub export_as: Option<String>,
    #[serde(default)]
    pub change_detection: Option<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    /// providers に登録されたシンボルID
    #[serde(default)]
    pub providers: Vec<SymbolId>,
    /// コンストラクタ注入される依存のシンボルID
    #[serde(default)]
    pub dependencies: Vec<SymbolId>,
    /// コンポーネントのテンプレート（解析できなかった場合はNone）
    #[serde(default)]
    pub template: Option<Vec<Option<Arc<TemplateNode>>>>,
}

impl Declaration {
    pub fn id(&self) -> SymbolId {
        symbol_id(&self.file.to_string_lossy(), &self.name)
    }

    pub fn is_third_party(&self) -> bool {
        self.origin == Some(Origin::ThirdParty)
    }

    pub fn is_angular(&self) -> bool {
        self.angular.unwrap_or(false)
    }

    /// テンプレートのルートノード列
    pub fn template_ast(&self) -> Option<&[Option<Arc<TemplateNode>>]> {
        self.template.as_deref()
    }
}

/// テンプレート内の要素ノード
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateNode {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<TemplateAttribute>,
    /// 適用されたディレクティブのシンボルID
    #[serde(default)]
    pub directives: Vec<SymbolId>,
    /// 要素にバインドされたコンポーネントのシンボルID
    #[serde(default)]
    pub component: Option<SymbolId>,
    /// 解析層が疎な配列を返すことがあるため要素はOption
    #[serde(default)]
    pub children: Vec<Option<Arc<TemplateNode>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateAttribute {
    pub name: String,
    #[serde(default)]
    pub value: String,
}
