//! ビュー状態（ステートマシン）
//!
//! 各ビューは対象シンボルからグラフを構築し、クリックされたノードIDを
//! シンボルに引き戻して、次のビューへ遷移できるかを判定する。

pub mod directive;
pub mod provider;
pub mod template;


use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::formatter;
use crate::index::WorkspaceSymbols;
use crate::model::{
    Declaration, DeclarationKind, Edge, Metadata, Node, NodeType, SymbolType, TemplateNode,
    VisualizationConfig,
};

pub use directive::DirectiveView;
pub use provider::ProviderView;
pub use template::{add_template_nodes, TemplateView, TEMPLATE_ID};

/// グラフノードの元になったシンボル
#[derive(Debug, Clone)]
pub enum NodeSymbol {
    Declaration(Arc<Declaration>),
    TemplateNode(Arc<TemplateNode>),
}

impl NodeSymbol {
    /// 解析できないサードパーティのコンポーネント / ディレクティブか
    ///
    /// サードパーティのプロバイダーやパイプは対象外。
    pub fn is_third_party(&self) -> bool {
        match self {
            NodeSymbol::Declaration(declaration) => {
                declaration.kind.is_directive_like() && declaration.is_third_party()
            }
            NodeSymbol::TemplateNode(_) => false,
        }
    }

    pub fn metadata(&self, context: &WorkspaceSymbols) -> Metadata {
        match self {
            NodeSymbol::Declaration(declaration) => formatter::declaration_metadata(declaration),
            NodeSymbol::TemplateNode(node) => formatter::element_metadata(node, context),
        }
    }
}

/// ノードID -> シンボル（ルートノードは含まない）
pub type NodeMap = HashMap<String, NodeSymbol>;

/// グラフ構築中のノード・エッジ・NodeMap
#[derive(Debug, Default)]
pub struct GraphAccumulator {
    pub nodes: Vec<Node<NodeSymbol>>,
    pub edges: Vec<Edge>,
    pub symbols: NodeMap,
}

impl GraphAccumulator {
    /// ルートノードだけを持つアキュムレータ
    pub fn with_root(root: Node<NodeSymbol>) -> Self {
        Self {
            nodes: vec![root],
            ..Self::default()
        }
    }

    /// 宣言ノードを親の下に追加（同じIDが既にあれば何もしない）
    fn push_declaration(&mut self, parent_id: &str, id: String, declaration: Arc<Declaration>) {
        if self.symbols.contains_key(&id) {
            return;
        }
        let symbol = NodeSymbol::Declaration(Arc::clone(&declaration));
        self.nodes.push(
            Node::new(id.clone(), declaration.name.as_str(), declaration_node_type(&declaration))
                .with_data(symbol.clone()),
        );
        self.edges.push(Edge::new(parent_id, id.clone()));
        self.symbols.insert(id, symbol);
    }

    /// NodeMapを取り出し、ノードは公開形に変換する
    pub fn finish(self, title: impl Into<String>) -> (VisualizationConfig, NodeMap) {
        (
            VisualizationConfig::new(title, &self.nodes, self.edges),
            self.symbols,
        )
    }
}

/// 宣言の種類に対応するノード種別
pub fn declaration_node_type(declaration: &Declaration) -> NodeType {
    let kind = match declaration.kind {
        DeclarationKind::Component => SymbolType::Component,
        DeclarationKind::Directive => SymbolType::Directive,
        DeclarationKind::Injectable => SymbolType::Provider,
        DeclarationKind::Pipe => SymbolType::Pipe,
    };
    NodeType::new(kind, declaration.is_angular())
}

/// 宣言を対象とするビューを作成（パイプには対応するビューがない）
pub fn declaration_view(
    context: &Arc<WorkspaceSymbols>,
    declaration: &Arc<Declaration>,
) -> Option<Box<dyn ViewState>> {
    match declaration.kind {
        DeclarationKind::Component | DeclarationKind::Directive => Some(Box::new(
            DirectiveView::new(Arc::clone(context), Arc::clone(declaration)),
        )),
        DeclarationKind::Injectable => Some(Box::new(ProviderView::new(
            Arc::clone(context),
            Arc::clone(declaration),
        ))),
        DeclarationKind::Pipe => None,
    }
}

/// ビュー状態の共通インターフェース
pub trait ViewState {
    /// 対象シンボルのID
    fn symbol_id(&self) -> &str;

    /// グラフ上のルートノードID
    fn root_id(&self) -> &str {
        self.symbol_id()
    }

    fn context(&self) -> &Arc<WorkspaceSymbols>;

    /// 直近の get_data() で構築されたNodeMap
    fn symbols(&self) -> &NodeMap;

    /// グラフを構築して返す。NodeMapも毎回作り直す
    fn get_data(&mut self) -> VisualizationConfig;

    /// NodeMapに載らない合成ノードからの遷移
    fn meta_transition(&self, _id: &str) -> Option<Box<dyn ViewState>> {
        None
    }

    /// 解決済みシンボルからの遷移（サードパーティ判定は済んでいる）
    fn drill_down(&self, symbol: &NodeSymbol) -> Option<Box<dyn ViewState>>;

    fn get_metadata(&self, id: &str) -> Option<Metadata> {
        let symbol = self.symbols().get(id)?;
        // 外部パッケージのコンポーネント / ディレクティブは内部まで解析できない
        if symbol.is_third_party() {
            return None;
        }
        Some(symbol.metadata(self.context()))
    }

    fn next_state(&self, id: &str) -> Option<Box<dyn ViewState>> {
        if id == self.root_id() || id == self.symbol_id() {
            return None;
        }
        if let Some(next) = self.meta_transition(id) {
            debug!("Transition from {} via {} to {}", self.symbol_id(), id, next.symbol_id());
            return Some(next);
        }
        let symbol = self.symbols().get(id)?;
        if symbol.is_third_party() {
            debug!("Refusing to navigate into third-party symbol at {}", id);
            return None;
        }
        let next = self.drill_down(symbol)?;
        debug!("Transition from {} via {} to {}", self.symbol_id(), id, next.symbol_id());
        Some(next)
    }
}
