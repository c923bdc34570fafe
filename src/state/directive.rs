use std::sync::Arc;

use tracing::debug;

use super::template::{TemplateView, TEMPLATE_ID};
use super::{
    declaration_node_type, declaration_view, GraphAccumulator, NodeMap, NodeSymbol, ViewState,
};
use crate::index::WorkspaceSymbols;
use crate::model::{
    Declaration, DeclarationKind, Edge, Node, NodeType, SymbolId, VisualizationConfig,
};

/// コンポーネント / ディレクティブの依存関係ビュー
///
/// ルート（対象宣言）の下に、テンプレート（コンポーネントのみ）、
/// コンストラクタ依存、providers を並べる。
pub struct DirectiveView {
    context: Arc<WorkspaceSymbols>,
    directive: Arc<Declaration>,
    symbol_id: SymbolId,
    symbols: NodeMap,
}

impl DirectiveView {
    pub fn new(context: Arc<WorkspaceSymbols>, directive: Arc<Declaration>) -> Self {
        let symbol_id = directive.id();
        Self {
            context,
            directive,
            symbol_id,
            symbols: NodeMap::new(),
        }
    }

    fn has_template(&self) -> bool {
        self.directive.kind == DeclarationKind::Component && self.directive.template.is_some()
    }
}

impl ViewState for DirectiveView {
    fn symbol_id(&self) -> &str {
        &self.symbol_id
    }

    fn context(&self) -> &Arc<WorkspaceSymbols> {
        &self.context
    }

    fn symbols(&self) -> &NodeMap {
        &self.symbols
    }

    fn get_data(&mut self) -> VisualizationConfig {
        let directive = Arc::clone(&self.directive);
        let mut acc = GraphAccumulator::with_root(Node::new(
            self.symbol_id.as_str(),
            directive.name.as_str(),
            declaration_node_type(&directive),
        ));

        if self.has_template() {
            acc.nodes.push(Node::new(TEMPLATE_ID, "Template", NodeType::meta()));
            acc.edges.push(Edge::new(self.symbol_id.as_str(), TEMPLATE_ID));
        }

        for (prefix, ids) in [("dep", &directive.dependencies), ("prov", &directive.providers)] {
            for id in ids {
                let Some(declaration) = self.context.get(id) else {
                    debug!("Skipping unresolved {} {} of {}", prefix, id, self.symbol_id);
                    continue;
                };
                acc.push_declaration(&self.symbol_id, format!("{}-{}", prefix, id), declaration);
            }
        }

        let (config, symbols) = acc.finish(directive.name.as_str());
        self.symbols = symbols;
        config
    }

    fn meta_transition(&self, id: &str) -> Option<Box<dyn ViewState>> {
        if id == TEMPLATE_ID && self.has_template() {
            return Some(Box::new(TemplateView::new(
                Arc::clone(&self.context),
                Arc::clone(&self.directive),
            )));
        }
        None
    }

    fn drill_down(&self, symbol: &NodeSymbol) -> Option<Box<dyn ViewState>> {
        match symbol {
            NodeSymbol::Declaration(declaration) => declaration_view(&self.context, declaration),
            NodeSymbol::TemplateNode(_) => None,
        }
    }
}
