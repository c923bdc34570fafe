use std::sync::Arc;

use tracing::debug;

use super::{GraphAccumulator, NodeMap, NodeSymbol, ViewState};
use crate::index::WorkspaceSymbols;
use crate::model::{
    Declaration, DeclarationKind, Edge, Node, NodeType, SymbolId, SymbolType, TemplateNode,
    VisualizationConfig,
};

/// テンプレートビューのルートノードID
pub const TEMPLATE_ID: &str = "template";

/// コンポーネントのテンプレートを要素ツリーとして表示するビュー
pub struct TemplateView {
    context: Arc<WorkspaceSymbols>,
    directive: Arc<Declaration>,
    symbol_id: SymbolId,
    symbols: NodeMap,
}

impl TemplateView {
    pub fn new(context: Arc<WorkspaceSymbols>, directive: Arc<Declaration>) -> Self {
        let symbol_id = directive.id();
        Self {
            context,
            directive,
            symbol_id,
            symbols: NodeMap::new(),
        }
    }
}

impl ViewState for TemplateView {
    fn symbol_id(&self) -> &str {
        &self.symbol_id
    }

    fn root_id(&self) -> &str {
        TEMPLATE_ID
    }

    fn context(&self) -> &Arc<WorkspaceSymbols> {
        &self.context
    }

    fn symbols(&self) -> &NodeMap {
        &self.symbols
    }

    fn get_data(&mut self) -> VisualizationConfig {
        let label = format!("{}'s Template", self.directive.name);
        let mut acc = GraphAccumulator::with_root(Node::new(
            TEMPLATE_ID,
            label.as_str(),
            NodeType::meta(),
        ));

        if let Some(roots) = self.directive.template_ast() {
            let mut counter = 0;
            add_template_nodes(roots, TEMPLATE_ID, &mut counter, &self.context, &mut acc);
        }

        let (config, symbols) = acc.finish(label);
        self.symbols = symbols;
        config
    }

    fn drill_down(&self, symbol: &NodeSymbol) -> Option<Box<dyn ViewState>> {
        match symbol {
            NodeSymbol::Declaration(declaration)
                if declaration.kind == DeclarationKind::Component =>
            {
                Some(Box::new(TemplateView::new(
                    Arc::clone(&self.context),
                    Arc::clone(declaration),
                )))
            }
            NodeSymbol::Declaration(_) | NodeSymbol::TemplateNode(_) => None,
        }
    }
}

/// テンプレート要素を前順（親 → 子 → 次の兄弟）で走査してノードとエッジを追加する
///
/// ノードIDは `el-<counter>` で、counterは呼び出し側が保持する。
/// `None` の要素は counter を消費せずに読み飛ばす。
pub fn add_template_nodes(
    nodes: &[Option<Arc<TemplateNode>>],
    parent_id: &str,
    counter: &mut usize,
    context: &WorkspaceSymbols,
    acc: &mut GraphAccumulator,
) {
    for node in nodes.iter().flatten() {
        *counter += 1;
        let node_id = format!("el-{}", counter);
        acc.edges.push(Edge::new(parent_id, node_id.as_str()));

        let kind = if node.component.is_some() {
            SymbolType::Component
        } else if !node.directives.is_empty() {
            SymbolType::HtmlElementWithDirective
        } else {
            SymbolType::HtmlElement
        };

        let element = NodeSymbol::TemplateNode(Arc::clone(node));
        let symbol = match node.component.as_deref() {
            Some(component_id) => match context.get(component_id) {
                Some(component) => NodeSymbol::Declaration(component),
                None => {
                    debug!("Unresolved component {} on <{}>", component_id, node.name);
                    element.clone()
                }
            },
            None => element.clone(),
        };
        acc.symbols.insert(node_id.clone(), symbol);
        acc.nodes.push(
            Node::new(node_id.as_str(), node.name.as_str(), NodeType::new(kind, false))
                .with_data(element),
        );

        add_template_nodes(&node.children, &node_id, counter, context, acc);
    }
}
