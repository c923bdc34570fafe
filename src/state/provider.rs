use std::sync::Arc;

use tracing::debug;

use super::{
    declaration_node_type, declaration_view, GraphAccumulator, NodeMap, NodeSymbol, ViewState,
};
use crate::index::WorkspaceSymbols;
use crate::model::{Declaration, Node, SymbolId, VisualizationConfig};

/// @Injectable の依存関係ビュー
pub struct ProviderView {
    context: Arc<WorkspaceSymbols>,
    provider: Arc<Declaration>,
    symbol_id: SymbolId,
    symbols: NodeMap,
}

impl ProviderView {
    pub fn new(context: Arc<WorkspaceSymbols>, provider: Arc<Declaration>) -> Self {
        let symbol_id = provider.id();
        Self {
            context,
            provider,
            symbol_id,
            symbols: NodeMap::new(),
        }
    }
}

impl ViewState for ProviderView {
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
        let mut acc = GraphAccumulator::with_root(Node::new(
            self.symbol_id.as_str(),
            self.provider.name.as_str(),
            declaration_node_type(&self.provider),
        ));

        for id in &self.provider.dependencies {
            let Some(dependency) = self.context.get(id) else {
                debug!("Skipping unresolved dependency {} of {}", id, self.symbol_id);
                continue;
            };
            acc.push_declaration(&self.symbol_id, format!("dep-{}", id), dependency);
        }

        let (config, symbols) = acc.finish(self.provider.name.as_str());
        self.symbols = symbols;
        config
    }

    fn drill_down(&self, symbol: &NodeSymbol) -> Option<Box<dyn ViewState>> {
        match symbol {
            NodeSymbol::Declaration(declaration) => declaration_view(&self.context, declaration),
            NodeSymbol::TemplateNode(_) => None,
        }
    }
}
