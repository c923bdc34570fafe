pub mod builder;
pub mod graph;
pub mod metadata;
pub mod symbol;

pub use builder::{DeclarationBuilder, TemplateNodeBuilder};
pub use graph::{Edge, Graph, Node, NodeType, PublicNode, SymbolType, VisualizationConfig};
pub use metadata::{Metadata, Property};
pub use symbol::{
    symbol_id, Declaration, DeclarationKind, Origin, SymbolId, TemplateAttribute, TemplateNode,
};
