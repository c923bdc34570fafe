use serde::{Deserialize, Serialize};

/// グラフノードの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolType {
    /// ビュー自身を表す合成ノード
    Meta,
    HtmlElement,
    HtmlElementWithDirective,
    Component,
    Directive,
    Provider,
    Pipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeType {
    #[serde(rename = "type")]
    pub kind: SymbolType,
    pub angular: bool,
}

impl NodeType {
    pub fn new(kind: SymbolType, angular: bool) -> Self {
        Self { kind, angular }
    }

    pub fn meta() -> Self {
        Self::new(SymbolType::Meta, false)
    }
}

/// ビュー構築中の内部ノード（dataはNodeMap側で保持）
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub id: String,
    pub label: String,
    pub node_type: NodeType,
    pub data: Option<T>,
}

impl<T> Node<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type,
            data: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// ドライバーへ返す公開形に変換（dataは落とす）
    pub fn to_public(&self) -> PublicNode {
        PublicNode {
            id: self.id.clone(),
            label: self.label.clone(),
            node_type: self.node_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<PublicNode>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&PublicNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// get_data() の戻り値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    pub title: String,
    pub graph: Graph,
}

impl VisualizationConfig {
    pub fn new<T>(title: impl Into<String>, nodes: &[Node<T>], edges: Vec<Edge>) -> Self {
        Self {
            title: title.into(),
            graph: Graph {
                nodes: nodes.iter().map(Node::to_public).collect(),
                edges,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_node_strips_data() {
        let node = Node::new("el-1", "div", NodeType::new(SymbolType::HtmlElement, false))
            .with_data(42u32);
        let public = node.to_public();
        assert_eq!(public.id, "el-1");
        assert_eq!(public.label, "div");
        assert_eq!(public.node_type.kind, SymbolType::HtmlElement);
    }

    #[test]
    fn test_node_type_serialization() {
        let json = serde_json::to_value(NodeType::new(SymbolType::Component, true)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Component", "angular": true }));
    }
}
