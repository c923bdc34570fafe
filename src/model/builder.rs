use std::path::PathBuf;
use std::sync::Arc;

use super::symbol::{
    Declaration, DeclarationKind, Origin, SymbolId, TemplateAttribute, TemplateNode,
};

/// Declaration構築のビルダーパターン
pub struct DeclarationBuilder {
    name: String,
    kind: DeclarationKind,
    file: PathBuf,
    origin: Option<Origin>,
    angular: Option<bool>,
    selector: Option<String>,
    export_as: Option<String>,
    change_detection: Option<String>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    providers: Vec<SymbolId>,
    dependencies: Vec<SymbolId>,
    template: Option<Vec<Option<Arc<TemplateNode>>>>,
}

impl DeclarationBuilder {
    pub fn new(name: impl Into<String>, kind: DeclarationKind, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            file: file.into(),
            origin: None,
            angular: None,
            selector: None,
            export_as: None,
            change_detection: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            providers: Vec::new(),
            dependencies: Vec::new(),
            template: None,
        }
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn angular(mut self, angular: bool) -> Self {
        self.angular = Some(angular);
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn export_as(mut self, export_as: impl Into<String>) -> Self {
        self.export_as = Some(export_as.into());
        self
    }

    pub fn change_detection(mut self, strategy: impl Into<String>) -> Self {
        self.change_detection = Some(strategy.into());
        self
    }

    pub fn input(mut self, name: impl Into<String>) -> Self {
        self.inputs.push(name.into());
        self
    }

    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(name.into());
        self
    }

    pub fn provider(mut self, id: impl Into<SymbolId>) -> Self {
        self.providers.push(id.into());
        self
    }

    pub fn dependency(mut self, id: impl Into<SymbolId>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    pub fn template(mut self, nodes: Vec<Option<TemplateNode>>) -> Self {
        self.template = Some(nodes.into_iter().map(|n| n.map(Arc::new)).collect());
        self
    }

    pub fn build(self) -> Declaration {
        Declaration {
            name: self.name,
            kind: self.kind,
            file: self.file,
            origin: self.origin,
            angular: self.angular,
            selector: self.selector,
            export_as: self.export_as,
            change_detection: self.change_detection,
            inputs: self.inputs,
            outputs: self.outputs,
            providers: self.providers,
            dependencies: self.dependencies,
            template: self.template,
        }
    }
}

/// TemplateNode構築のビルダーパターン
pub struct TemplateNodeBuilder {
    name: String,
    attributes: Vec<TemplateAttribute>,
    directives: Vec<SymbolId>,
    component: Option<SymbolId>,
    children: Vec<Option<Arc<TemplateNode>>>,
}

impl TemplateNodeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            directives: Vec::new(),
            component: None,
            children: Vec::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(TemplateAttribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn directive(mut self, id: impl Into<SymbolId>) -> Self {
        self.directives.push(id.into());
        self
    }

    pub fn component(mut self, id: impl Into<SymbolId>) -> Self {
        self.component = Some(id.into());
        self
    }

    pub fn child(mut self, node: TemplateNode) -> Self {
        self.children.push(Some(Arc::new(node)));
        self
    }

    /// 疎な子要素（null）を追加
    pub fn hole(mut self) -> Self {
        self.children.push(None);
        self
    }

    pub fn build(self) -> TemplateNode {
        TemplateNode {
            name: self.name,
            attributes: self.attributes,
            directives: self.directives,
            component: self.component,
            children: self.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_builder() {
        let decl = DeclarationBuilder::new("AppComponent", DeclarationKind::Component, "src/app.ts")
            .selector("app-root")
            .input("title")
            .dependency("src/data.service.ts#DataService")
            .template(vec![Some(TemplateNodeBuilder::new("div").build())])
            .build();

        assert_eq!(decl.id(), "src/app.ts#AppComponent");
        assert_eq!(decl.selector.as_deref(), Some("app-root"));
        assert_eq!(decl.inputs, vec!["title"]);
        assert_eq!(decl.dependencies, vec!["src/data.service.ts#DataService"]);
        assert_eq!(decl.template_ast().map(|t| t.len()), Some(1));
        assert!(!decl.is_third_party());
    }

    #[test]
    fn test_template_node_builder() {
        let node = TemplateNodeBuilder::new("ul")
            .attribute("class", "list")
            .directive("src/hl.ts#HighlightDirective")
            .child(TemplateNodeBuilder::new("li").build())
            .hole()
            .build();

        assert_eq!(node.name, "ul");
        assert_eq!(node.attributes[0].value, "list");
        assert_eq!(node.directives.len(), 1);
        assert!(node.component.is_none());
        assert_eq!(node.children.len(), 2);
        assert!(node.children[1].is_none());
    }
}
