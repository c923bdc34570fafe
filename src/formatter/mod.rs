//! シンボルをサイドパネル表示用のメタデータに整形する

use crate::index::WorkspaceSymbols;
use crate::model::{Declaration, DeclarationKind, Metadata, Property, TemplateNode};

/// コンポーネント / ディレクティブのメタデータ
pub fn directive_metadata(declaration: &Declaration) -> Metadata {
    let mut properties = vec![
        Property::new("Name", declaration.name.as_str()),
        Property::new("Kind", declaration.kind.as_str()),
        Property::new(
            "Selector",
            declaration.selector.as_deref().unwrap_or_default(),
        ),
        Property::new(
            "Component",
            (declaration.kind == DeclarationKind::Component).to_string(),
        ),
    ];

    if declaration.kind == DeclarationKind::Component {
        properties.push(Property::new(
            "Change Detection",
            declaration.change_detection.as_deref().unwrap_or("Default"),
        ));
    }
    if let Some(ref export_as) = declaration.export_as {
        properties.push(Property::new("Export", export_as.as_str()));
    }
    if !declaration.inputs.is_empty() {
        properties.push(Property::new("Inputs", declaration.inputs.join(", ")));
    }
    if !declaration.outputs.is_empty() {
        properties.push(Property::new("Outputs", declaration.outputs.join(", ")));
    }

    Metadata {
        file_path: Some(declaration.file.clone()),
        properties,
    }
}

/// @Injectable / パイプのメタデータ
pub fn provider_metadata(declaration: &Declaration) -> Metadata {
    Metadata {
        file_path: Some(declaration.file.clone()),
        properties: vec![
            Property::new("Name", declaration.name.as_str()),
            Property::new("Kind", declaration.kind.as_str()),
            Property::new("Dependencies", declaration.dependencies.len().to_string()),
        ],
    }
}

/// 宣言の種類に応じて整形関数を選ぶ
pub fn declaration_metadata(declaration: &Declaration) -> Metadata {
    if declaration.kind.is_directive_like() {
        directive_metadata(declaration)
    } else {
        provider_metadata(declaration)
    }
}

/// テンプレート要素のメタデータ
///
/// 適用ディレクティブはレジストリで名前解決し、解決できないものはIDのまま表示する。
pub fn element_metadata(node: &TemplateNode, context: &WorkspaceSymbols) -> Metadata {
    let directives: Vec<String> = node
        .directives
        .iter()
        .map(|id| context.get(id).map(|d| d.name.clone()).unwrap_or_else(|| id.clone()))
        .collect();

    let mut properties = vec![
        Property::new("Name", node.name.as_str()),
        Property::new("Directives", directives.join(", ")),
    ];
    if !node.attributes.is_empty() {
        let attributes: Vec<String> = node
            .attributes
            .iter()
            .map(|a| {
                if a.value.is_empty() {
                    a.name.clone()
                } else {
                    format!("{}=\"{}\"", a.name, a.value)
                }
            })
            .collect();
        properties.push(Property::new("Attributes", attributes.join(" ")));
    }

    Metadata {
        file_path: None,
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::model::{DeclarationBuilder, TemplateNodeBuilder};

    #[test]
    fn test_directive_metadata() {
        let decl = DeclarationBuilder::new("CardComponent", DeclarationKind::Component, "src/card.ts")
            .selector("app-card")
            .input("title")
            .input("subtitle")
            .export_as("card")
            .build();
        let metadata = directive_metadata(&decl);

        assert_eq!(metadata.file_path.as_deref(), Some(std::path::Path::new("src/card.ts")));
        assert_eq!(metadata.property("Selector"), Some("app-card"));
        assert_eq!(metadata.property("Component"), Some("true"));
        assert_eq!(metadata.property("Change Detection"), Some("Default"));
        assert_eq!(metadata.property("Export"), Some("card"));
        assert_eq!(metadata.property("Inputs"), Some("title, subtitle"));
        assert_eq!(metadata.property("Outputs"), None);
    }

    #[test]
    fn test_element_metadata_resolves_directive_names() {
        let context = WorkspaceSymbols::new(NavConfig::default().create_origin_matcher().unwrap());
        let id = context.add_declaration(
            DeclarationBuilder::new("TooltipDirective", DeclarationKind::Directive, "src/tip.ts")
                .build(),
        );
        let node = TemplateNodeBuilder::new("button")
            .attribute("type", "submit")
            .attribute("disabled", "")
            .directive(id)
            .directive("src/missing.ts#Missing")
            .build();

        let metadata = element_metadata(&node, &context);
        assert!(metadata.file_path.is_none());
        assert_eq!(metadata.property("Name"), Some("button"));
        assert_eq!(
            metadata.property("Directives"),
            Some("TooltipDirective, src/missing.ts#Missing")
        );
        assert_eq!(metadata.property("Attributes"), Some("type=\"submit\" disabled"));
    }
}
