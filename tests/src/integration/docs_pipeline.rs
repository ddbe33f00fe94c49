//! # Docs Pipeline
//!
//! Version metadata and page data read from disk, page front matter turned
//! into page-level overrides, content rendered to HTML.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use bd_01_component_overrides::{ComponentCatalog, FnComponent, OverrideError};
    use bd_02_content_registry::{ContentRegistry, FsContentSource};
    use bd_03_page_renderer::{
        builtin_catalog, CompiledPage, ContentNode, PageRenderer, RenderError,
    };
    use serde_json::json;
    use tempfile::TempDir;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn published() -> FsContentSource {
        FsContentSource::new(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("../crates/bd-02-content-registry/fixtures"),
        )
    }

    fn page_json(components: serde_json::Value) -> String {
        json!({
            "metadata": {
                "id": "reference/private-network",
                "title": "Private Network",
                "description": "Running a private Bifrost network",
                "source": "@site/docs/reference/private-network.md",
                "sourceDirName": "reference",
                "slug": "/reference/private-network",
                "permalink": "/docs/reference/private-network",
                "version": "current",
                "sidebar": "referenceSidebar",
                "frontMatter": {"components": components}
            },
            "toc": [{"value": "gRPC Endpoint", "id": "grpc-endpoint", "level": 2}]
        })
        .to_string()
    }

    fn content() -> ContentNode {
        serde_json::from_value(json!({"type": "root", "children": [
            {"type": "heading", "depth": 2, "id": "grpc-endpoint",
             "children": [{"type": "text", "value": "gRPC Endpoint"}]},
            {"type": "paragraph", "children": [
                {"type": "text", "value": "Listens on "},
                {"type": "inlineCode", "value": "localhost:9084"}
            ]}
        ]}))
        .unwrap()
    }

    fn catalog() -> ComponentCatalog {
        builtin_catalog().with(FnComponent::shared("anchored-h2", |props| {
            format!("<h2 class=\"anchor\">{}</h2>", props.children)
        }))
    }

    // =============================================================================
    // PIPELINE
    // =============================================================================

    #[test]
    fn test_front_matter_overrides_render() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("page.json"),
            page_json(json!({"h2": "anchored-h2", "wrapper": "html:article"})),
        )
        .unwrap();

        let page = ContentRegistry::load_page(&FsContentSource::new(dir.path()), "page.json")
            .unwrap();
        let compiled = CompiledPage::from_page(&page, content(), &catalog()).unwrap();
        let html = PageRenderer::default().render(&compiled).unwrap();

        assert_eq!(compiled.id().as_str(), "reference/private-network");
        assert_eq!(
            html,
            "<article><h2 class=\"anchor\">gRPC Endpoint</h2>\n\
             <p>Listens on <code>localhost:9084</code></p></article>"
        );
    }

    #[test]
    fn test_page_without_components_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page.json"), page_json(serde_json::Value::Null)).unwrap();

        let page = ContentRegistry::load_page(&FsContentSource::new(dir.path()), "page.json")
            .unwrap();
        let compiled = CompiledPage::from_page(&page, content(), &catalog()).unwrap();
        let html = PageRenderer::default().render(&compiled).unwrap();

        assert_eq!(
            html,
            "<h2 id=\"grpc-endpoint\">gRPC Endpoint</h2>\n\
             <p>Listens on <code>localhost:9084</code></p>"
        );
    }

    #[test]
    fn test_non_mapping_front_matter_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page.json"), page_json(json!(["h2"]))).unwrap();

        let page = ContentRegistry::load_page(&FsContentSource::new(dir.path()), "page.json")
            .unwrap();
        let result = CompiledPage::from_page(&page, content(), &catalog());

        assert!(matches!(
            result,
            Err(RenderError::Overrides(OverrideError::ContractViolation { .. }))
        ));
    }

    #[test]
    fn test_published_page_is_in_its_sidebar() {
        let source = published();
        let registry = ContentRegistry::load(&source, "version-current.json").unwrap();
        let page = ContentRegistry::load_page(&source, "private-network.json").unwrap();

        let links = registry
            .sidebar_links(page.metadata.sidebar.as_deref().unwrap())
            .unwrap();
        assert!(links
            .iter()
            .any(|link| link.doc_id.as_deref() == Some(page.metadata.id.as_str())));

        let compiled = CompiledPage::from_page(&page, content(), &catalog()).unwrap();
        assert_eq!(compiled.scope_count(), 0);
        assert!(PageRenderer::default().render(&compiled).is_ok());
    }
}
