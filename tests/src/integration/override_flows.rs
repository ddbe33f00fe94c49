//! # Override Flows
//!
//! Layered overrides observed through complete render passes: page scope
//! over root defaults, section scope over page scope, isolated embeds, and
//! memo behaviour across repeated renders of the same compiled page.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bd_01_component_overrides::{
        ComponentCatalog, ComponentKey, ComponentMapping, FnComponent, Metrics, Overrides,
    };
    use bd_03_page_renderer::{
        default_components, CompiledPage, ContentNode, PageRenderer, RenderError,
    };
    use serde_json::json;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Component that tags its output with its own name
    fn tagged(name: &'static str) -> bd_01_component_overrides::ComponentRef {
        FnComponent::shared(name, move |props| format!("<{name}>{}</{name}>", props.children))
    }

    fn catalog() -> ComponentCatalog {
        ["P0", "C0", "P1", "C1", "P9"]
            .into_iter()
            .fold(ComponentCatalog::new(), |catalog, name| catalog.with(tagged(name)))
    }

    /// Plain HTML defaults with `p` and `code` replaced by P0 / C0
    fn root() -> ComponentMapping {
        default_components().merged_with(
            &ComponentMapping::builder()
                .with(ComponentKey::PARAGRAPH, tagged("P0"))
                .with(ComponentKey::CODE, tagged("C0"))
                .build(),
        )
    }

    fn tree(json: serde_json::Value) -> ContentNode {
        serde_json::from_value(json).unwrap()
    }

    fn paragraph(text: &str) -> serde_json::Value {
        json!({"type": "paragraph", "children": [{"type": "text", "value": text}]})
    }

    fn code(value: &str) -> serde_json::Value {
        json!({"type": "code", "value": value})
    }

    fn page_overrides(catalog: &ComponentCatalog) -> Overrides {
        Overrides::from_json(&json!({"code": "C1"}), catalog).unwrap()
    }

    // =============================================================================
    // LAYERING
    // =============================================================================

    /// root {p: P0, code: C0}, page {code: C1}, section {p: P1}
    #[test]
    fn test_page_and_section_layering() {
        let catalog = catalog();
        let content = tree(json!({"type": "root", "children": [
            paragraph("a"),
            code("x"),
            {"type": "scope", "id": "section", "components": {"p": "P1"}, "children": [
                paragraph("b"),
                code("y")
            ]},
            paragraph("c")
        ]}));
        let page = CompiledPage::new("guide", content, page_overrides(&catalog), &catalog).unwrap();

        let html = PageRenderer::new(root()).render(&page).unwrap();

        assert_eq!(
            html,
            "<P0>a</P0>\n<pre><C1>x</C1></pre>\n<P1>b</P1>\n<pre><C1>y</C1></pre>\n<P0>c</P0>"
        );
    }

    #[test]
    fn test_isolated_scope_starts_from_root_defaults() {
        let catalog = catalog();
        let content = tree(json!({"type": "root", "children": [
            {"type": "scope", "id": "embed", "isolated": true, "components": {"p": "P9"},
             "children": [paragraph("e"), code("z")]}
        ]}));
        let page = CompiledPage::new("guide", content, page_overrides(&catalog), &catalog).unwrap();

        let html = PageRenderer::new(root()).render(&page).unwrap();

        // page's C1 does not reach inside the isolated scope
        assert_eq!(html, "<P9>e</P9>\n<pre><C0>z</C0></pre>");
    }

    #[test]
    fn test_derived_page_overrides_see_root() {
        let catalog = catalog();
        let content = tree(json!({"type": "root", "children": [paragraph("a")]}));
        let boxed = Overrides::derive(|parent| {
            let inner = parent.get(&ComponentKey::PARAGRAPH).cloned();
            ComponentMapping::builder()
                .with(
                    ComponentKey::PARAGRAPH,
                    FnComponent::shared("boxed", move |props| match &inner {
                        Some(inner) => format!("<div>{}</div>", inner.render(props)),
                        None => props.children.to_string(),
                    }),
                )
                .build()
        });
        let page = CompiledPage::new("guide", content, boxed, &catalog).unwrap();

        let html = PageRenderer::new(root()).render(&page).unwrap();

        assert_eq!(html, "<div><P0>a</P0></div>");
    }

    // =============================================================================
    // MEMOIZATION ACROSS RENDER PASSES
    // =============================================================================

    #[test]
    fn test_rerender_reuses_every_scope() {
        let catalog = catalog();
        let content = tree(json!({"type": "root", "children": [
            {"type": "scope", "id": "one", "components": {"p": "P1"}, "children": [
                {"type": "scope", "id": "two", "components": {"code": "C0"}, "children": [code("q")]}
            ]}
        ]}));
        let page = CompiledPage::new("guide", content, page_overrides(&catalog), &catalog).unwrap();
        let metrics = Arc::new(Metrics::new());
        let mut renderer = PageRenderer::new(root()).with_metrics(metrics.clone());

        let first = renderer.render(&page).unwrap();
        let after_first = metrics.snapshot();
        let second = renderer.render(&page).unwrap();
        let after_second = metrics.snapshot();

        assert_eq!(first, second);
        assert_eq!(after_first.memo_misses, 3);
        assert_eq!(after_first.memo_hits, 0);
        assert_eq!(after_second.memo_misses, 3);
        assert_eq!(after_second.memo_hits, 3);
    }

    #[test]
    fn test_recompiled_page_misses_memo() {
        let catalog = catalog();
        let content = tree(json!({"type": "root", "children": [paragraph("a")]}));
        let metrics = Arc::new(Metrics::new());
        let mut renderer = PageRenderer::new(root()).with_metrics(metrics.clone());

        for _ in 0..2 {
            // fresh overrides each time: a new identity, so a fresh merge
            let page =
                CompiledPage::new("guide", content.clone(), page_overrides(&catalog), &catalog)
                    .unwrap();
            renderer.render(&page).unwrap();
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.memo_misses, 2);
        assert_eq!(snapshot.memo_hits, 0);
    }

    #[test]
    fn test_scope_without_overrides_takes_fast_path() {
        let catalog = catalog();
        let content = tree(json!({"type": "root", "children": [
            {"type": "scope", "id": "plain", "children": [paragraph("a")]}
        ]}));
        let page = CompiledPage::new("guide", content, Overrides::Absent, &catalog).unwrap();
        let metrics = Arc::new(Metrics::new());
        let mut renderer = PageRenderer::new(root()).with_metrics(metrics.clone());

        assert_eq!(renderer.render(&page).unwrap(), "<P0>a</P0>");

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.identity_fast_paths, 2);
        assert_eq!(snapshot.memo_misses, 0);
    }

    // =============================================================================
    // FAILURES LEAVE NO STATE BEHIND
    // =============================================================================

    #[test]
    fn test_failed_render_does_not_leak_scope() {
        let catalog = catalog();
        let broken = tree(json!({"type": "root", "children": [
            {"type": "scope", "id": "s", "components": {"p": "P1"}, "children": [
                {"type": "heading", "depth": 2, "children": []}
            ]}
        ]}));
        // no h2 in this root
        let sparse = ComponentMapping::builder()
            .with(ComponentKey::PARAGRAPH, tagged("P0"))
            .build();
        let page = CompiledPage::new("guide", broken, Overrides::Absent, &catalog).unwrap();
        let mut renderer = PageRenderer::new(sparse);

        assert_eq!(
            renderer.render(&page),
            Err(RenderError::MissingComponent("h2".to_string()))
        );

        let ok = CompiledPage::new(
            "other",
            tree(json!({"type": "root", "children": [paragraph("a")]})),
            Overrides::Absent,
            &catalog,
        )
        .unwrap();
        assert_eq!(renderer.render(&ok).unwrap(), "<P0>a</P0>");
    }
}
