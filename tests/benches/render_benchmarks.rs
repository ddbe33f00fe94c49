//! # Render Pass Benchmarks
//!
//! | Case | Expectation |
//! |------|-------------|
//! | Warm render (same compiled page) | every scope hits its memo slot |
//! | Cold render (recompiled page) | one merge per scope |
//! | Deep nesting | cost grows with depth, not with mapping size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

use bd_01_component_overrides::Overrides;
use bd_03_page_renderer::{builtin_catalog, CompiledPage, ContentNode, PageRenderer};

// ============================================================================
// FIXTURES
// ============================================================================

/// `sections` sibling scopes, each overriding `p` and holding a few blocks
fn wide_page(sections: usize) -> ContentNode {
    let children: Vec<Value> = (0..sections)
        .map(|i| {
            json!({"type": "scope", "id": format!("s{i}"), "components": {"p": "html:section"},
                "children": [
                    {"type": "heading", "depth": 2, "children": [{"type": "text", "value": "Title"}]},
                    {"type": "paragraph", "children": [{"type": "text", "value": "Body"}]},
                    {"type": "code", "lang": "bash", "value": "bifrost-node --help"}
                ]})
        })
        .collect();
    serde_json::from_value(json!({"type": "root", "children": children})).unwrap()
}

/// `depth` scopes nested inside each other around a single paragraph
fn deep_page(depth: usize) -> ContentNode {
    let mut node = json!({"type": "paragraph", "children": [{"type": "text", "value": "leaf"}]});
    for i in (0..depth).rev() {
        node = json!({"type": "scope", "id": format!("d{i}"), "components": {"code": "html:div"},
            "children": [node]});
    }
    serde_json::from_value(json!({"type": "root", "children": [node]})).unwrap()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_warm_vs_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("render-pass");
    let catalog = builtin_catalog();

    for sections in [4, 32, 128] {
        let tree = wide_page(sections);
        let compiled = CompiledPage::new("bench", tree.clone(), Overrides::Absent, &catalog).unwrap();
        let mut renderer = PageRenderer::default();
        renderer.render(&compiled).unwrap();

        group.bench_with_input(BenchmarkId::new("warm", sections), &compiled, |b, page| {
            b.iter(|| black_box(renderer.render(page).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("cold", sections), &tree, |b, tree| {
            b.iter(|| {
                let page =
                    CompiledPage::new("bench", tree.clone(), Overrides::Absent, &catalog).unwrap();
                black_box(PageRenderer::default().render(&page).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_nesting_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope-depth");
    let catalog = builtin_catalog();

    for depth in [1, 8, 31] {
        let compiled = CompiledPage::new("bench", deep_page(depth), Overrides::Absent, &catalog).unwrap();
        let mut renderer = PageRenderer::default();

        group.bench_with_input(BenchmarkId::from_parameter(depth), &compiled, |b, page| {
            b.iter(|| black_box(renderer.render(page).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_warm_vs_cold, bench_nesting_depth);
criterion_main!(benches);
