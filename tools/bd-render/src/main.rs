//! bd-render: render a documentation content tree to HTML
//!
//! Reads a content tree (JSON), optionally the page's metadata (front matter
//! overrides, sidebar) and the version metadata it belongs to, and writes the
//! rendered HTML.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use bd_01_component_overrides::{Metrics, Overrides};
use bd_02_content_registry::{ContentRegistry, PageData};
use bd_03_page_renderer::{
    builtin_catalog, default_components, CompiledPage, ContentNode, PageRenderer, RendererConfig,
};
use clap::Parser;
use docs_telemetry::{init_logging, subsystem_span, TelemetryConfig};
use tracing::{info, warn};

/// Render a documentation content tree to HTML
#[derive(Parser, Debug)]
#[command(name = "bd-render")]
#[command(about = "Render Bifrost documentation content trees to HTML")]
struct Args {
    /// Content tree JSON file
    tree: PathBuf,

    /// Page metadata JSON (front matter components become page overrides)
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// Version metadata JSON used to check the page's sidebar navigation
    #[arg(short, long, requires = "page")]
    registry: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Maximum nesting of override scopes
    #[arg(long, default_value_t = RendererConfig::default().max_scope_depth)]
    max_scope_depth: usize,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_logging(&telemetry)?;

    let html = run(&args)?;
    match &args.out {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{html}"),
    }
    Ok(())
}

fn run(args: &Args) -> Result<String> {
    let _span = subsystem_span!("render", tree = %args.tree.display()).entered();
    let tree = ContentNode::from_json_str(&read(&args.tree)?)
        .with_context(|| format!("parsing content tree {}", args.tree.display()))?;
    let catalog = builtin_catalog();

    let compiled = match &args.page {
        Some(path) => {
            let page = PageData::from_json_str(&read(path)?)
                .with_context(|| format!("parsing page metadata {}", path.display()))?;
            if let Some(registry) = &args.registry {
                check_navigation(registry, &page)?;
            }
            CompiledPage::from_page(&page, tree, &catalog)?
        }
        None => {
            let id = args
                .tree
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("page");
            CompiledPage::new(id, tree, Overrides::Absent, &catalog)?
        }
    };

    let config = RendererConfig {
        max_scope_depth: args.max_scope_depth,
        ..RendererConfig::default()
    };
    let metrics = Arc::new(Metrics::new());
    let mut renderer =
        PageRenderer::with_config(default_components(), config)?.with_metrics(metrics.clone());
    let html = renderer.render(&compiled)?;

    let snapshot = metrics.snapshot();
    info!(
        page = %compiled.id(),
        scopes = compiled.scope_count(),
        resolutions = snapshot.resolutions,
        memo_misses = snapshot.memo_misses,
        "Rendered page"
    );
    Ok(html)
}

/// Fail when the page's recorded previous/next links disagree with the
/// sidebar order in the version metadata.
fn check_navigation(registry_path: &Path, page: &PageData) -> Result<()> {
    let registry = ContentRegistry::from_json_str(&read(registry_path)?)
        .with_context(|| format!("parsing version metadata {}", registry_path.display()))?;
    registry.validate()?;

    if registry.sidebar_of(&page.metadata.id)?.is_none() {
        warn!(page = %page.metadata.id, "Page is not listed in any sidebar");
        return Ok(());
    }
    let (previous, next) = registry.neighbours(&page.metadata.id)?;
    if previous != page.metadata.previous || next != page.metadata.next {
        bail!(
            "navigation for {} is stale: sidebar gives {:?} / {:?}",
            page.metadata.id,
            previous.map(|link| link.permalink),
            next.map(|link| link.permalink)
        );
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
