//! Page Renderer
//!
//! Walks a content tree with a [`RenderContext`] threaded through every
//! call. The page's own overrides form the outermost scope; each `scope`
//! node opens a nested one. Renderers only ever see the ambient mapping via
//! `ctx.read()`.
//!
//! Pages are compiled once: data-declared overrides are turned into
//! [`OverrideScope`]s up front, so their identity is stable and repeated
//! renders of the same page hit each scope's memo slot.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use bd_01_component_overrides::{
    ComponentCatalog, ComponentKey, ComponentMapping, ComponentOverrideApi,
    ComponentOverrideService, ComponentProps, MetricsRecorder, OverrideScope, Overrides,
    RenderContext, ScopeId,
};
use bd_02_content_registry::PageData;
use tracing::{debug, info};

use crate::domain::{default_components, escape_html, ContentNode, RendererConfig};
use crate::error::RenderError;

/// A content tree ready to render
#[derive(Clone, Debug)]
pub struct CompiledPage {
    page_scope: OverrideScope,
    scopes: HashMap<String, OverrideScope>,
    tree: ContentNode,
}

impl CompiledPage {
    /// Compile `tree` for the page `page_id` with programmatic page overrides
    pub fn new(
        page_id: &str,
        tree: ContentNode,
        page_overrides: Overrides,
        catalog: &ComponentCatalog,
    ) -> Result<Self, RenderError> {
        let page_scope = OverrideScope::new(ScopeId::new(page_id), page_overrides);
        let mut scopes = HashMap::new();
        collect_scopes(&tree, &page_scope.id, catalog, &mut scopes)?;
        Ok(Self {
            page_scope,
            scopes,
            tree,
        })
    }

    /// Compile `tree` for a registry page, taking page overrides from its
    /// front matter
    pub fn from_page(
        page: &PageData,
        tree: ContentNode,
        catalog: &ComponentCatalog,
    ) -> Result<Self, RenderError> {
        let overrides = Overrides::from_json(&page.metadata.front_matter.components, catalog)?;
        Self::new(&page.metadata.id, tree, overrides, catalog)
    }

    pub fn id(&self) -> &ScopeId {
        &self.page_scope.id
    }

    /// Number of nested scopes (page scope excluded)
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

fn collect_scopes(
    node: &ContentNode,
    page_id: &ScopeId,
    catalog: &ComponentCatalog,
    scopes: &mut HashMap<String, OverrideScope>,
) -> Result<(), RenderError> {
    match node {
        ContentNode::Heading { depth, .. } if ComponentKey::heading(*depth).is_none() => {
            return Err(RenderError::InvalidHeadingDepth(*depth));
        }
        ContentNode::Scope {
            id,
            components,
            isolated,
            ..
        } => {
            if scopes.contains_key(id) {
                return Err(RenderError::DuplicateScope(id.clone()));
            }
            let overrides = Overrides::from_json(components, catalog)?;
            let scope_id = page_id.child(id);
            let scope = if *isolated {
                OverrideScope::isolated(scope_id, overrides)
            } else {
                OverrideScope::new(scope_id, overrides)
            };
            scopes.insert(id.clone(), scope);
        }
        _ => {}
    }

    for child in node.children() {
        collect_scopes(child, page_id, catalog, scopes)?;
    }
    Ok(())
}

/// Renders compiled pages, keeping per-scope memo slots between renders
pub struct PageRenderer {
    root: ComponentMapping,
    service: ComponentOverrideService,
    config: RendererConfig,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(default_components())
    }
}

impl PageRenderer {
    /// Renderer over a fixed root default mapping
    pub fn new(root: ComponentMapping) -> Self {
        Self {
            root,
            service: ComponentOverrideService::new(),
            config: RendererConfig::default(),
        }
    }

    pub fn with_config(root: ComponentMapping, config: RendererConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self {
            root,
            service: ComponentOverrideService::new(),
            config,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.service = ComponentOverrideService::with_metrics(metrics);
        self
    }

    pub fn root(&self) -> &ComponentMapping {
        &self.root
    }

    /// Number of override call sites currently holding a memo slot
    pub fn tracked_scopes(&self) -> usize {
        self.service.tracked_scopes()
    }

    /// Render one page to HTML.
    ///
    /// Each call is a fresh render pass with its own context. Memo slots
    /// carry over while the same page is rendered again; rendering a
    /// different page drops the previous page's slots.
    pub fn render(&mut self, page: &CompiledPage) -> Result<String, RenderError> {
        let mut ctx = RenderContext::new(self.root.clone());
        let walk = Walk {
            page,
            config: &self.config,
        };

        let html = self
            .service
            .enter_scope(&mut ctx, &page.page_scope, |service, ctx| -> Result<String, RenderError> {
                let body = walk.node(service, ctx, &page.tree)?;
                let ambient = ctx.read();
                match ambient.get(&ComponentKey::WRAPPER) {
                    Some(wrapper) => Ok(wrapper.render(&ComponentProps {
                        key: &ComponentKey::WRAPPER,
                        attributes: &BTreeMap::new(),
                        children: &body,
                    })),
                    None => Ok(body),
                }
            });
        self.service.retain_page(page.id());
        let html = html?;

        info!(page = %page.id(), bytes = html.len(), "Rendered page");
        Ok(html)
    }
}

/// Per-pass traversal state that never changes during the walk
struct Walk<'a> {
    page: &'a CompiledPage,
    config: &'a RendererConfig,
}

impl Walk<'_> {
    fn node(
        &self,
        service: &mut ComponentOverrideService,
        ctx: &mut RenderContext,
        node: &ContentNode,
    ) -> Result<String, RenderError> {
        match node {
            ContentNode::Root { children } => self.children(service, ctx, children),
            ContentNode::Text { value } => Ok(escape_html(value).into_owned()),
            ContentNode::Paragraph { children } => {
                let inner = self.children(service, ctx, children)?;
                element(ctx, &ComponentKey::PARAGRAPH, BTreeMap::new(), &inner)
            }
            ContentNode::Heading { depth, id, children } => {
                let key = ComponentKey::heading(*depth)
                    .ok_or(RenderError::InvalidHeadingDepth(*depth))?;
                let inner = self.children(service, ctx, children)?;
                let attributes = id
                    .iter()
                    .map(|id| ("id".to_string(), id.clone()))
                    .collect();
                element(ctx, &key, attributes, &inner)
            }
            ContentNode::Code { lang, value } => {
                let attributes = lang
                    .iter()
                    .map(|lang| ("className".to_string(), format!("language-{lang}")))
                    .collect();
                let code = element(ctx, &ComponentKey::CODE, attributes, &escape_html(value))?;
                element(ctx, &ComponentKey::PRE, BTreeMap::new(), &code)
            }
            ContentNode::InlineCode { value } => element(
                ctx,
                &ComponentKey::INLINE_CODE,
                BTreeMap::new(),
                &escape_html(value),
            ),
            ContentNode::Link { url, children } => {
                let inner = self.children(service, ctx, children)?;
                let attributes = BTreeMap::from([("href".to_string(), url.clone())]);
                element(ctx, &ComponentKey::LINK, attributes, &inner)
            }
            ContentNode::List { ordered, children } => {
                let key = if *ordered {
                    ComponentKey::ORDERED_LIST
                } else {
                    ComponentKey::UNORDERED_LIST
                };
                let inner = self.children(service, ctx, children)?;
                element(ctx, &key, BTreeMap::new(), &inner)
            }
            ContentNode::ListItem { children } => {
                let inner = self.children(service, ctx, children)?;
                element(ctx, &ComponentKey::LIST_ITEM, BTreeMap::new(), &inner)
            }
            ContentNode::Blockquote { children } => {
                let inner = self.children(service, ctx, children)?;
                element(ctx, &ComponentKey::BLOCKQUOTE, BTreeMap::new(), &inner)
            }
            ContentNode::Scope { id, children, .. } => {
                let scope = self
                    .page
                    .scopes
                    .get(id)
                    .ok_or_else(|| RenderError::UnknownScope(id.clone()))?;

                let depth = ctx.depth() + 1;
                if depth > self.config.max_scope_depth {
                    return Err(RenderError::NestingTooDeep {
                        depth,
                        max: self.config.max_scope_depth,
                    });
                }

                debug!(scope = %scope.id, depth, "Entering override scope");
                service.enter_scope(ctx, scope, |service, ctx| {
                    self.children(service, ctx, children)
                })
            }
        }
    }

    fn children(
        &self,
        service: &mut ComponentOverrideService,
        ctx: &mut RenderContext,
        children: &[ContentNode],
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        let mut previous_block = false;
        for child in children {
            let block = child.is_block();
            if previous_block && block {
                out.push_str(&self.config.block_separator);
            }
            out.push_str(&self.node(service, ctx, child)?);
            previous_block = block;
        }
        Ok(out)
    }
}

/// Render one element with whatever component is ambient for `key`
fn element(
    ctx: &RenderContext,
    key: &ComponentKey,
    attributes: BTreeMap<String, String>,
    children: &str,
) -> Result<String, RenderError> {
    let ambient = ctx.read();
    let component = ambient
        .get(key)
        .ok_or_else(|| RenderError::MissingComponent(key.to_string()))?;
    Ok(component.render(&ComponentProps {
        key,
        attributes: &attributes,
        children,
    }))
}
