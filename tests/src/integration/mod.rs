//! Integration flows
//!
//! - `override_flows`: layered overrides observed through full render passes
//! - `docs_pipeline`: registry on disk -> page front matter -> HTML

mod docs_pipeline;
mod override_flows;
