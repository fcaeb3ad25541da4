use std::sync::Arc;

use crate::expression::cache::ExpressionCache;
use crate::foundation::core::Viewport;
use crate::graph::assemble::{DEFAULT_SAMPLE_COUNT, build_render_data_with};
use crate::graph::render_data::RenderData;
use crate::scene::document::GraphDocument;
use crate::scene::line::Line;
use crate::scene::shading::Shading;
use crate::session::fingerprint::{InputFingerprint, fingerprint_input};

/// Options controlling a [`GraphSession`].
#[derive(Clone, Debug)]
pub struct SessionOpts {
    /// Sample count used by [`GraphSession::render_document`] when the document has none.
    pub sample_count: usize,
    /// Maximum number of compiled expressions kept across renders.
    pub expression_cache_capacity: usize,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            expression_cache_capacity: 256,
        }
    }
}

/// The full input of one render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderInput {
    /// Curves in draw order.
    pub lines: Vec<Line>,
    /// Shaded regions.
    pub shading: Vec<Shading>,
    /// Visible rectangle.
    pub viewport: Viewport,
    /// Sample intervals per curve.
    pub sample_count: usize,
    /// Opaque token; bumping it forces a rebuild of otherwise unchanged input.
    pub recompute_token: u64,
}

impl Default for RenderInput {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            shading: Vec::new(),
            viewport: Viewport::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            recompute_token: 0,
        }
    }
}

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Calls to [`GraphSession::render`].
    pub renders: u64,
    /// Renders answered with the previous snapshot.
    pub reused: u64,
    /// Expression cache hits.
    pub expression_hits: u64,
    /// Expression cache misses (compilations).
    pub expression_misses: u64,
}

/// Caller-side memoization around [`crate::build_render_data`].
///
/// Keeps the last snapshot keyed by an input fingerprint, plus an expression cache shared by every
/// rebuild. The core pipeline stays a pure function; this type only decides when to call it.
#[derive(Debug)]
pub struct GraphSession {
    opts: SessionOpts,
    cache: ExpressionCache,
    last: Option<(InputFingerprint, Arc<RenderData>)>,
    renders: u64,
    reused: u64,
}

impl GraphSession {
    /// Create a session.
    pub fn new(opts: SessionOpts) -> Self {
        Self {
            cache: ExpressionCache::new(opts.expression_cache_capacity),
            opts,
            last: None,
            renders: 0,
            reused: 0,
        }
    }

    /// Session options.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    /// Render `input`, reusing the previous snapshot when the fingerprint matches.
    #[tracing::instrument(skip(self, input), fields(token = input.recompute_token))]
    pub fn render(&mut self, input: &RenderInput) -> Arc<RenderData> {
        self.renders += 1;
        let fp = fingerprint_input(input);
        if let Some((last_fp, data)) = &self.last
            && *last_fp == fp
        {
            self.reused += 1;
            tracing::debug!("input unchanged, reusing snapshot");
            return Arc::clone(data);
        }

        let data = Arc::new(build_render_data_with(
            &input.lines,
            &input.shading,
            &input.viewport,
            input.sample_count,
            &mut self.cache,
        ));
        self.last = Some((fp, Arc::clone(&data)));
        data
    }

    /// Render a document, falling back to the session sample count.
    pub fn render_document(&mut self, doc: &GraphDocument) -> Arc<RenderData> {
        let input = RenderInput {
            lines: doc.lines.clone(),
            shading: doc.shading.clone(),
            viewport: doc.viewport,
            sample_count: doc.samples.unwrap_or(self.opts.sample_count),
            recompute_token: 0,
        };
        self.render(&input)
    }

    /// Drop the cached snapshot and compiled expressions.
    pub fn clear(&mut self) {
        self.last = None;
        self.cache.clear();
    }

    /// Current counters.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            renders: self.renders,
            reused: self.reused,
            expression_hits: self.cache.hits(),
            expression_misses: self.cache.misses(),
        }
    }
}

impl Default for GraphSession {
    fn default() -> Self {
        Self::new(SessionOpts::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/graph_session.rs"]
mod tests;
