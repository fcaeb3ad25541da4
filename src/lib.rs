//! graphcalc compiles user-entered math expressions and samples curves over a viewport into
//! renderable geometry.
//!
//! The pipeline is a pure function of `(lines, shading, viewport, sample_count)`:
//!
//! - [`tokenize`] and [`compile`] turn text into a postfix [`CompiledExpression`]
//! - [`evaluate`] runs it against [`Bindings`]
//! - [`build_render_data`] samples every [`Line`] and [`Shading`] into one [`RenderData`]
//!
//! [`GraphSession`] adds caller-side memoization, and [`to_svg`] / [`to_raster`] export a
//! snapshot for viewing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod expression;
pub(crate) mod graph;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{Affine, BezPath, GraphPoint, Point, Rect, Viewport};
pub use crate::foundation::error::{GraphError, GraphResult};
pub use crate::foundation::math::{grid_step, nice_step};

pub use crate::expression::builtins::{Builtin, constant, is_function};
pub use crate::expression::cache::{ExpressionCache, ExpressionSource, Uncached};
pub use crate::expression::compile::{CompiledExpression, compile, insert_implicit_multiplication};
pub use crate::expression::error::{EvalError, ParseError};
pub use crate::expression::lexer::{Operator, Token, TokenKind, tokenize};
pub use crate::expression::vm::{Bindings, evaluate, evaluate_text, evaluate_with_stack};

pub use crate::scene::document::{GraphDocument, lines_from_json, lines_to_json};
pub use crate::scene::line::{
    CartesianLine, Domain, ImplicitLine, Line, LineBase, LineKind, LineStyle, ParametricLine,
    PolarLine,
};
pub use crate::scene::shading::{Shading, ShadingKind};

pub use crate::graph::assemble::{DEFAULT_SAMPLE_COUNT, build_render_data, build_render_data_with};
pub use crate::graph::grid::build_grid;
pub use crate::graph::inequality::{
    INEQUALITY_OPACITY, Inequality, ShadeDirection, inequality_polygons, parse_inequality,
};
pub use crate::graph::render_data::{GridLine, Polygon, Polyline, RenderData};
pub use crate::graph::sampler::{LineGeometry, resolve_domain, sample_line};
pub use crate::graph::segment::{finite_runs, segment_polylines};
pub use crate::graph::shading::{between_lines, build_shading};

pub use crate::render::raster::{Raster, rasterize_svg, to_raster};
pub use crate::render::svg::{SvgOptions, math_to_screen, to_svg};

pub use crate::session::fingerprint::{InputFingerprint, fingerprint_input};
pub use crate::session::graph_session::{GraphSession, RenderInput, SessionOpts, SessionStats};
