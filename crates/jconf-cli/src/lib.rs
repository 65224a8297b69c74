//! jconf2dot command-line interface.
//!
pub mod output;

use std::time::Instant;

use tracing::{info, warn};

use jconf_core::build_config_graph;
use jconf_dot::render_graph;
use jconf_error::{Error, Result};

pub use output::write_output;

/// Options for running jconf2dot.
#[derive(Debug, Clone, Default)]
pub struct JconfOptions {
    /// Top-level documents, walked in this order.
    pub files: Vec<String>,
    /// Write to this file instead of stdout.
    pub output: Option<String>,
    /// Fail when two distinct names sanitize to the same id.
    pub strict_ids: bool,
}

/// Walk every input document and render the DOT graph.
pub fn run_main(opts: &JconfOptions) -> Result<String> {
    if opts.files.is_empty() {
        return Err(Error::invalid_argument("no input files given").with_operation("cli::run_main"));
    }

    let walk_start = Instant::now();
    let graph = build_config_graph(&opts.files)?;
    info!(
        files = opts.files.len(),
        secs = walk_start.elapsed().as_secs_f64(),
        "walked configuration forest"
    );

    let collisions = graph.collisions();
    if let Some(first) = collisions.first() {
        if opts.strict_ids {
            return Err(Error::identifier_collision(
                first.id.clone(),
                format!(
                    "'{}' and '{}' both sanitize to '{}'",
                    first.first, first.second, first.id
                ),
            )
            .with_operation("cli::run_main")
            .with_context("collisions", collisions.len().to_string()));
        }
        warn!(count = collisions.len(), "identifiers merged by sanitization");
    }

    Ok(render_graph(&graph))
}
