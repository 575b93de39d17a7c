//! build command - Compose slots into a hierarchy and render it

use serde::Serialize;

use crate::cli::Context;
use crate::core::config::RenderStyle;
use crate::core::hierarchy::{compose_from, Hierarchy, LevelLayout};
use crate::core::types::Slot;
use crate::ui::output;
use crate::ui::render::{render_flat, render_tree, TreeOptions};
use anyhow::{Context as _, Result};

/// JSON output of `build --style json`.
#[derive(Debug, Serialize)]
struct BuildReport<'a> {
    unit_count: usize,
    level_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<String>,
    levels: Vec<LevelLayout<'a, Slot>>,
}

impl<'a> BuildReport<'a> {
    fn new(hierarchy: &'a Hierarchy<Slot>, fingerprint: bool) -> Self {
        Self {
            unit_count: hierarchy.unit_count(),
            level_count: hierarchy.level_count(),
            fingerprint: fingerprint.then(|| hierarchy.fingerprint().to_string()),
            levels: hierarchy.layout().levels,
        }
    }
}

/// Compose `slots` from `start_depth` and print the result.
///
/// `style` overrides the configured render style. `no_nominal` overrides
/// `render.show_nominal`.
pub fn build(
    ctx: &Context,
    slots: Vec<Slot>,
    start_depth: usize,
    style: Option<RenderStyle>,
    fingerprint: bool,
    no_nominal: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let style = style.unwrap_or_else(|| config.render_style());

    let hierarchy = compose_from(slots, start_depth);
    output::debug(
        format!(
            "Composed {} unit(s) into {} level(s) from depth {}",
            hierarchy.unit_count(),
            hierarchy.level_count(),
            start_depth
        ),
        verbosity,
    );

    match style {
        RenderStyle::Tree => {
            let options = TreeOptions {
                show_nominal: config.show_nominal() && !no_nominal,
            };
            print!("{}", render_tree(&hierarchy, options));
        }
        RenderStyle::Flat => print!("{}", render_flat(&hierarchy)),
        RenderStyle::Json => {
            let report = BuildReport::new(&hierarchy, fingerprint);
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize hierarchy")?;
            println!("{}", json);
            return Ok(());
        }
    }

    if fingerprint {
        println!("fingerprint {}", hierarchy.fingerprint());
    }

    Ok(())
}
