//! ui::render
//!
//! Text rendering of composed hierarchies.
//!
//! # Styles
//!
//! Tree style mirrors ownership: each level hangs off the root, and each
//! unit in a level's chain nests under the unit that owns it.
//!
//! ```text
//! hierarchy
//! ├── level 0 [1 of 1]
//! │   └── int=0
//! └── level 1 [1 of 1]
//!     └── ...
//! ```
//!
//! Nesting inside a chain stops growing after [`MAX_CHAIN_INDENT`] steps so
//! long chunks keep a bounded line width; deeper units line up under the
//! last indented one.
//!
//! Flat style puts everything on one line with `|` between chunks.

use std::fmt::Display;

use crate::core::hierarchy::{Composite, Hierarchy};

/// Deepest nesting step a unit is drawn at within one chain.
pub const MAX_CHAIN_INDENT: usize = 8;

/// Options for tree rendering.
#[derive(Debug, Clone, Copy)]
pub struct TreeOptions {
    /// Append `[len of nominal]` to each level heading.
    pub show_nominal: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self { show_nominal: true }
    }
}

/// Render `hierarchy` as an indented ownership tree.
///
/// # Example
///
/// ```
/// use hierarchy_builder::core::hierarchy::compose;
/// use hierarchy_builder::ui::render::{render_tree, TreeOptions};
///
/// let text = render_tree(&compose(vec!["a", "b"]), TreeOptions::default());
/// assert_eq!(
///     text,
///     "hierarchy\n├── level 0 [1 of 1]\n│   └── a\n└── level 1 [1 of 1]\n    └── b\n"
/// );
/// ```
pub fn render_tree<T: Display>(hierarchy: &Hierarchy<T>, options: TreeOptions) -> String {
    if hierarchy.is_terminal() {
        return "hierarchy (terminal)\n".to_string();
    }

    let mut out = String::from("hierarchy\n");
    let level_count = hierarchy.level_count();

    for (i, level) in hierarchy.levels().enumerate() {
        let last = i + 1 == level_count;
        let (branch, rail) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        out.push_str(branch);
        out.push_str(&level_heading(level, options));
        out.push('\n');

        for (position, value) in level.head_chain().iter().enumerate() {
            out.push_str(rail);
            out.push_str(&"    ".repeat(position.min(MAX_CHAIN_INDENT)));
            out.push_str("└── ");
            out.push_str(&value.to_string());
            out.push('\n');
        }
    }

    out
}

fn level_heading<T>(level: &Composite<T>, options: TreeOptions) -> String {
    if options.show_nominal {
        format!(
            "level {} [{} of {}]",
            level.depth(),
            level.head_chain().len(),
            level.nominal_len()
        )
    } else {
        format!("level {}", level.depth())
    }
}

/// Render `hierarchy` on one line, chunks separated by ` | `.
///
/// An empty hierarchy renders as an empty line.
pub fn render_flat<T: Display>(hierarchy: &Hierarchy<T>) -> String {
    let line = hierarchy
        .levels()
        .map(|level| {
            level
                .head_chain()
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hierarchy::compose;
    use crate::core::types::{Slot, SlotKind};

    fn demo() -> Hierarchy<Slot> {
        compose([SlotKind::Int, SlotKind::Char, SlotKind::Bool, SlotKind::Long].map(Slot::of_kind))
    }

    #[test]
    fn tree_of_demo_list() {
        let expected = "\
hierarchy
├── level 0 [1 of 1]
│   └── int=0
├── level 1 [1 of 1]
│   └── char=\\u{0}
└── level 2 [2 of 2]
    └── bool=false
        └── long=0
";
        assert_eq!(render_tree(&demo(), TreeOptions::default()), expected);
    }

    #[test]
    fn tree_without_nominal() {
        let text = render_tree(&compose(vec![1, 2, 3]), TreeOptions { show_nominal: false });
        assert_eq!(
            text,
            "hierarchy\n├── level 0\n│   └── 1\n├── level 1\n│   └── 2\n└── level 2\n    └── 3\n"
        );
    }

    #[test]
    fn tree_marks_truncated_level() {
        let text = render_tree(&compose(vec![1, 2, 3]), TreeOptions::default());
        assert!(text.contains("level 2 [1 of 2]"));
    }

    #[test]
    fn long_chain_indent_is_capped() {
        // Depth 9 holds fib(9) = 55 units
        let h = crate::core::hierarchy::compose_from(0..55, 9);
        let text = render_tree(&h, TreeOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 55);

        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap();
        assert!(widest <= 4 + 4 * MAX_CHAIN_INDENT + 4 + 2, "widest line {}", widest);

        let capped = format!("{}└── 54", " ".repeat(4 + 4 * MAX_CHAIN_INDENT));
        assert_eq!(lines.last().copied(), Some(capped.as_str()));
    }

    #[test]
    fn tree_of_terminal() {
        let text = render_tree(&compose(Vec::<u8>::new()), TreeOptions::default());
        assert_eq!(text, "hierarchy (terminal)\n");
    }

    #[test]
    fn flat_of_demo_list() {
        assert_eq!(
            render_flat(&demo()),
            "int=0 | char=\\u{0} | bool=false long=0\n"
        );
    }

    #[test]
    fn flat_of_terminal() {
        assert_eq!(render_flat(&compose(Vec::<u8>::new())), "\n");
    }
}
