use anyhow::{bail, Result};
use clap::Args;
use log::{info, warn};
use std::path::{Path, PathBuf};
use text_diff::{DiffResult, LineSequence};

use crate::config::{Config, DiffConfig, ViewMode};
use crate::input::read_pair;
use crate::render::{render, render_changes};

#[derive(Args, Debug)]
pub struct DiffArgs {
    #[arg(index = 1, help = "The left (old) file, or '-' for standard input")]
    pub left: PathBuf,

    #[arg(index = 2, help = "The right (new) file, or '-' for standard input")]
    pub right: PathBuf,

    #[arg(short = 'i', long, help = "Compare lines case-insensitively")]
    pub ignore_case: bool,

    #[arg(short = 'w', long, help = "Collapse whitespace runs and trim lines before comparing")]
    pub ignore_whitespace: bool,

    #[arg(long, value_enum, help = "How to print the result")]
    pub view: Option<ViewMode>,

    #[arg(long, help = "List every change as a navigation stop instead of the diff")]
    pub changes: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Compare inputs even when they exceed the configured size limit")]
    pub force: bool,

    #[arg(long, help = "Read settings from this TOML file")]
    pub config: Option<PathBuf>,
}

impl DiffArgs {
    /// Layer the command line flags over the configured settings
    pub fn apply(&self, mut settings: DiffConfig) -> DiffConfig {
        if self.ignore_case {
            settings.comparison.ignore_case = true;
        }
        if self.ignore_whitespace {
            settings.comparison.ignore_whitespace = true;
        }
        if let Some(view) = self.view {
            settings.view = view;
        }
        if self.no_color {
            settings.color = false;
        }
        settings
    }
}

pub fn run(args: &DiffArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let settings = args.apply(config.diff);
    info!("Diff settings: {:?}", settings);

    if !settings.color {
        colored::control::set_override(false);
    }

    let (left_text, right_text) = read_pair(&args.left, &args.right)?;
    let left = LineSequence::from_text(&left_text);
    let right = LineSequence::from_text(&right_text);

    check_size(&left, &right, &settings, args.force, (&args.left, &args.right))?;

    let diff = DiffResult::compute_lines(&left, &right, &settings.comparison);

    let output = if args.changes {
        render_changes(&diff)
    } else {
        render(&diff, settings.view)
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Refuse inputs whose comparison table would exceed the configured limit
fn check_size(
    left: &LineSequence,
    right: &LineSequence,
    settings: &DiffConfig,
    force: bool,
    paths: (&Path, &Path),
) -> Result<()> {
    let cells = left.len() as u64 * right.len() as u64;
    if cells <= settings.max_cells {
        return Ok(());
    }

    if force {
        warn!(
            "Comparing {} x {} lines ({} and {}) exceeds the limit of {} cells",
            left.len(),
            right.len(),
            paths.0.display(),
            paths.1.display(),
            settings.max_cells
        );
        return Ok(());
    }

    bail!(
        "Inputs too large: {} x {} lines exceeds the limit of {} cells (use --force to compare anyway)",
        left.len(),
        right.len(),
        settings.max_cells
    );
}
