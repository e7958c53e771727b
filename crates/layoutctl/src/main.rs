//! Command-line driver for the bidirectional layout group.
//!
//! Lays out a scene read from JSON and prints the placed geometry.

mod scene;

use anyhow::{Context as _, Result, anyhow};
use bidir_layout::LayoutConfig;
use scene::Scene;
use serde_json::to_string_pretty;
use std::env;
use std::fs::read;
use std::io::{Write as _, stderr, stdout};
use std::path::{Path, PathBuf};

/// Lay out the scene at `path` and print the report.
///
/// # Errors
/// Returns an error if the scene cannot be read or parsed, or output fails.
fn cmd_run(path: &Path) -> Result<()> {
    let data = read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let scene = Scene::from_json_slice(&data)
        .with_context(|| format!("failed to load scene {}", path.display()))?;
    let report = scene.run();
    writeln!(stdout(), "{}", to_string_pretty(&report)?)?;
    Ok(())
}

/// Print the default configuration.
///
/// # Errors
/// Returns an error if serialization or output fails.
fn cmd_defaults() -> Result<()> {
    writeln!(stdout(), "{}", LayoutConfig::default().to_json_string()?)?;
    Ok(())
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  layoutctl run <SCENE.json>\n  layoutctl defaults"
    ));
}

/// Main entry point for the layoutctl CLI tool.
///
/// # Errors
/// Returns an error if command parsing or execution fails.
fn main() -> Result<()> {
    env_logger::init();
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return Err(anyhow!("missing command"));
    }
    let cmd = args.remove(0);
    match cmd.as_str() {
        "run" => {
            let path = args
                .first()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("run needs a scene path"))?;
            cmd_run(&path)
        }
        "defaults" => cmd_defaults(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            Err(anyhow!("unknown command '{cmd}'"))
        }
    }
}
