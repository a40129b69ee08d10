// Webkeys Installer CLI
// Copies the bundled hotkey controller and stylesheet into a host project

use std::path::{Path, PathBuf};

use clap::Parser;

use webkeys::config::Config;
use webkeys::install::{install, is_installed, uninstall, InstallLayout};

/// Asset installer for the webkeys hotkey controller
#[derive(Parser, Debug)]
#[command(name = "webkeys")]
#[command(author = "webkeys contributors")]
#[command(version = "0.1.0")]
#[command(about = "Install declarative hotkey assets into a web project", long_about = None)]
struct Args {
    /// Project root to install into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    target: PathBuf,

    /// Directory for the controller script, relative to the target
    #[arg(long, value_name = "DIR")]
    controllers_dir: Option<PathBuf>,

    /// Directory for the stylesheet, relative to the target
    #[arg(long, value_name = "DIR")]
    stylesheets_dir: Option<PathBuf>,

    /// Remove previously installed assets
    #[arg(long)]
    uninstall: bool,

    /// Report whether the assets are installed and exit
    #[arg(long)]
    status: bool,

    /// Overwrite installed files whose content has diverged
    #[arg(short, long)]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Resolve the asset layout with precedence:
/// CLI flags > webkeys.toml [install] > built-in defaults.
fn resolve_layout(args: &Args, config: &Config) -> InstallLayout {
    let mut layout = InstallLayout::new(&args.target);

    let controllers_dir = args
        .controllers_dir
        .clone()
        .or_else(|| config.controllers_dir().map(Path::to_path_buf));
    if let Some(dir) = controllers_dir {
        layout = layout.with_controllers_dir(dir);
    }

    let stylesheets_dir = args
        .stylesheets_dir
        .clone()
        .or_else(|| config.stylesheets_dir().map(Path::to_path_buf));
    if let Some(dir) = stylesheets_dir {
        layout = layout.with_stylesheets_dir(dir);
    }

    layout
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load_from(&args.target)?;
    let layout = resolve_layout(&args, &config);

    if args.status {
        if is_installed(&layout) {
            println!("webkeys assets are installed");
        } else {
            println!("webkeys assets are not installed");
        }
        return Ok(());
    }

    if args.uninstall {
        let report = uninstall(&layout)?;
        for path in &report.removed {
            println!("removed {}", path.display());
        }
        for path in &report.needs_manual {
            println!(
                "kept {} (content differs from the bundled asset)",
                path.display()
            );
        }
        if report.removed.is_empty() && report.needs_manual.is_empty() {
            println!("nothing to remove");
        }
        return Ok(());
    }

    let report = install(&layout, args.force)?;
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    for path in &report.skipped {
        println!("unchanged {}", path.display());
    }
    Ok(())
}
