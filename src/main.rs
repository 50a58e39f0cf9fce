use anyhow::Result;
use clap::Parser;
use std::path::Path;

use scope_icons::icon_gen;

/// Directory the icons are written to. It must already exist.
const ICON_DIR: &str = "icons";

#[derive(Debug, Parser)]
#[clap(
    name = "scope-icons",
    version,
    about = "Generate the placeholder PNG icons (16, 48 and 128 px) into ./icons"
)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let rasterizer = icon_gen::default_rasterizer()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    icon_gen::generate_icons(Path::new(ICON_DIR), rasterizer.as_deref(), &mut out)?;

    Ok(())
}
