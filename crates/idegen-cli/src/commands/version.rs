//! Show version information.

use anyhow::Result;
use colored::Colorize;
use idegen_core::APP_NAME;

pub async fn execute(detailed: bool) -> Result<()> {
    println!("{} {}", APP_NAME.cyan().bold(), env!("CARGO_PKG_VERSION"));

    if detailed {
        println!("\nBuild Information:");
        println!("  Version: {}", env!("CARGO_PKG_VERSION"));
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
        println!("  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
        println!("  Platform: {}", idegen_types::Platform::current());
    }

    Ok(())
}
