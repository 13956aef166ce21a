//! Find the installed IDE.

use anyhow::Result;
use colored::Colorize;
use idegen_core::config::IdegenConfig;
use idegen_core::term::{colorize, wrap_text};
use idegen_types::{IdeAdapter, IdeKind};

pub async fn execute(config: &IdegenConfig, ide: IdeKind) -> Result<()> {
    let adapter = match ide {
        IdeKind::WebStorm => super::webstorm(config)?,
    };

    match adapter.locate_executable() {
        Some(path) => println!("{}", path.display()),
        None => {
            println!("{} {} is not installed", "!".yellow(), adapter.kind().to_string().cyan());
            let roots: Vec<String> = adapter.layout().roots.iter().map(|r| r.display().to_string()).collect();
            println!("  Searched: {}", roots.join(", "));
            let hint = "If it is installed somewhere unusual, set #C{webstorm.executable} in \
                        ~/.idegen/config or export #C{IDEGEN_WEBSTORM__EXECUTABLE}.";
            for line in wrap_text(hint, 72) {
                println!("  {}", colorize(&line));
            }
        }
    }

    Ok(())
}
