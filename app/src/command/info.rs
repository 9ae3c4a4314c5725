use gematria_config::Config;
use gematria_core::{MAX_NAMES, Method};
use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// This strategy outputs:
/// - Config file path and whether it was found
/// - Calculation defaults and available methods
/// - Display options
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== gematria Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", path.display());
        if path.exists() {
            println!("  Status: Loaded");
        } else {
            info!("Config file missing, showing defaults");
            println!("  Status: Not found (using defaults, run 'gematria init')");
        }
        println!();

        println!("Calculation:");
        let method = config.calculation.default_method;
        println!("  Default Method: {method} - {}", method.label());
        println!("  Max Names: {MAX_NAMES}");
        println!(
            "  Available: {}",
            Method::ALL.map(|m| m.as_str()).join(", ")
        );
        println!();

        println!("Display:");
        println!("  Format: {}", config.display.format);
        println!("  Hebrew Labels: {}", config.display.hebrew_labels);
        println!("  Show Letters: {}", config.display.show_letters);

        Ok(())
    }
}
