use gematria_config::{Config, OutputFormat};
use gematria_core::{Method, calculate_names};
use tracing::info;

use crate::render;

/// Input parameters for the Calc command strategy.
#[derive(Debug, Clone)]
pub struct CalcInput {
    /// Names to calculate, at most `gematria_core::MAX_NAMES`
    pub names: Vec<String>,
    /// Optional method override
    pub method: Option<Method>,
    /// Force JSON output regardless of config
    pub json: bool,
    /// Suppress the per-letter breakdown
    pub no_letters: bool,
}

/// Strategy for calculating gematria values of names.
///
/// This strategy handles the core calculator flow:
/// - Loading display defaults from config
/// - Resolving the method (flag first, then config)
/// - Computing every name and the combined total
/// - Printing a text report or JSON
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: Strategy holds no internal state, all input via `CalcInput`
#[derive(Debug, Clone, Copy)]
pub struct CalcStrategy;

impl super::CommandStrategy for CalcStrategy {
    type Input = CalcInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let method = super::resolve_method(input.method, &config);

        let result = calculate_names(input.names.as_slice(), method)?;
        info!(
            "Calculated {} name(s) with {method}: total {}",
            result.names.len(),
            result.total
        );

        let format = if input.json {
            OutputFormat::Json
        } else {
            config.display.format
        };

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Text => {
                let show_letters = config.display.show_letters && !input.no_letters;
                print!(
                    "{}",
                    render::names_report(&result, config.display.hebrew_labels, show_letters)
                );
            }
        }

        Ok(())
    }
}
