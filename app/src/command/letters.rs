use gematria_config::Config;
use gematria_core::Method;

use crate::render;

/// Strategy for printing the letter value table of a method.
///
/// Lists all 27 letters, finals last, with their value under the method
/// given on the command line or configured as default.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: Input is only the optional method override
#[derive(Debug, Clone, Copy)]
pub struct LettersStrategy;

impl super::CommandStrategy for LettersStrategy {
    type Input = Option<Method>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let method = super::resolve_method(input, &config);

        print!(
            "{}",
            render::alphabet_table(method, config.display.hebrew_labels)
        );
        Ok(())
    }
}
