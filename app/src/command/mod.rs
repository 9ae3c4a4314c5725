//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use gematria_config::Config;
use gematria_core::Method;
use tracing::debug;

mod calc;
mod info;
mod init;
mod letters;
mod version;

pub use calc::{CalcInput, CalcStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use letters::LettersStrategy;
pub use version::VersionStrategy;

/// Resolve the method for a command: explicit flag first, then config.
fn resolve_method(flag: Option<Method>, config: &Config) -> Method {
    let method = flag.unwrap_or(config.calculation.default_method);
    debug!("Using method: {method}");
    method
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
