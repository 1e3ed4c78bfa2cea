//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate zero-sized strategy type with its own input,
//! dispatched statically from `main`.

mod analyze;
mod info;
mod init;
mod interpret;
mod shell;
mod version;

pub use analyze::AnalyzeStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use interpret::InterpretStrategy;
pub use shell::{ShellInput, ShellStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
