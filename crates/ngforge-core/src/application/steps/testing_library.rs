//! Angular Testing Library.

use tracing::info;

use super::StepContext;
use crate::domain::ProjectConfig;
use crate::error::ForgeResult;

pub const PACKAGES: &[&str] = &[
    "@testing-library/angular",
    "@testing-library/user-event",
    "@testing-library/jest-dom",
];

pub fn applies(config: &ProjectConfig) -> bool {
    config.testing_library() && config.test_runner().is_enabled()
}

pub fn run(ctx: &StepContext<'_>) -> ForgeResult<()> {
    ctx.install_dev(PACKAGES)?;
    info!("Testing Library installed");
    Ok(())
}
