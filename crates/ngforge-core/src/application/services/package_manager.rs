//! Package-manager resolution.
//!
//! Maps the chosen [`PackageManager`] to the command prefix used to invoke
//! it. `npm` ships with Node.js; the others may not be installed globally,
//! in which case `npx` fetches them on demand.

use tracing::{debug, warn};

use crate::application::ports::{CommandRunner, RunOptions};
use crate::domain::PackageManager;

/// Resolves package managers to invocable commands by probing availability.
pub struct PackageManagerResolver<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PackageManagerResolver<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Command prefix for `pm`. Never fails.
    ///
    /// - `npm` resolves to `"npm"` without probing.
    /// - Any other manager is probed with `<pm> --version`; it resolves to
    ///   `"<pm>"` when the probe succeeds and to `"npx <pm>"` otherwise.
    pub fn resolve(&self, pm: PackageManager) -> String {
        if pm.is_default() {
            return pm.as_str().to_string();
        }

        let probe = format!("{} --version", pm);
        match self.runner.run(&probe, &RunOptions::silent()) {
            Ok(output) => {
                debug!(package_manager = %pm, version = output.stdout.trim(), "Package manager found");
                pm.as_str().to_string()
            }
            Err(e) => {
                warn!(
                    package_manager = %pm,
                    error = %e,
                    "{} is not installed, falling back to npx",
                    pm
                );
                format!("npx {}", pm)
            }
        }
    }
}
