// Update module - the check results and the interactive update stage
//
// - context: UpdateResult / CheckReport / UpdateSummary
// - interaction: yes/no prompts
// - updater: remove + re-add of accepted plugins
pub mod context;
pub mod interaction;
pub mod updater;

pub use context::{CheckReport, UpdateResult, UpdateSummary};
pub use interaction::UpdateInteraction;
pub use updater::InteractiveUpdater;
