//! Collaborator capabilities for authentication
//!
//! The remote API stays behind these two traits so the store carries no
//! global client and can be exercised against fakes. Implementations
//! own their transport; the store applies no retry or timeout.

use crux_core::{Contender, ContestId, ContestSchedule, CruxResult, RegistrationCode};

/// Resolves a human-entered registration code to a contender.
///
/// Fails with `CruxError::UnknownRegistrationCode` when the code is not
/// registered; transport failures surface as `CruxError::Transport`.
pub trait CodeResolver {
    async fn find_contender_by_code(&self, code: &RegistrationCode) -> CruxResult<Contender>;
}

/// Fetches the timing of a contest
pub trait ContestWindowResolver {
    async fn get_contest(&self, contest_id: ContestId) -> CruxResult<ContestSchedule>;
}
