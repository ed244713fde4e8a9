use std::fs;

use imapfetch_build_utils::constants::GITHUB_EVENT_PATH;
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;

#[cfg(not(test))]
use imapfetch_build_utils::get_env_var;

#[cfg(test)]
use imapfetch_build_utils::test_utils::get_env_var;

/// The slice of the GitHub event payload the pipeline cares about.
#[derive(Debug, Deserialize, Clone)]
pub(super) struct Event {
    pub repository: EventRepository,

    /// Top-level PR number on `pull_request` events.
    pub number: Option<u64>,

    pub pull_request: Option<EventPullRequest>,
}

impl Event {
    pub fn try_new() -> Result<Self> {
        let path = get_env_var(GITHUB_EVENT_PATH)?;
        serde_json::from_str(
            &fs::read_to_string(&path)
                .into_diagnostic()
                .with_context(|| format!("Failed to read event payload at '{path}'"))?,
        )
        .into_diagnostic()
    }

    pub fn pr_number(&self) -> Option<u64> {
        self.number
            .or_else(|| self.pull_request.as_ref().map(|pr| pr.number))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub(super) struct EventRepository {
    pub owner: EventRepositoryOwner,
}

#[derive(Debug, Deserialize, Clone)]
pub(super) struct EventRepositoryOwner {
    pub login: String,
}

#[derive(Debug, Deserialize, Clone)]
pub(super) struct EventPullRequest {
    pub number: u64,
}
