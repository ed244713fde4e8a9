use bon::Builder;
use imapfetch_build_utils::constants::{GITHUB_EVENT_NAME, GITHUB_REF};
use log::trace;
use miette::Result;

#[cfg(not(test))]
use imapfetch_build_utils::get_env_var;

#[cfg(test)]
use imapfetch_build_utils::test_utils::get_env_var;

use event::Event;

mod event;

/// The kind of CI event that triggered the run, from
/// `GITHUB_EVENT_NAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    PullRequest,
    Schedule,
    WorkflowDispatch,
    Other,
}

impl EventKind {
    #[must_use]
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "push" => Self::Push,
            "pull_request" | "pull_request_target" => Self::PullRequest,
            "schedule" => Self::Schedule,
            "workflow_dispatch" => Self::WorkflowDispatch,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_pull_request(self) -> bool {
        matches!(self, Self::PullRequest)
    }
}

/// Everything the pipeline knows about one triggering event.
/// Assembled once per run and immutable afterwards.
#[derive(Debug, Clone, Builder)]
pub struct BuildContext {
    pub event_kind: EventKind,

    /// The full reference string, e.g. `refs/tags/v1.2.3`.
    #[builder(into)]
    pub reference: String,

    #[builder(into)]
    pub repository_owner: String,

    /// Base name of the image, without registry or owner.
    #[builder(into)]
    pub image_name: String,

    /// Present only for pull request events.
    pub pr_number: Option<u64>,
}

impl BuildContext {
    /// Assembles the context from the CI environment and the
    /// event payload file.
    ///
    /// # Errors
    /// Will error if the required env variables aren't set or the
    /// event payload can't be read.
    pub fn try_from_env(image_name: &str) -> Result<Self> {
        let event_kind = EventKind::from_event_name(
            &get_env_var(GITHUB_EVENT_NAME).inspect(|v| trace!("{GITHUB_EVENT_NAME}={v}"))?,
        );
        let reference = get_env_var(GITHUB_REF).inspect(|v| trace!("{GITHUB_REF}={v}"))?;
        let event = Event::try_new()?;

        Ok(Self::builder()
            .event_kind(event_kind)
            .reference(reference)
            .repository_owner(event.repository.owner.login.trim().to_lowercase())
            .image_name(image_name)
            .maybe_pr_number(event.pr_number())
            .build())
    }
}
