const TAG_PREFIX: &str = "refs/tags/";
const HEAD_PREFIX: &str = "refs/heads/";
const PULL_PREFIX: &str = "refs/pull/";

/// Classification of the raw source-control reference that
/// triggered the pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ref {
    /// `refs/tags/<payload>`, payload taken verbatim.
    VersionTag(String),
    /// `refs/heads/<branch>`.
    BranchHead(String),
    /// `refs/pull/…`; the PR number comes from the event
    /// payload, never from the ref path.
    PullRequest,
    /// Anything else. Not an error, there is just nothing to tag.
    Unrecognized,
}

impl Ref {
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        if let Some(tag) = reference.strip_prefix(TAG_PREFIX) {
            Self::VersionTag(tag.to_owned())
        } else if let Some(branch) = reference.strip_prefix(HEAD_PREFIX) {
            Self::BranchHead(branch.to_owned())
        } else if reference.starts_with(PULL_PREFIX) {
            Self::PullRequest
        } else {
            Self::Unrecognized
        }
    }

    /// The branch name with the `refs/heads/` prefix stripped,
    /// empty when the reference points anywhere else.
    #[must_use]
    pub fn head_name(reference: &str) -> String {
        reference
            .strip_prefix(HEAD_PREFIX)
            .unwrap_or_default()
            .to_owned()
    }
}

/// A version tag payload matching `v<major>.<minor>.<patch>` exactly,
/// all three components plain digit runs.
///
/// The components are kept as the matched substrings rather than
/// integers so they reach the tags verbatim, without any
/// re-rendering or zero-stripping. Pre-release or build suffixes
/// (`v1.2.3-rc1`) don't match and fall back to the literal tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer<'scope> {
    pub major: &'scope str,
    pub minor: &'scope str,
    pub patch: &'scope str,
}

impl<'scope> SemVer<'scope> {
    #[must_use]
    pub fn parse(payload: &'scope str) -> Option<Self> {
        fn digits(part: &str) -> bool {
            !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
        }

        let mut parts = payload.strip_prefix('v')?.split('.');
        let (major, minor, patch) = (parts.next()?, parts.next()?, parts.next()?);

        (parts.next().is_none() && digits(major) && digits(minor) && digits(patch)).then_some(
            Self {
                major,
                minor,
                patch,
            },
        )
    }
}
