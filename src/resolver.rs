use chrono::{DateTime, Utc};
use imapfetch_build_utils::constants::GHCR_REGISTRY;
use log::{debug, trace};
use miette::{bail, Result};

use crate::{
    context::{BuildContext, EventKind},
    reference::{Ref, SemVer},
    tag_set::TagSet,
};

/// The resolver's answer for one pipeline run, consumed by the
/// publish step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Fully qualified tags to apply, first-seen order, deduplicated.
    pub tags: TagSet,

    /// Branch name with `refs/heads/` stripped, empty for
    /// non-branch references.
    pub head: String,

    /// UTC build timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
    pub created: String,
}

pub struct Resolver;

impl Resolver {
    /// Computes the tag set for the triggering reference.
    ///
    /// Version tags get one tag per semver precision level plus
    /// `latest`; tags that aren't exact `v<major>.<minor>.<patch>`
    /// versions are applied literally, still plus `latest`. Branch
    /// heads get `latest` alone. All of those are qualified with
    /// `ghcr.io/<owner>/`. Pull requests get a single unqualified
    /// `<owner>/<image>:pr-<number>` tag, and unrecognized
    /// references produce nothing at all.
    ///
    /// # Errors
    /// Will error if a pull request reference arrives without
    /// its PR number.
    pub fn resolve(ctx: &BuildContext) -> Result<Resolution> {
        Self::resolve_at(ctx, Utc::now())
    }

    /// Same as [`Self::resolve`] with the clock frozen at `now`.
    ///
    /// # Errors
    /// Will error if a pull request reference arrives without
    /// its PR number.
    pub fn resolve_at(ctx: &BuildContext, now: DateTime<Utc>) -> Result<Resolution> {
        trace!("Resolver::resolve_at({ctx:?}, {now})");

        let reference = Ref::parse(&ctx.reference);
        debug!("Classified '{}' as {reference:?}", ctx.reference);

        let head = Ref::head_name(&ctx.reference);
        let created = imapfetch_build_utils::format_timestamp(&now);

        let mut tags = TagSet::new();
        match &reference {
            Ref::PullRequest => {
                let Some(number) = ctx.pr_number else {
                    bail!(
                        "Pull request build for '{}' is missing its PR number",
                        ctx.reference
                    );
                };
                tags.insert(format!(
                    "{}/{}:pr-{number}",
                    ctx.repository_owner, ctx.image_name
                ));
            }
            Ref::VersionTag(_) | Ref::BranchHead(_) => {
                let mut suffixes = TagSet::new();

                if let Ref::VersionTag(version) = &reference {
                    if let Some(semver) = SemVer::parse(version) {
                        suffixes.insert(format!("{}:{}", ctx.image_name, semver.major));
                        suffixes.insert(format!(
                            "{}:{}.{}",
                            ctx.image_name, semver.major, semver.minor
                        ));
                        suffixes.insert(format!(
                            "{}:{}.{}.{}",
                            ctx.image_name, semver.major, semver.minor, semver.patch
                        ));
                    } else {
                        debug!("'{version}' is not an exact semver, tagging literally");
                        suffixes.insert(format!("{}:{version}", ctx.image_name));
                    }
                }

                // Version tags get the branch treatment on top of
                // their own suffixes.
                suffixes.insert(format!("{}:latest", ctx.image_name));

                for suffix in suffixes.iter() {
                    tags.insert(format!(
                        "{GHCR_REGISTRY}/{}/{suffix}",
                        ctx.repository_owner
                    ));
                }
            }
            Ref::Unrecognized => {
                debug!("Nothing to tag for '{}'", ctx.reference);
            }
        }

        trace!("tags=[{tags}] head='{head}' created={created}");

        Ok(Resolution {
            tags,
            head,
            created,
        })
    }
}

/// Gate consumed by the publish step: pull request builds and the
/// protected branch head are built without pushing.
#[must_use]
pub fn push_authorized(event_kind: EventKind, head: &str, protected_branch: &str) -> bool {
    !event_kind.is_pull_request() && head != protected_branch
}

#[cfg(test)]
mod test {
    use chrono::{DateTime, TimeZone, Utc};
    use imapfetch_build_utils::{constants::PROTECTED_BRANCH, string_vec};
    use rstest::rstest;

    use crate::{
        context::{BuildContext, EventKind},
        test::{TEST_IMAGE, TEST_OWNER},
    };

    use super::{push_authorized, Resolver};

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    fn push_context(reference: &str) -> BuildContext {
        BuildContext::builder()
            .event_kind(EventKind::Push)
            .reference(reference)
            .repository_owner(TEST_OWNER)
            .image_name(TEST_IMAGE)
            .build()
    }

    #[rstest]
    #[case::semver_tag(
        "refs/tags/v1.2.3",
        string_vec![
            "ghcr.io/acme/imapfetch:1",
            "ghcr.io/acme/imapfetch:1.2",
            "ghcr.io/acme/imapfetch:1.2.3",
            "ghcr.io/acme/imapfetch:latest",
        ],
        "",
    )]
    #[case::multi_digit_semver_tag(
        "refs/tags/v2.10.4",
        string_vec![
            "ghcr.io/acme/imapfetch:2",
            "ghcr.io/acme/imapfetch:2.10",
            "ghcr.io/acme/imapfetch:2.10.4",
            "ghcr.io/acme/imapfetch:latest",
        ],
        "",
    )]
    #[case::literal_tag(
        "refs/tags/beta",
        string_vec![
            "ghcr.io/acme/imapfetch:beta",
            "ghcr.io/acme/imapfetch:latest",
        ],
        "",
    )]
    #[case::pre_release_tag(
        "refs/tags/v1.2.3-rc1",
        string_vec![
            "ghcr.io/acme/imapfetch:v1.2.3-rc1",
            "ghcr.io/acme/imapfetch:latest",
        ],
        "",
    )]
    #[case::latest_tag_collapses(
        "refs/tags/latest",
        string_vec!["ghcr.io/acme/imapfetch:latest"],
        "",
    )]
    #[case::branch(
        "refs/heads/devel",
        string_vec!["ghcr.io/acme/imapfetch:latest"],
        "devel",
    )]
    #[case::nested_branch(
        "refs/heads/feature/test",
        string_vec!["ghcr.io/acme/imapfetch:latest"],
        "feature/test",
    )]
    #[case::unrecognized("refs/notes/commits", Vec::new(), "")]
    fn resolve_push_references(
        #[case] reference: &str,
        #[case] expected_tags: Vec<String>,
        #[case] expected_head: &str,
    ) {
        let ctx = push_context(reference);

        let resolution = Resolver::resolve_at(&ctx, frozen_now()).unwrap();

        assert_eq!(Vec::from(resolution.tags), expected_tags);
        assert_eq!(resolution.head, expected_head);
        assert_eq!(resolution.created, "2026-08-30T12:00:00Z");
    }

    #[test]
    fn resolve_pull_request() {
        let ctx = BuildContext::builder()
            .event_kind(EventKind::PullRequest)
            .reference("refs/pull/42/merge")
            .repository_owner(TEST_OWNER)
            .image_name(TEST_IMAGE)
            .pr_number(42)
            .build();

        let resolution = Resolver::resolve_at(&ctx, frozen_now()).unwrap();

        assert_eq!(Vec::from(resolution.tags), string_vec!["acme/imapfetch:pr-42"]);
        assert_eq!(resolution.head, "");
    }

    #[test]
    fn resolve_pull_request_without_number() {
        let ctx = BuildContext::builder()
            .event_kind(EventKind::PullRequest)
            .reference("refs/pull/42/merge")
            .repository_owner(TEST_OWNER)
            .image_name(TEST_IMAGE)
            .build();

        assert!(Resolver::resolve_at(&ctx, frozen_now()).is_err());
    }

    #[test]
    fn resolve_is_idempotent() {
        let ctx = push_context("refs/tags/v1.2.3");
        let now = frozen_now();

        let first = Resolver::resolve_at(&ctx, now).unwrap();
        let second = Resolver::resolve_at(&ctx, now).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case::push_on_release(EventKind::Push, "", true)]
    #[case::push_on_branch(EventKind::Push, "main", true)]
    #[case::push_on_protected(EventKind::Push, PROTECTED_BRANCH, false)]
    #[case::pull_request(EventKind::PullRequest, "", false)]
    fn push_gate(#[case] event_kind: EventKind, #[case] head: &str, #[case] expected: bool) {
        assert_eq!(push_authorized(event_kind, head, PROTECTED_BRANCH), expected);
    }
}
