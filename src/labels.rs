use std::collections::BTreeMap;

use bon::Builder;
use imapfetch_build_utils::{
    constants::{
        IMAGE_CREATED_LABEL, IMAGE_DESCRIPTION_LABEL, IMAGE_LICENSES_LABEL, IMAGE_REVISION_LABEL,
        IMAGE_SOURCE_LABEL, IMAGE_TITLE_LABEL,
    },
    string,
};
use log::trace;

/// Provenance facts baked into the image as OCI labels.
#[derive(Debug, Clone, Copy, Builder)]
pub struct LabelOpts<'scope> {
    pub title: &'scope str,
    pub description: &'scope str,

    /// URL of the repository the image was built from.
    pub source: &'scope str,

    /// Commit SHA the build ran against.
    pub revision: &'scope str,

    pub license: &'scope str,

    /// Build timestamp from the resolver.
    pub created: &'scope str,
}

// btree keeps the keys sorted, which makes the rendered block
// stable and easy to diff in workflow logs
#[must_use]
pub fn generate_labels(opts: &LabelOpts) -> BTreeMap<&'static str, String> {
    trace!("generate_labels({opts:?})");

    BTreeMap::from([
        (IMAGE_TITLE_LABEL, string!(opts.title)),
        (IMAGE_DESCRIPTION_LABEL, string!(opts.description)),
        (IMAGE_SOURCE_LABEL, string!(opts.source)),
        (IMAGE_REVISION_LABEL, string!(opts.revision)),
        (IMAGE_LICENSES_LABEL, string!(opts.license)),
        (IMAGE_CREATED_LABEL, string!(opts.created)),
    ])
}

/// Renders labels as one `key=value` per line, the shape the
/// workflow feeds to the build engine's `--label` arguments.
#[must_use]
pub fn render_labels(labels: &BTreeMap<&str, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::{generate_labels, render_labels, LabelOpts};

    fn opts() -> LabelOpts<'static> {
        LabelOpts::builder()
            .title("imapfetch")
            .description("description")
            .source("https://github.com/acme/imapfetch")
            .revision("1234567890abcdef")
            .license("MIT")
            .created("2026-08-30T12:00:00Z")
            .build()
    }

    #[test]
    fn generates_all_provenance_labels() {
        let labels = render_labels(&generate_labels(&opts()));

        assert!(labels.contains("org.opencontainers.image.title=imapfetch"));
        assert!(labels.contains("org.opencontainers.image.description=description"));
        assert!(labels.contains("org.opencontainers.image.source=https://github.com/acme/imapfetch"));
        assert!(labels.contains("org.opencontainers.image.revision=1234567890abcdef"));
        assert!(labels.contains("org.opencontainers.image.licenses=MIT"));
        assert!(labels.contains("org.opencontainers.image.created=2026-08-30T12:00:00Z"));
        assert_eq!(labels.split('\n').count(), 6);
    }

    #[test]
    fn renders_sorted_by_key() {
        let labels = render_labels(&generate_labels(&opts()));
        let keys: Vec<_> = labels
            .split('\n')
            .map(|line| line.split('=').next().unwrap())
            .collect();

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
