// Image defaults
pub const DEFAULT_IMAGE_NAME: &str = "imapfetch";
pub const IMAGE_DESCRIPTION: &str = "Backup IMAP mailboxes to local compressed archives";
pub const IMAGE_LICENSE: &str = "MIT";
pub const GHCR_REGISTRY: &str = "ghcr.io";

// Branch whose head builds are never pushed
pub const PROTECTED_BRANCH: &str = "devel";

// OCI image labels
pub const IMAGE_TITLE_LABEL: &str = "org.opencontainers.image.title";
pub const IMAGE_DESCRIPTION_LABEL: &str = "org.opencontainers.image.description";
pub const IMAGE_SOURCE_LABEL: &str = "org.opencontainers.image.source";
pub const IMAGE_REVISION_LABEL: &str = "org.opencontainers.image.revision";
pub const IMAGE_LICENSES_LABEL: &str = "org.opencontainers.image.licenses";
pub const IMAGE_CREATED_LABEL: &str = "org.opencontainers.image.created";

// GitHub CI environment
pub const GITHUB_EVENT_NAME: &str = "GITHUB_EVENT_NAME";
pub const GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const GITHUB_REF: &str = "GITHUB_REF";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const GITHUB_SHA: &str = "GITHUB_SHA";
