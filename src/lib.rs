//! CI helper for the imapfetch container image pipeline.
//!
//! Computes the registry tags, OCI provenance labels, and push-gate
//! decision for one pipeline run. Building and pushing the image
//! itself stays with the container tooling invoked by the workflow.

pub mod commands;
pub mod context;
pub mod labels;
pub mod reference;
pub mod resolver;
pub mod tag_set;

#[cfg(test)]
pub(crate) mod test {
    pub const TEST_OWNER: &str = "acme";
    pub const TEST_IMAGE: &str = "imapfetch";
}
