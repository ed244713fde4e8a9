use bon::Builder;
use clap::Args;
use imapfetch_build_utils::{
    constants::{
        DEFAULT_IMAGE_NAME, GITHUB_REPOSITORY, GITHUB_SERVER_URL, GITHUB_SHA, IMAGE_DESCRIPTION,
        IMAGE_LICENSE,
    },
    get_env_var,
};
use log::trace;
use miette::Result;

use crate::{
    context::BuildContext,
    labels::{generate_labels, render_labels, LabelOpts},
    resolver::Resolver,
};

use super::PipelineCommand;

#[derive(Debug, Clone, Args, Builder)]
pub struct LabelsCommand {
    /// Base name of the image the labels describe.
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    #[builder(into)]
    image: String,
}

impl PipelineCommand for LabelsCommand {
    fn try_run(&mut self) -> Result<()> {
        trace!("LabelsCommand::try_run()");

        let ctx = BuildContext::try_from_env(&self.image)?;
        let resolution = Resolver::resolve(&ctx)?;

        let source = format!(
            "{}/{}",
            get_env_var(GITHUB_SERVER_URL)?,
            get_env_var(GITHUB_REPOSITORY)?
        );
        let revision = get_env_var(GITHUB_SHA)?;

        let labels = generate_labels(
            &LabelOpts::builder()
                .title(&self.image)
                .description(IMAGE_DESCRIPTION)
                .source(&source)
                .revision(&revision)
                .license(IMAGE_LICENSE)
                .created(&resolution.created)
                .build(),
        );

        println!("{}", render_labels(&labels));

        Ok(())
    }
}
