use bon::Builder;
use clap::Args;
use imapfetch_build_utils::constants::DEFAULT_IMAGE_NAME;
use log::{debug, trace};
use miette::Result;

use crate::{context::BuildContext, resolver::Resolver};

use super::PipelineCommand;

#[derive(Debug, Clone, Args, Builder)]
pub struct TagsCommand {
    /// Base name of the image to tag.
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    #[builder(into)]
    image: String,
}

impl PipelineCommand for TagsCommand {
    fn try_run(&mut self) -> Result<()> {
        trace!("TagsCommand::try_run()");

        let ctx = BuildContext::try_from_env(&self.image)?;
        let resolution = Resolver::resolve(&ctx)?;

        if resolution.tags.is_empty() {
            debug!("No tags for '{}'", ctx.reference);
        }

        for tag in resolution.tags.iter() {
            println!("{tag}");
        }

        Ok(())
    }
}
