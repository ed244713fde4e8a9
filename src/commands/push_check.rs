use bon::Builder;
use clap::Args;
use imapfetch_build_utils::constants::{DEFAULT_IMAGE_NAME, PROTECTED_BRANCH};
use log::{debug, trace};
use miette::Result;

use crate::{context::BuildContext, reference::Ref, resolver};

use super::PipelineCommand;

#[derive(Debug, Clone, Args, Builder)]
pub struct PushCheckCommand {
    /// Base name of the image being published.
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    #[builder(into)]
    image: String,

    /// Branch whose head builds are never pushed.
    #[arg(long, default_value = PROTECTED_BRANCH)]
    #[builder(into)]
    protected_branch: String,
}

impl PipelineCommand for PushCheckCommand {
    fn try_run(&mut self) -> Result<()> {
        trace!("PushCheckCommand::try_run()");

        let ctx = BuildContext::try_from_env(&self.image)?;
        let head = Ref::head_name(&ctx.reference);

        let authorized = resolver::push_authorized(ctx.event_kind, &head, &self.protected_branch);
        debug!(
            "event={:?} head='{head}' protected='{}' push={authorized}",
            ctx.event_kind, self.protected_branch
        );

        println!("{authorized}");

        Ok(())
    }
}
