use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::error;

pub mod labels;
pub mod push_check;
pub mod tags;

pub trait PipelineCommand {
    /// Runs the command and returns a result
    /// of the execution.
    ///
    /// # Errors
    /// Can return a `miette` Report.
    fn try_run(&mut self) -> miette::Result<()>;

    /// Runs the command and exits if there is an error.
    fn run(&mut self) {
        if let Err(e) = self.try_run() {
            error!("{e:?}");
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "imapfetch-build", about, long_about = None, version)]
pub struct PipelineArgs {
    #[command(subcommand)]
    pub command: CommandArgs,

    #[clap(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub enum CommandArgs {
    /// Compute the image tags for this pipeline run,
    /// one per line
    Tags(tags::TagsCommand),

    /// Assemble the OCI provenance labels for the image,
    /// one `key=value` per line
    Labels(labels::LabelsCommand),

    /// Print `true` when this run is allowed to push,
    /// `false` otherwise
    PushCheck(push_check::PushCheckCommand),
}
