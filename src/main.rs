use clap::Parser;
use imapfetch_build::commands::{CommandArgs, PipelineArgs, PipelineCommand};
use imapfetch_build_utils::logging::Logger;

fn main() {
    let args = PipelineArgs::parse();

    Logger::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    log::trace!("Parsed arguments: {args:#?}");

    match args.command {
        CommandArgs::Tags(mut command) => command.run(),
        CommandArgs::Labels(mut command) => command.run(),
        CommandArgs::PushCheck(mut command) => command.run(),
    }
}
