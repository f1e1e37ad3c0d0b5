mod commands;
mod terminal;

use commands::CommandLine;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init();

    let root = commands.root_dir();
    debug!(root = %root.display(), "scanning for recordings");

    let processed = edffix_core::corrector::process(&root, |report| {
        print::file_report(&root, report);
    })?;

    debug!(processed, "run complete");
    Ok(())
}
