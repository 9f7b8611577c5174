use clap::Parser;
use gesture_script::ScriptOptions;

mod gesture_script;

#[derive(Clone, clap::Subcommand)]
enum ProgramTarget {
    /// Replay a tap/pinch script against an in-memory scene
    Script(ScriptOptions),
}

#[derive(clap::Parser)]
struct ProgramArgs {
    #[command(subcommand)]
    command: ProgramTarget,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = ProgramArgs::try_parse()?;

    match args.command {
        ProgramTarget::Script(options) => gesture_script::run(options)?,
    }

    Ok(())
}
