mod commands;
mod terminal;

use camscout_common::config::Config;
use camscout_core::controller::Controller;
use camscout_core::scanner::ProbeEngine;
use commands::{CommandLine, Commands, configure, console, run, scan, subnet};
use terminal::{logging, print, spinner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet);
    print::banner(commands.quiet);

    let cfg: Config = commands.to_config();
    let engine = ProbeEngine::from_config(&cfg)
        .on_host_found(|_, found| spinner::report_scan_progress(found));
    let ctl = Controller::from_config(&cfg).with_engine(engine);

    match commands.command {
        Commands::Subnet => subnet::subnet(&ctl, &cfg),
        Commands::Scan { subnet } => scan::scan(&ctl, subnet, &cfg).await.map(|_| ()),
        Commands::Configure { host } => configure::configure(&ctl, &host, &cfg).await.map(|_| ()),
        Commands::Run { host, subnet } => run::run(&ctl, host, subnet, &cfg).await,
        Commands::Console => console::console(&ctl, &cfg).await,
    }
}
