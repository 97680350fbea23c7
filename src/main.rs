use anyhow::Result;

use ack_apigatewayv2::{
    cmd::Command,
    config::Config,
    logger,
    logging::Logger,
    scheme,
};

fn main() -> Result<()> {
    let cmd = Command::init();

    let config = Config::load(cmd.config_load_option())?;

    if cmd.logging {
        Logger::init(&config.logging)?;
    }

    let scheme = scheme::register_types()?;

    let format = cmd.output_format(config.output.format);

    logger!(info, "run {:?}", cmd.subcommand);

    let output = cmd.subcommand.run(scheme, format)?;

    print!("{output}");

    Ok(())
}
