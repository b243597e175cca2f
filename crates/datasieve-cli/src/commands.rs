use super::args::{Cli, Commands, EndpointCommand};
use super::handlers;
use crate::config::{self, Config};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = data_dir.join("config.toml");
    let config = Config::load_from(&config_path)?;
    let endpoint = config::resolve_endpoint(cli.endpoint.as_deref(), &config);

    let Some(command) = cli.command else {
        show_guidance(&endpoint);
        return Ok(());
    };

    match command {
        Commands::Form => handlers::form::handle(&endpoint),

        Commands::Validate { file } => handlers::validate::handle(file.as_deref(), cli.format),

        Commands::Submit { file, select } => {
            handlers::submit::handle(&endpoint, file.as_deref(), &select, cli.format)
        }

        Commands::Fields => handlers::fields::handle(cli.format),

        Commands::Endpoint { command } => match command {
            EndpointCommand::Show => handlers::endpoint::show(&endpoint, cli.format),
            EndpointCommand::Set { url } => handlers::endpoint::set(&config_path, config, url),
        },
    }
}

fn show_guidance(endpoint: &str) {
    println!("datasieve - payload classification client\n");
    println!("Submissions go to: {}\n", endpoint);
    println!("Quick commands:");
    println!("  datasieve form                    # Interactive submission form");
    println!("  datasieve validate payload.json   # Check a payload without sending it");
    println!("  datasieve submit payload.json     # Submit and print the response");
    println!("  datasieve fields                  # List selectable response fields");
    println!("  datasieve endpoint set <URL>      # Point at a different service\n");
    println!("For more commands:");
    println!("  datasieve --help");
}
