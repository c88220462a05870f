use clap::Parser;
use relay::cli::{
    actions, handle_completions, handle_config_init, serve, trigger, Cli, Commands,
    ConfigCommands,
};
use relay::registry::ActionRegistry;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Actions(args) => match serve::load_config_or_default(&args.config) {
            Ok(config) => ActionRegistry::from_config(&config)
                .map_err(Into::into)
                .and_then(|registry| actions::handle_actions(&args, &registry))
                .map(|output| println!("{}", output)),
            Err(e) => Err(e),
        },
        Commands::Trigger(args) => {
            let engine = serve::load_config_or_default(&args.config)
                .and_then(|config| serve::build_engine(&config));
            match engine {
                Ok(engine) => match trigger::handle_trigger(&args, &engine).await {
                    Ok(output) => {
                        println!("{}", output.rendered);
                        if output.success {
                            Ok(())
                        } else {
                            Err("dispatch failed".into())
                        }
                    }
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
