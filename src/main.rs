use anyhow::Context;
use fable::cli::output::Output;
use fable::cli::{AgentCommands, Cli, Commands, ToolCommands};
use fable::utils::config::FableConfig;
use fable::{AgentRegistryBuilder, ToolRegistry};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let config = FableConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let tool_registry = Arc::new(ToolRegistry::with_default_tools());
    let agent_registry = AgentRegistryBuilder::new()
        .with_tool_registry(Arc::clone(&tool_registry))
        .with_demo_agents()
        .from_config(&config)
        .build();

    match cli.command {
        Commands::Tool(ToolCommands::List) => {
            output.header("Registered tools");
            let mut definitions = tool_registry.get_tool_definitions();
            definitions.sort_by(|a, b| a.name.cmp(&b.name));
            for def in definitions {
                output.item(&def.name, &def.description);
            }
        }

        Commands::Tool(ToolCommands::Call { name, args }) => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("parsing --args as JSON")?;
            match tool_registry.execute(&name, args).await {
                Ok(value) => output.json(&value),
                Err(e) => {
                    output.error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }

        Commands::Agent(AgentCommands::List) => {
            output.header("Configured agents");
            let mut names = agent_registry.agent_names();
            names.sort();
            for name in names {
                if let Some(agent) = agent_registry.get(&name) {
                    output.item(&agent.name, &agent.description);
                }
            }
        }

        Commands::Agent(AgentCommands::Show { name }) => match agent_registry.get(&name) {
            Some(agent) => {
                output.field("name", &agent.name);
                output.field("model", &agent.model);
                output.field("description", &agent.description);
                output.field("instruction", &agent.instruction);
                output.field("tools", &agent.tools.join(", "));
                output.header("\nTool definitions");
                for def in agent_registry.tool_definitions_for(&name)? {
                    output.item(&def.name, &def.description);
                }
            }
            None => {
                output.error(&format!("Agent not found: {}", name));
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
