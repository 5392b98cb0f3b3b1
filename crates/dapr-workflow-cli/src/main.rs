//! Dapr workflow CLI: query and control workflow instances hosted by a Dapr sidecar.

use std::time::Duration;

use clap::{Parser, Subcommand};
use dapr_workflow_cli::commands;
use dapr_workflow_core::{ClientOptions, Protocol, DEFAULT_WORKFLOW_COMPONENT};

/// Dapr workflow CLI: lifecycle control for remote workflow instances
#[derive(Parser)]
#[command(name = "dapr-workflow", version, about = "Dapr workflow CLI: lifecycle control for remote workflow instances")]
pub struct Cli {
    /// Sidecar host
    #[arg(long, env = "DAPR_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Sidecar HTTP port
    #[arg(long, env = "DAPR_HTTP_PORT", default_value_t = 3500)]
    port: u16,

    /// Sidecar protocol: http or https
    #[arg(long, env = "DAPR_PROTOCOL", default_value = "http")]
    protocol: Protocol,

    /// API token sent as `dapr-api-token`
    #[arg(long, env = "DAPR_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Workflow component used when a command does not name one
    #[arg(long, env = "DAPR_WORKFLOW_COMPONENT", default_value = DEFAULT_WORKFLOW_COMPONENT)]
    default_component: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Workflow component for this command (overrides the default)
    #[arg(long, global = true)]
    component: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the status of a workflow instance
    Get {
        /// Workflow instance ID
        instance_id: String,
    },
    /// Terminate a workflow instance
    Terminate {
        /// Workflow instance ID
        instance_id: String,
    },
    /// Pause a workflow instance
    Pause {
        /// Workflow instance ID
        instance_id: String,
    },
    /// Resume a paused workflow instance
    Resume {
        /// Workflow instance ID
        instance_id: String,
    },
    /// Purge a workflow instance's state and history
    Purge {
        /// Workflow instance ID
        instance_id: String,
    },
    /// Start a new workflow instance
    Start {
        /// Registered workflow name
        workflow_name: String,
        /// Workflow input as a JSON string
        #[arg(long)]
        input: Option<String>,
        /// Instance ID to assign
        #[arg(long)]
        instance_id: Option<String>,
    },
    /// Raise an external event on a workflow instance
    RaiseEvent {
        /// Workflow instance ID
        instance_id: String,
        /// Event name
        event_name: String,
        /// Event payload as a JSON string
        #[arg(long)]
        input: Option<String>,
    },
}

impl Cli {
    fn client_options(&self) -> ClientOptions {
        ClientOptions {
            host: self.host.clone(),
            port: self.port,
            protocol: self.protocol,
            api_token: self.api_token.clone(),
            default_component: self.default_component.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dapr_workflow_core=warn,dapr_workflow_cli=info".into()),
        )
        .init();

    let result = if let Some(command) = cli.command.as_ref() {
        run(&cli, command).await
    } else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, command: &Commands) -> Result<(), String> {
    let options = cli.client_options();
    tracing::debug!("Using sidecar at {}", options.base_url());

    let client = commands::init_client(&options)?;
    let component = cli.component.as_deref();

    match command {
        Commands::Get { instance_id } => {
            commands::workflow::get(&client, instance_id, component).await
        }
        Commands::Terminate { instance_id } => {
            commands::workflow::terminate(&client, instance_id, component).await
        }
        Commands::Pause { instance_id } => {
            commands::workflow::pause(&client, instance_id, component).await
        }
        Commands::Resume { instance_id } => {
            commands::workflow::resume(&client, instance_id, component).await
        }
        Commands::Purge { instance_id } => {
            commands::workflow::purge(&client, instance_id, component).await
        }
        Commands::Start {
            workflow_name,
            input,
            instance_id,
        } => {
            let input = commands::parse_input(input.as_deref())?;
            commands::workflow::start(
                &client,
                workflow_name,
                input,
                instance_id.as_deref(),
                component,
            )
            .await
        }
        Commands::RaiseEvent {
            instance_id,
            event_name,
            input,
        } => {
            let input = commands::parse_input(input.as_deref())?;
            commands::workflow::raise_event(&client, instance_id, event_name, input, component)
                .await
        }
    }
}
