use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xinzhi_core::DEFAULT_PORT;

mod commands;

#[derive(Parser)]
#[command(name = "xinzhi")]
#[command(about = "Battery R&D compliance assistant: patent risk analysis, knowledge search and AI chat", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Analyze a design proposal and print the result with its report
    Analyze {
        #[arg(long)]
        material: Option<String>,
        #[arg(long)]
        process: Option<String>,
        #[arg(long)]
        design: Option<String>,
        /// Wh/kg
        #[arg(long)]
        energy_density: Option<f64>,
        #[arg(long)]
        cycle_life: Option<f64>,
    },
    /// Search the battery knowledge base
    Search {
        query: String,
        /// One of materials, processes, standards, patents
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Ask the AI assistant one question
    Ask {
        message: String,
        #[arg(long, default_value = "")]
        context: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Analyze { material, process, design, energy_density, cycle_life } => {
            commands::analyze::run(material, process, design, energy_density, cycle_life)?;
        },
        Commands::Search { query, category } => commands::search::run(&query, category.as_deref())?,
        Commands::Ask { message, context } => commands::ask::run(&message, &context).await?,
    }

    Ok(())
}
