use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use realrate::core::log::init_logging;
use realrate::core::{InterestType, TimeUnit};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct InputArgs {
    /// Principal amount
    #[arg(short, long, allow_hyphen_values = true)]
    principal: Option<String>,

    /// Nominal annual interest rate, in percent
    #[arg(short, long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Annual inflation rate, in percent
    #[arg(short, long, allow_hyphen_values = true)]
    inflation: Option<String>,

    /// Length of the period
    #[arg(short, long, allow_hyphen_values = true)]
    time: Option<String>,

    /// Unit of the period: years or months
    #[arg(short, long)]
    unit: Option<TimeUnit>,

    /// Interest model: simple, compound or continuous
    #[arg(short = 'k', long = "interest-type")]
    interest_type: Option<InterestType>,

    /// Compounding periods per year (compound interest only)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    frequency: Option<u32>,

    /// Replace the inflation rate with the latest published figure
    #[arg(short, long)]
    live_inflation: bool,
}

impl From<InputArgs> for realrate::InputOverrides {
    fn from(args: InputArgs) -> realrate::InputOverrides {
        realrate::InputOverrides {
            principal: args.principal,
            rate: args.rate,
            inflation: args.inflation,
            time: args.time,
            time_unit: args.unit,
            interest_type: args.interest_type,
            compounding_frequency: args.frequency,
        }
    }
}

impl From<Commands> for realrate::AppCommand {
    fn from(cmd: Commands) -> realrate::AppCommand {
        match cmd {
            Commands::Calc { input, json } => realrate::AppCommand::Calculate {
                live_inflation: input.live_inflation,
                inputs: input.into(),
                json,
            },
            Commands::Compare { input } => realrate::AppCommand::Compare {
                live_inflation: input.live_inflation,
                inputs: input.into(),
            },
            Commands::Inflation => realrate::AppCommand::Inflation,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Calculate nominal and inflation-adjusted interest
    Calc {
        #[command(flatten)]
        input: InputArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare every accrual scheme for the same inputs
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Display the latest published inflation figure
    Inflation,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => realrate::cli::setup::setup(),
        Some(cmd) => realrate::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
