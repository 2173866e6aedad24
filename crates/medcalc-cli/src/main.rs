use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;

use medcalc_cli::{commands, config};
use medcalc_core::models::submission::{Patient, Session};
use medcalc_export::ExportFormat;

#[derive(Parser)]
#[command(name = "medcalc", version)]
#[command(about = "Kliniske scoreberegnere")]
struct Cli {
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available calculators
    List,
    /// Show a calculator's metadata and input fields
    Describe {
        /// Calculator type, e.g. gcs
        calculator: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate responses without scoring them
    Validate {
        calculator: String,
        /// Responses JSON file; stdin when omitted or "-"
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Validate and score responses
    Calculate {
        calculator: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Score responses and export the submission bundle
    Export {
        calculator: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// json, text, pdf or csv; defaults to the configured format
        #[arg(short, long)]
        format: Option<ExportFormat>,
        /// Tera template to render instead of the built-in report
        #[arg(long)]
        template: Option<PathBuf>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        patient: PatientArgs,
    },
    /// Score responses and submit the bundle to the outbox
    Submit {
        calculator: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Outbox directory; defaults to the configured one
        #[arg(long)]
        outbox: Option<PathBuf>,
        #[command(flatten)]
        patient: PatientArgs,
    },
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct PatientArgs {
    /// Patient name
    #[arg(long)]
    patient_name: Option<String>,
    /// Patient CPR number
    #[arg(long)]
    cpr: Option<String>,
    /// Patient age in years
    #[arg(long)]
    age: Option<u32>,
}

impl From<PatientArgs> for Patient {
    fn from(args: PatientArgs) -> Self {
        Patient {
            name: args.patient_name,
            cpr: args.cpr,
            age: args.age,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let session = Session::start();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::List => commands::list(&mut stdout)?,
        Commands::Describe { calculator, json } => {
            commands::describe(&mut stdout, &calculator, json)?
        }
        Commands::Validate { calculator, input } => {
            let responses = commands::read_responses(input.as_deref())?;
            if !commands::validate(&mut stdout, &calculator, &responses)? {
                return Err(eyre::eyre!("responses for {calculator} are invalid"));
            }
        }
        Commands::Calculate { calculator, input } => {
            let responses = commands::read_responses(input.as_deref())?;
            commands::calculate(&mut stdout, &calculator, &responses)?;
        }
        Commands::Export {
            calculator,
            input,
            format,
            template,
            output,
            patient,
        } => {
            let config = config::load_config()?;
            let responses = commands::read_responses(input.as_deref())?;
            let bundle =
                commands::build_bundle(&calculator, responses, patient.into(), &session, &config)?;
            let format = format.unwrap_or(config.export_format);
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(&path)?;
                    commands::export(&mut file, &bundle, format, template.as_deref())?;
                    tracing::info!(path = %path.display(), %format, "export written");
                }
                None => commands::export(&mut stdout, &bundle, format, template.as_deref())?,
            }
        }
        Commands::Submit {
            calculator,
            input,
            outbox,
            patient,
        } => {
            let config = config::load_config()?;
            let responses = commands::read_responses(input.as_deref())?;
            let bundle =
                commands::build_bundle(&calculator, responses, patient.into(), &session, &config)?;
            let receipt = commands::submit(&bundle, &config, outbox.as_deref()).await?;
            writeln!(stdout, "{}", receipt.reference)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config()?;
                writeln!(stdout, "# {}", config::config_path()?.display())?;
                writeln!(stdout, "{}", serde_json::to_string_pretty(&config)?)?;
            }
            ConfigAction::Init { force } => {
                let path = config::config_path()?;
                if path.exists() && !force {
                    return Err(eyre::eyre!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ));
                }
                let path = config::save_config(&config::MedcalcConfig::default())?;
                writeln!(stdout, "{}", path.display())?;
            }
        },
    }

    Ok(())
}
