use crate::generator::{generate, BindingStyle, GenerateOptions, GenerationResult, ModelCategory};
use crate::logging::{init_logging_with_config, LogConfig};
use crate::model_dat::{load_model_dat, ModelRecord};
use crate::runtime_config::RuntimeConfig;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Command-line interface for the XSPEC binding generator
#[derive(Parser)]
#[command(name = "xspec-modelgen")]
#[command(about = "Generate pybind11 bindings for XSPEC models", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Write xspec.cxx for the additive and multiplicative models in a model.dat file
    Generate {
        /// Path to the XSPEC model.dat file
        #[arg(short, long)]
        model_dat: PathBuf,

        /// Existing directory to write xspec.cxx into
        #[arg(short, long)]
        output: PathBuf,

        /// Template to splice into (default: $XSPEC_MODELGEN_TEMPLATE or template/xspec.cxx)
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Print the generation summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the models in a model.dat file and whether they would be wrapped
    List {
        /// Path to the XSPEC model.dat file
        #[arg(short, long)]
        model_dat: PathBuf,

        /// Print the listing as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// One row of the `list` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub modeltype: String,
    pub language: String,
    pub funcname: String,
    pub npars: usize,
    /// Whether `generate` would emit a binding for the model
    pub wrapped: bool,
    /// Additive or multiplicative, but in a language with no binding;
    /// `generate` fails on such a model
    pub unsupported: bool,
}

impl From<&ModelRecord> for ModelSummary {
    fn from(model: &ModelRecord) -> Self {
        let selected = ModelCategory::from_model_type(&model.modeltype).is_some();
        let has_binding = BindingStyle::from_language(&model.language).is_some();
        ModelSummary {
            name: model.name.clone(),
            modeltype: model.modeltype.clone(),
            language: model.language.clone(),
            funcname: model.funcname.clone(),
            npars: model.npars(),
            wrapped: selected && has_binding,
            unsupported: selected && !has_binding,
        }
    }
}

/// Parse the command line, set up logging and run the command
///
/// # Errors
///
/// Returns the first error hit by the command; the caller decides how to
/// report it and exit.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    init_logging_with_config(&log_config)?;
    run(&cli)
}

/// Run an already parsed command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            model_dat,
            output,
            template,
            json,
        } => {
            let template = template
                .clone()
                .unwrap_or_else(|| RuntimeConfig::from_env().template);
            let opts = GenerateOptions::new(model_dat, output).with_template(template);
            let result = generate(&opts)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&result);
            }
            Ok(())
        }
        Commands::List { model_dat, json } => {
            let models = load_model_dat(model_dat)?;
            let rows: Vec<ModelSummary> = models.iter().map(ModelSummary::from).collect();
            if *json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_models(&rows);
            }
            Ok(())
        }
    }
}

fn print_summary(result: &GenerationResult) {
    println!(
        "✅ Generated {:?}: {} of {} models ({} additive, {} multiplicative)",
        result.outfile,
        result.models.len(),
        result.allmodels.len(),
        result.additive.len(),
        result.multiplicative.len()
    );
    println!(
        "   C++: {}  C: {}  Fortran: {}",
        result.cxx.len(),
        result.c.len(),
        result.f77.len()
    );
}

fn print_models(rows: &[ModelSummary]) {
    for row in rows {
        let marker = if row.wrapped {
            "✅"
        } else if row.unsupported {
            "❌"
        } else {
            "⚪"
        };
        println!(
            "{marker} {:<14} {:<4} {:<27} {:<16} {:>3}",
            row.name, row.modeltype, row.language, row.funcname, row.npars
        );
    }
    let wrapped = rows.iter().filter(|r| r.wrapped).count();
    let unsupported = rows.iter().filter(|r| r.unsupported).count();
    println!("{} models, {} wrapped", rows.len(), wrapped);
    if unsupported > 0 {
        println!("❌ {unsupported} models use a language with no binding; generate will fail");
    }
}
