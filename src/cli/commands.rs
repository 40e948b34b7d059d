//! CLI command implementations
//!
//! Every command that reads a config boots in the same order:
//! 1. Load and validate configuration
//! 2. Install the log subscriber
//! 3. Build the predicate registry (builtins only)
//! 4. Load schemas, then the default settings catalog if configured
//! 5. Verify that every referenced rule is registered
//!
//! Any failure during boot aborts before input is read.

use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::config::Config;
use crate::observability::{init_logging, Event};
use crate::predicates::PredicateRegistry;
use crate::rules::{ValidationFailure, ValidationOutcome};
use crate::schema::{SchemaLoader, SchemaValidator};
use crate::settings::{DefaultSettingsCatalog, SettingValues, SettingsValidator};

use super::args::Command;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{read_request, write_error, write_ok, write_rejection, write_response};

/// Everything a command needs after boot
struct Runtime {
    config: Config,
    registry: PredicateRegistry,
    schemas: SchemaLoader,
    settings: DefaultSettingsCatalog,
}

impl Runtime {
    fn boot(config_path: &Path) -> CliResult<Self> {
        let config = Config::load(config_path)?;
        init_logging(&config.log_level, config.log_format);
        tracing::info!(
            event = %Event::ConfigLoaded,
            path = %config_path.display(),
            "configuration loaded"
        );

        let registry = PredicateRegistry::with_builtins();

        let mut schemas = SchemaLoader::new(&config.schema_dir);
        schemas.load_all()?;
        schemas.verify_rules(&registry)?;

        let settings = match &config.settings_path {
            Some(path) => {
                let catalog = DefaultSettingsCatalog::load(path)?;
                catalog.verify_rules(&registry)?;
                catalog
            }
            None => DefaultSettingsCatalog::new(),
        };

        Ok(Self {
            config,
            registry,
            schemas,
            settings,
        })
    }
}

/// Parse arguments, run the command against stdin/stdout and report errors as JSON
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let result = run_command(cli.command, &mut input, &mut output);

    if let Err(e) = &result {
        if e.code() != &CliErrorCode::Rejected {
            write_error(&mut output, e.code_str(), e.message())?;
        }
    }
    result
}

/// Run the appropriate command based on CLI args
pub fn run_command<R: Read, W: Write>(
    cmd: Command,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    match cmd {
        Command::CheckRecord { config, entity } => check_record(&config, &entity, input, output),
        Command::CheckSetting { config } => check_setting(&config, input, output),
        Command::Verify { config } => verify(&config, output),
        Command::Rules => rules(output),
    }
}

/// Validate one record read from `input` against `entity`'s schema
pub fn check_record<R: Read, W: Write>(
    config_path: &Path,
    entity: &str,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let runtime = Runtime::boot(config_path)?;

    let Value::Object(record) = read_request(input)? else {
        return Err(CliError::invalid_input("record must be a JSON object"));
    };

    let validator = SchemaValidator::new(&runtime.schemas, &runtime.registry)
        .with_options(runtime.config.schema_options());
    report(validator.validate_schema(entity, &record), output)
}

/// Validate one `{key, value}` setting read from `input`
pub fn check_setting<R: Read, W: Write>(
    config_path: &Path,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let runtime = Runtime::boot(config_path)?;

    let setting: SettingValues = serde_json::from_value(read_request(input)?)?;

    let validator = SettingsValidator::new(&runtime.registry);
    report(validator.validate_settings(&runtime.settings, &setting), output)
}

/// Boot without reading input and summarise what was loaded
pub fn verify<W: Write>(config_path: &Path, output: &mut W) -> CliResult<()> {
    let runtime = Runtime::boot(config_path)?;

    let entities: Vec<&str> = runtime.schemas.entity_types().collect();
    write_response(
        output,
        json!({
            "entities": entities,
            "settings": runtime.settings.len(),
            "rules": runtime.registry.len(),
        }),
    )
}

/// List builtin rule names
pub fn rules<W: Write>(output: &mut W) -> CliResult<()> {
    let registry = PredicateRegistry::with_builtins();
    write_response(output, json!({ "rules": registry.names() }))
}

fn report<W: Write>(outcome: ValidationOutcome, output: &mut W) -> CliResult<()> {
    match outcome {
        Ok(()) => write_ok(output),
        Err(ValidationFailure::Rejected(errors)) => {
            write_rejection(output, &errors)?;
            Err(CliError::rejected(errors.len()))
        }
        Err(fatal @ ValidationFailure::RuleNotFound(_)) => {
            Err(CliError::rule_config(fatal.to_string()))
        }
    }
}
