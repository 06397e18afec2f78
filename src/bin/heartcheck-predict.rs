//! CLI utility that submits one patient record to the prediction service.

use heartcheck::config::{self, AppSettings, BackendConfig, ConfigError};
use heartcheck::egui_app::controller::SubmitFailure;
use heartcheck::egui_app::view_model;
use heartcheck::form::{FIELDS, FormState, SubmissionVector};
use heartcheck::prediction_gateway::PredictionClient;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };

    let backend = backend_config(
        options.url.as_deref(),
        config::load_or_default(),
        std::env::var(config::API_URL_ENV).ok(),
    )
    .map_err(|err| err.to_string())?;

    let mut form = FormState::new();
    for (name, value) in &options.fields {
        form.set_field(name, value.as_str())
            .map_err(|err| err.to_string())?;
    }

    let features = SubmissionVector::from_form(&form)
        .map_err(|err| describe(SubmitFailure::Validation(err)))?;
    let client = PredictionClient::new(&backend);
    let prediction = client
        .predict(&features)
        .map_err(|err| describe(SubmitFailure::Backend(err)))?;

    for panel in view_model::result_panels(&prediction) {
        println!("{}: {}", panel.model_label, panel.verdict);
    }
    Ok(())
}

/// `--url` takes precedence over the environment and the config file; an
/// unreadable config file is ignored when `--url` is given.
fn backend_config(
    cli_url: Option<&str>,
    settings: Result<AppSettings, ConfigError>,
    env_url: Option<String>,
) -> Result<BackendConfig, ConfigError> {
    match cli_url {
        Some(url) => {
            let settings = settings.unwrap_or_else(|err| {
                eprintln!("Ignoring configuration: {err}");
                AppSettings::default()
            });
            config::resolve_backend(&settings.backend, Some(url.to_string()))
        }
        None => config::resolve_backend(&settings?.backend, env_url),
    }
}

fn describe(failure: SubmitFailure) -> String {
    match std::error::Error::source(&failure) {
        Some(cause) => format!("{failure} ({cause})"),
        None => failure.to_string(),
    }
}

#[derive(Default)]
struct Options {
    url: Option<String>,
    fields: Vec<(String, String)>,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--url" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--url requires a value".to_string())?;
                options.url = Some(value.to_string());
            }
            "--field" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--field requires name=value".to_string())?;
                let (name, raw) = value
                    .split_once('=')
                    .ok_or_else(|| format!("Expected name=value, got '{value}'"))?;
                options.fields.push((name.trim().to_string(), raw.to_string()));
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }
    Ok(Some(options))
}

fn help_text() -> String {
    let names = FIELDS
        .iter()
        .map(|descriptor| descriptor.name)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "heartcheck-predict\n\n\
Usage: heartcheck-predict [--url <base-url>] [--field <name>=<value>]...\n\n\
Unset fields keep the form defaults; numeric fields start empty.\n\
Fields: {names}"
    )
}
