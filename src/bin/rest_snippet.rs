//! Command-line front end for the REST client core.
//!
//! Reads a request (and optionally a variable list) from JSON files, resolves
//! `{{variables}}`, and prints a code snippet or a shareable route.
//!
//! Output goes to stdout; warnings and errors go to stderr. Set `RUST_LOG` for
//! library logging.

use clap::Parser;
use rest_client_core::config::{load_config, CoreConfig};
use rest_client_core::models::{RequestData, Variable};
use rest_client_core::variables::{
    get_variable_preview, resolve_request, unresolved_variables, variables_from_json,
};
use rest_client_core::{encode_route, generate_code, Language};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(name = "rest-snippet", bin_name = "rest-snippet", version, about)]
struct Cli {
    /// Request JSON file ({ method, url, headers, body })
    #[clap(short, long, required_unless_present = "list_languages")]
    request: Option<PathBuf>,

    /// Variable list JSON file
    #[clap(short, long)]
    variables: Option<PathBuf>,

    /// Target language id (curl, fetch, xhr, nodejs, python, java, csharp, go)
    #[clap(short, long)]
    language: Option<String>,

    /// Settings JSON file with a "rest-client" object
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print the shareable route instead of code
    #[clap(long)]
    route: bool,

    /// List the supported languages and exit
    #[clap(long)]
    list_languages: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[rest-snippet] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    if cli.list_languages {
        return Ok(Language::all()
            .iter()
            .map(|lang| format!("{:<8} {}", lang.id(), lang.label()))
            .collect::<Vec<_>>()
            .join("\n"));
    }

    let config = read_config(cli.config.as_deref())?;

    let request_path = cli
        .request
        .as_deref()
        .ok_or_else(|| "--request is required".to_string())?;
    let request: RequestData = serde_json::from_str(&read_file(request_path)?)
        .map_err(|e| format!("{}: invalid request: {}", request_path.display(), e))?;

    let variables: Vec<Variable> = match &cli.variables {
        Some(path) => variables_from_json(&read_file(path)?),
        None => Vec::new(),
    };

    warn_unresolved(&request, &variables, &config);
    let resolved = resolve_request(&request, &variables);

    if cli.route {
        return encode_route(&resolved)
            .ok_or_else(|| "request URL is empty, nothing to share".to_string());
    }

    let language = cli
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    Ok(generate_code(&resolved, &language))
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn read_config(path: Option<&Path>) -> Result<CoreConfig, String> {
    let settings: Option<serde_json::Value> = match path {
        Some(path) => Some(
            serde_json::from_str(&read_file(path)?)
                .map_err(|e| format!("{}: invalid settings: {}", path.display(), e))?,
        ),
        None => None,
    };
    load_config(settings)
}

fn warn_unresolved(request: &RequestData, variables: &[Variable], config: &CoreConfig) {
    for text in request.output_fields() {
        let missing = unresolved_variables(text, variables);
        if missing.is_empty() {
            continue;
        }
        let preview = get_variable_preview(text, variables, Some(config.preview_max_length));
        eprintln!(
            "[rest-snippet] Warning: unresolved {} in: {}",
            missing
                .iter()
                .map(|name| format!("{{{{{}}}}}", name))
                .collect::<Vec<_>>()
                .join(", "),
            preview.resolved
        );
    }
}
