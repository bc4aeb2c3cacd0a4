//! CLI command implementations
//!
//! `serve` boot sequence:
//! 1. Configuration load
//! 2. Store, row source and service assembly
//! 3. Startup load (when enabled; failure is fatal)
//! 4. HTTP activation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::criteria::SearchParams;
use crate::http_server::HttpServer;
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::search::{PageLimits, SearchService};
use crate::store::MemoryStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point; the only function main.rs calls
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Query { config } => query(config),
        Command::Explain { config } => explain(config),
        Command::Load { config } => load(config),
    }
}

/// Loads the named config, or defaults plus `CSV_URL` when none is given
fn resolve_config(path: Option<PathBuf>) -> CliResult<Config> {
    let config = match path {
        Some(path) => Config::load(&path)?,
        None => Config::from_env()?,
    };
    Ok(config)
}

/// Assembles a service over a fresh in-memory store
pub fn build_service(config: &Config) -> SearchService {
    SearchService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(config.source.row_source()),
        Arc::new(MetricsRegistry::new()),
    )
    .with_page_limits(PageLimits {
        default_size: config.default_page_size,
        max_size: config.max_page_size,
    })
}

/// Runs one search request against the service
pub fn execute_query(service: &SearchService, request: Value) -> CliResult<Value> {
    let params: SearchParams = serde_json::from_value(request)?;
    let criteria = service.prepare(params)?;
    let page = service.search(&criteria)?;
    Ok(serde_json::to_value(page)?)
}

/// Builds the explain output for one search request
pub fn execute_explain(service: &SearchService, request: Value) -> CliResult<Value> {
    let params: SearchParams = serde_json::from_value(request)?;
    let criteria = service.prepare(params)?;
    let plan = service.explain(&criteria)?;

    let mut value = serde_json::to_value(&plan)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("text".into(), Value::String(plan.to_string()));
    }
    Ok(value)
}

/// Starts the HTTP service
pub fn serve(config_path: &Path) -> CliResult<()> {
    Logger::event(Event::StartupBegin, &[]);

    let config = Config::load(config_path)?;
    Logger::event(
        Event::ConfigLoaded,
        &[
            ("config", config_path.display().to_string().as_str()),
            ("source", config.source.local_path.display().to_string().as_str()),
        ],
    );

    let service = build_service(&config);

    if config.startup_load_enabled {
        if let Err(e) = service.load_from_source() {
            Logger::fatal(
                "STARTUP_LOAD_FAILED",
                &[("code", e.code()), ("reason", e.to_string().as_str())],
            );
            return Err(CliError::boot_failed(format!("Startup load failed: {}", e)));
        }
    }

    let server = HttpServer::new(&config.server, service)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Logger::event(Event::ShutdownComplete, &[]);
    Ok(())
}

/// One-shot search: stdin JSON in, page JSON out
pub fn query(config_path: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(config_path)?;
    let service = build_service(&config);
    let request = read_request()?;

    respond(execute_query(&service, request))
}

/// One-shot explain: stdin JSON in, plan JSON out
pub fn explain(config_path: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(config_path)?;
    let service = build_service(&config);
    let request = read_request()?;

    respond(execute_explain(&service, request))
}

/// Loads the source into a fresh store; validates a source end to end
pub fn load(config_path: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(config_path)?;
    let service = build_service(&config);

    let outcome = service
        .load_from_source()
        .map_err(CliError::from)
        .and_then(|report| Ok(serde_json::to_value(report)?));
    respond(outcome)
}

/// Prints the envelope; errors are printed and also returned
fn respond(outcome: CliResult<Value>) -> CliResult<()> {
    match outcome {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::cli::errors::CliErrorCode;

    const CSV: &str = "\
Transaction ID,Date,Customer Name,Phone Number,Gender,Age,Customer Region,Quantity
T1,2023-01-10,Asha Rao,9000000001,Female,31,North,4
T2,2023-02-11,Ravi Kumar,9000000002,Male,45,South,2
T3,2023-03-12,Meera Rao,9000000003,Female,29,North,7
";

    fn config_with_csv() -> (tempfile::NamedTempFile, Config) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let mut config = Config::default();
        config.source.local_path = file.path().to_path_buf();
        (file, config)
    }

    #[test]
    fn test_execute_query_scans_source() {
        let (_file, config) = config_with_csv();
        let service = build_service(&config);

        let data = execute_query(
            &service,
            serde_json::json!({"q": "rao", "sortBy": "quantity"}),
        )
        .unwrap();

        assert_eq!(data["totalElements"], 2);
        assert_eq!(data["backend"], "scan");
        assert_eq!(data["content"][0]["transactionId"], "T3");
    }

    #[test]
    fn test_execute_query_invalid_date() {
        let (_file, config) = config_with_csv();
        let service = build_service(&config);

        let err = execute_query(&service, serde_json::json!({"startDate": "2023/01/01"}))
            .unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::SearchFailed);
        assert!(err.message().contains("RETAIL_INVALID_DATE"));
    }

    #[test]
    fn test_execute_query_bad_json_shape() {
        let (_file, config) = config_with_csv();
        let service = build_service(&config);

        let err = execute_query(&service, serde_json::json!({"minAge": "old"})).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidInput);
    }

    #[test]
    fn test_execute_explain() {
        let (_file, config) = config_with_csv();
        let service = build_service(&config);

        let data = execute_explain(
            &service,
            serde_json::json!({"customerRegion": ["North"], "minAge": 30}),
        )
        .unwrap();

        assert_eq!(data["predicate"], "customer_region IN ('North') AND age >= 30");
        assert_eq!(data["backend"], "scan");
        assert!(data["text"].as_str().unwrap().contains("=== EXPLAIN PLAN ==="));
    }

    #[test]
    fn test_load_then_store_backend() {
        let (_file, config) = config_with_csv();
        let service = build_service(&config);

        let report = service.load_from_source().unwrap();
        assert_eq!(report.loaded, 3);

        let data = execute_query(&service, serde_json::json!({})).unwrap();
        assert_eq!(data["backend"], "store");
        // Newest first by default
        assert_eq!(data["content"][0]["transactionId"], "T3");
    }
}
