//! Solve command implementation for the stopcover CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use stopcover_core::{Category, ProjectDocument, SolveRequest, SolveResponse, Solver};
use stopcover_fs::{open_utf8_file, write_utf8_file};
use stopcover_solver_greedy::GreedySolver;

use crate::{
    ARG_SOLVE_DEMAND_CATEGORY, ARG_SOLVE_DOCUMENT, ARG_SOLVE_MAX_WALK_DISTANCE, ARG_SOLVE_OUTPUT,
    CliError, ENV_SOLVE_DOCUMENT,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a project document exported by the campus editor. \
                 Without --output the solve response is printed as JSON; \
                 with it the document is written back with the solution \
                 recorded.",
    about = "Place stops for a project document"
)]
#[ortho_config(prefix = "STOPCOVER")]
pub(crate) struct SolveArgs {
    /// Path to a JSON project document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) document_path: Option<Utf8PathBuf>,
    /// Override the document's maximum walking distance.
    #[arg(long = ARG_SOLVE_MAX_WALK_DISTANCE, value_name = "metres")]
    #[serde(default)]
    pub(crate) max_walk_distance: Option<f64>,
    /// Category tag marking nodes that must be covered (default `hostel`).
    #[arg(long = ARG_SOLVE_DEMAND_CATEGORY, value_name = "tag")]
    #[serde(default)]
    pub(crate) demand_category: Option<String>,
    /// Write the solved document here instead of printing the response.
    #[arg(long = ARG_SOLVE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveConfig {
    /// Path to the project document.
    pub(crate) document_path: Utf8PathBuf,
    /// Threshold override, if any.
    pub(crate) max_walk_distance: Option<f64>,
    /// Demand category.
    pub(crate) demand_category: Category,
    /// Export destination, if any.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.document_path, ARG_SOLVE_DOCUMENT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match stopcover_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Build the request for `document`, applying the threshold override.
    fn request_for(&self, document: &ProjectDocument) -> SolveRequest {
        let mut request = document.to_request(self.demand_category.clone());
        if let Some(metres) = self.max_walk_distance {
            request.max_walk_distance = metres;
        }
        request
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let document_path = args.document_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_DOCUMENT,
            env: ENV_SOLVE_DOCUMENT,
        })?;
        let demand_category = args
            .demand_category
            .map(Category::from)
            .unwrap_or_default();

        Ok(Self {
            document_path,
            max_walk_distance: args.max_walk_distance,
            demand_category,
            output: args.output,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, _config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        Ok(Box::new(GreedySolver::default()))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let mut document = load_document(&config.document_path)?;
    let (request, response) = execute_solve(&config, &document, builder)?;

    match &config.output {
        Some(path) => {
            document.max_walk_distance = request.max_walk_distance;
            document.record(&response.solution);
            write_document(path, &document)
        }
        None => write_solve_response(writer, &response),
    }
}

fn execute_solve(
    config: &SolveConfig,
    document: &ProjectDocument,
    builder: &dyn SolveSolverBuilder,
) -> Result<(SolveRequest, SolveResponse), CliError> {
    let request = config.request_for(document);
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidSolveRequest {
            path: config.document_path.clone(),
            source,
        })?;
    let solver = builder.build(config)?;
    let response = solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    Ok((request, response))
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`ProjectDocument`] from disk.
pub(super) fn load_document(path: &Utf8Path) -> Result<ProjectDocument, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDocument {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseDocument {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(path: &Utf8Path, document: &ProjectDocument) -> Result<(), CliError> {
    let mut payload = document
        .to_json_string_pretty()
        .map_err(CliError::EncodeDocument)?;
    payload.push('\n');
    write_utf8_file(path, payload.as_bytes()).map_err(|source| CliError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })
}

fn write_solve_response(writer: &mut dyn Write, response: &SolveResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseSolveResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSolveOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSolveOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
