//! Defines the endpoint serving the most recently rendered chart artifact of
//! a given type.
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use axum::{
    extract::{FromRef, Path as UrlPath, State},
    http::header,
    response::IntoResponse,
};

use crate::{AppState, Error};

/// The state needed to serve chart artifacts.
#[derive(Debug, Clone)]
pub struct LatestPlotState {
    /// The directory that chart artifacts are written to.
    pub plot_dir: PathBuf,
}

impl FromRef<AppState> for LatestPlotState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            plot_dir: state.plot_dir.clone(),
        }
    }
}

/// A route handler serving the most recently modified artifact whose file
/// name contains `plot_type`, e.g. "bar" matches `stacked_bar.html`.
///
/// Responds with a structured `404 Not Found` when the plot directory does
/// not exist or holds no matching file.
pub async fn latest_plot_endpoint(
    State(state): State<LatestPlotState>,
    UrlPath(plot_type): UrlPath<String>,
) -> Result<impl IntoResponse, Error> {
    let path = find_latest_plot(&state.plot_dir, &plot_type)?;
    let contents = fs::read(&path).map_err(|error| Error::ArtifactIo(error.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        contents,
    ))
}

/// Find the most recently modified file in `plot_dir` whose name contains
/// `plot_type`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if the directory does not exist or no file matches,
/// - or [Error::ArtifactIo] if the directory could not be scanned.
fn find_latest_plot(plot_dir: &Path, plot_type: &str) -> Result<PathBuf, Error> {
    let entries = fs::read_dir(plot_dir).map_err(|_| Error::NotFound)?;

    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in entries {
        let entry = entry.map_err(|error| Error::ArtifactIo(error.to_string()))?;

        if !entry.file_name().to_string_lossy().contains(plot_type) {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|metadata| metadata.modified())
            .map_err(|error| Error::ArtifactIo(error.to_string()))?;

        match &latest {
            Some((newest, _)) if *newest >= modified => {}
            _ => latest = Some((modified, entry.path())),
        }
    }

    latest.map(|(_, path)| path).ok_or(Error::NotFound)
}
