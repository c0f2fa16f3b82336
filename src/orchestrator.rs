//! Orchestrator Module
//! Reads every file of the input directory and hands the charts to a session.

use crate::charts::{RenderError, RenderSession};
use crate::config::ViewerConfig;
use crate::data::SeriesReader;
use crate::report::{FileOutcome, RunReport};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Failed to list input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Chart title for a file: the name up to its first `.`.
pub fn derive_title(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

/// Hands out titles that are unique within one run.
#[derive(Debug, Default)]
struct TitleRegistry {
    seen: HashMap<String, usize>,
}

impl TitleRegistry {
    /// First use of a title keeps it, later uses get " (2)", " (3)", ...
    fn claim(&mut self, title: &str) -> String {
        let count = self.seen.entry(title.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            title.to_string()
        } else {
            format!("{} ({})", title, count)
        }
    }
}

/// Regular files of `dir`, sorted by file name.
pub fn list_input_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, OrchestratorError> {
    let read_dir_error = |source| OrchestratorError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }
        files.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Read every input file and prepare one figure per readable file.
///
/// A file that fails to load is recorded in the report and skipped; only a
/// failure to list the directory stops the run.
pub fn prepare_all<S: RenderSession>(
    config: &ViewerConfig,
    session: &mut S,
) -> Result<RunReport, OrchestratorError> {
    let files = list_input_files(&config.input_dir)?;
    info!(
        "Found {} files in {}",
        files.len(),
        config.input_dir.display()
    );

    let mut report = RunReport::new(&config.input_dir);
    let mut titles = TitleRegistry::default();

    for (file_name, path) in files {
        let title = titles.claim(derive_title(&file_name));

        match SeriesReader::read_csv(&path) {
            Ok(series) => {
                info!("Plotting '{}' ({} points)", title, series.len());
                session.prepare_figure(&title, &series);
                report.push(FileOutcome::plotted(&file_name, &title, series.len()));
            }
            Err(err) => {
                warn!("Skipping {}: {}", file_name, err);
                report.push(FileOutcome::failed(&file_name, &title, &err));
            }
        }
    }

    Ok(report)
}

/// Prepare every chart, then show them all in one blocking call.
pub fn plot_all_output<S: RenderSession>(
    config: &ViewerConfig,
    session: &mut S,
) -> Result<RunReport, OrchestratorError> {
    let report = prepare_all(config, session)?;

    info!(
        "Showing {} charts ({} files failed)",
        session.figure_count(),
        report.failures().count()
    );
    session.show(&report)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{RecordingSession, SessionEvent};
    use crate::report::{FailureKind, FileStatus};
    use tempfile::TempDir;

    fn input_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    fn config_for(dir: &TempDir) -> ViewerConfig {
        ViewerConfig::default().with_input_dir(dir.path())
    }

    #[test]
    fn errors_convert_into_anyhow_with_context() {
        use anyhow::Context;

        let result: Result<(), OrchestratorError> =
            Err(RenderError::Window("no display".to_string()).into());
        let err = result.context("Failed to plot out").unwrap_err();

        assert_eq!(err.to_string(), "Failed to plot out");
        assert_eq!(
            err.root_cause().to_string(),
            "Failed to open chart window: no display"
        );
    }

    #[test]
    fn title_is_name_before_first_dot() {
        assert_eq!(derive_title("trial.csv"), "trial");
        assert_eq!(derive_title("trial.data.csv"), "trial");
        assert_eq!(derive_title("noext"), "noext");
        assert_eq!(derive_title(".hidden"), "");
    }

    #[test]
    fn duplicate_titles_get_a_suffix() {
        let mut titles = TitleRegistry::default();
        assert_eq!(titles.claim("a"), "a");
        assert_eq!(titles.claim("b"), "b");
        assert_eq!(titles.claim("a"), "a (2)");
        assert_eq!(titles.claim("a"), "a (3)");
    }

    #[test]
    fn every_file_is_charted_before_show() {
        let dir = input_dir(&[
            ("run1.csv", "x,y\n1,10\n2,20\n3,15\n"),
            ("run2.csv", "x,y\n0,0\n"),
            ("run3.csv", "x,y\n"),
        ]);
        let mut session = RecordingSession::default();

        let report = plot_all_output(&config_for(&dir), &mut session).unwrap();

        assert_eq!(report.plotted_count(), 3);
        assert_eq!(
            session.events,
            vec![
                SessionEvent::Figure {
                    title: "run1".to_string(),
                    points: 3
                },
                SessionEvent::Figure {
                    title: "run2".to_string(),
                    points: 1
                },
                SessionEvent::Figure {
                    title: "run3".to_string(),
                    points: 0
                },
                SessionEvent::Show { figures: 3 },
            ]
        );
    }

    #[test]
    fn run1_series_reaches_the_session() {
        let dir = input_dir(&[("run1.csv", "x,y\n1,10\n2,20\n3,15\n")]);
        let mut session = RecordingSession::default();

        plot_all_output(&config_for(&dir), &mut session).unwrap();

        let figure = &session.figures[0];
        assert_eq!(figure.title, "run1");
        assert_eq!(figure.series.x(), &[1.0, 2.0, 3.0]);
        assert_eq!(figure.series.y(), &[10.0, 20.0, 15.0]);
    }

    #[test]
    fn files_are_processed_in_name_order() {
        let dir = input_dir(&[
            ("c.csv", "x,y\n1,1\n"),
            ("a.csv", "x,y\n1,1\n"),
            ("b.csv", "x,y\n1,1\n"),
        ]);
        let mut session = RecordingSession::default();

        prepare_all(&config_for(&dir), &mut session).unwrap();

        let titles: Vec<&str> = session.figures.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn bad_file_does_not_hide_the_others() {
        let dir = input_dir(&[
            ("bad.csv", "x,y\na,b\n"),
            ("good.csv", "x,y\n1,2\n"),
        ]);
        let mut session = RecordingSession::default();

        let report = plot_all_output(&config_for(&dir), &mut session).unwrap();

        assert_eq!(session.figure_count(), 1);
        assert_eq!(session.figures[0].title, "good");
        assert!(report.has_failures());

        let failed: Vec<&FileOutcome> = report.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].file_name, "bad.csv");
        assert!(matches!(
            failed[0].status,
            FileStatus::Failed {
                kind: FailureKind::Parse,
                ..
            }
        ));
    }

    #[test]
    fn colliding_titles_stay_separate_charts() {
        let dir = input_dir(&[("a.csv", "x,y\n1,1\n"), ("a.log.csv", "x,y\n2,2\n")]);
        let mut session = RecordingSession::default();

        prepare_all(&config_for(&dir), &mut session).unwrap();

        let titles: Vec<&str> = session.figures.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "a (2)"]);
    }

    #[test]
    fn subdirectories_are_skipped() {
        let dir = input_dir(&[("a.csv", "x,y\n1,1\n")]);
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = list_input_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "a.csv");
    }

    #[test]
    fn missing_directory_aborts_before_show() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::default().with_input_dir(dir.path().join("absent"));
        let mut session = RecordingSession::default();

        let err = plot_all_output(&config, &mut session).unwrap_err();

        assert!(matches!(err, OrchestratorError::ReadDir { .. }));
        assert!(session.events.is_empty());
    }

    #[test]
    fn empty_directory_still_shows() {
        let dir = input_dir(&[]);
        let mut session = RecordingSession::default();

        let report = plot_all_output(&config_for(&dir), &mut session).unwrap();

        assert!(report.outcomes.is_empty());
        assert_eq!(session.events, vec![SessionEvent::Show { figures: 0 }]);
    }
}
