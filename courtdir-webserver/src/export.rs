//! Static export of all enumerated pages.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use courtdir_core::{
    entities::is_valid_slug,
    usecases::{self, PagePath},
};
use courtdir_db_sqlite::Connections;
use maud::Markup;
use rayon::prelude::*;
use thiserror::Error;

use crate::{render, view::MAIN_CSS, web::Cfg};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
    #[error("Refusing to export page with malformed path '{0}'")]
    MalformedPath(PagePath),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Pages and assets that have been written.
    pub written: usize,
    /// Enumerated pages that resolved to not found.
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Self {
            written,
            skipped,
            failed,
        } = self;
        write!(
            f,
            "{written} file(s) written, {skipped} page(s) skipped, {failed} failure(s)"
        )
    }
}

enum Outcome {
    Written,
    Skipped,
}

/// Render every enumerated page into `out_dir`.
///
/// Failures of individual pages are logged and counted, they
/// never abort the export of the remaining pages.
pub fn export_site(db: &Connections, cfg: &Cfg, out_dir: &Path) -> Result<ExportSummary, Error> {
    create_dir(out_dir)?;

    let paths = match db.shared() {
        Ok(conn) => usecases::enumerate_paths(&conn, cfg.visibility),
        Err(err) => {
            warn!("Database is unavailable, exporting the root page only: {err}");
            vec![PagePath::Root]
        }
    };
    info!("Exporting {} page(s) into {}", paths.len(), out_dir.display());

    let outcomes: Vec<_> = paths
        .par_iter()
        .map(|path| export_page(db, cfg, out_dir, path))
        .collect();

    let mut summary = ExportSummary::default();
    for (path, outcome) in paths.iter().zip(outcomes) {
        match outcome {
            Ok(Outcome::Written) => {
                debug!("Exported {path}");
                summary.written += 1;
            }
            Ok(Outcome::Skipped) => {
                info!("Skipped {path}: not found");
                summary.skipped += 1;
            }
            Err(err) => {
                error!("Failed to export {path}: {err}");
                summary.failed += 1;
            }
        }
    }

    let assets = [
        ("404.html", render::not_found(cfg).into_string()),
        ("main.css", MAIN_CSS.to_owned()),
    ];
    for (file_name, contents) in assets {
        match write_file(&out_dir.join(file_name), &contents) {
            Ok(()) => summary.written += 1,
            Err(err) => {
                error!("{err}");
                summary.failed += 1;
            }
        }
    }

    info!("Export finished: {summary}");
    Ok(summary)
}

fn export_page(db: &Connections, cfg: &Cfg, out_dir: &Path, path: &PagePath) -> Result<Outcome, Error> {
    let segments = path.segments();
    if !segments.iter().all(|s| is_valid_slug(s)) {
        return Err(Error::MalformedPath(path.clone()));
    }
    let Some(markup) = render_page(db, cfg, path) else {
        return Ok(Outcome::Skipped);
    };
    let dir = segments.iter().fold(out_dir.to_path_buf(), |dir, s| dir.join(s));
    create_dir(&dir)?;
    write_file(&dir.join("index.html"), &markup.into_string())?;
    Ok(Outcome::Written)
}

fn render_page(db: &Connections, cfg: &Cfg, path: &PagePath) -> Option<Markup> {
    match path {
        PagePath::Root => Some(render::root(db, cfg)),
        PagePath::Region { region } => render::region(db, cfg, region),
        PagePath::Venue { slug, .. } => render::venue(db, cfg, slug),
    }
}

fn create_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
