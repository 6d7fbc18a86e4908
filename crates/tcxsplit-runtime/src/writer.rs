//! All-or-nothing output.
//!
//! Every session is first written to a temporary file in its target
//! directory. Only when all of them are on disk are they moved into place,
//! each with a no-clobber rename. If a rename fails the files already moved
//! are removed again and the remaining temporaries are dropped.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tcxsplit_engine::write_session;
use tcxsplit_types::Session;
use tempfile::NamedTempFile;

use crate::{Error, Result};

fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn stage(path: &Path, session: &Session) -> Result<NamedTempFile> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(staging_dir(path)).map_err(write_error)?;
    {
        let mut out = BufWriter::new(&mut file);
        write_session(session, &mut out).map_err(write_error)?;
        out.flush().map_err(write_error)?;
    }
    file.as_file().sync_all().map_err(write_error)?;
    Ok(file)
}

fn rollback(committed: &[&PathBuf]) {
    for path in committed {
        if let Err(err) = std::fs::remove_file(path) {
            log::warn!("could not remove {} during rollback: {}", path.display(), err);
        }
    }
}

/// Write `sessions[i]` to `paths[i]` for every `i`, or write nothing.
pub fn write_all(sessions: &[Session], paths: &[PathBuf]) -> Result<()> {
    debug_assert_eq!(sessions.len(), paths.len());

    let mut staged = Vec::with_capacity(sessions.len());
    for (session, path) in sessions.iter().zip(paths) {
        staged.push((stage(path, session)?, path));
    }

    let mut committed: Vec<&PathBuf> = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        match file.persist_noclobber(path) {
            Ok(_) => {
                log::info!("wrote {}", path.display());
                committed.push(path);
            }
            Err(err) => {
                rollback(&committed);
                return Err(Error::Write {
                    path: path.clone(),
                    source: err.error,
                });
            }
        }
    }
    Ok(())
}
