//! Output file names.
//!
//! A session is named after its first lap start rendered with the filename
//! pattern. Names already planned for this run or present on disk get a
//! ` (2)`, ` (3)`, ... suffix; nothing is ever overwritten.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tcxsplit_types::{Session, TimePattern};

const EXTENSION: &str = "tcx";
const FALLBACK_STEM: &str = "activity";

pub fn file_stem(session: &Session, pattern: &TimePattern) -> String {
    let stem = match session.start_time() {
        Some(start) => pattern.format(&start),
        None => session.id.clone().unwrap_or_else(|| FALLBACK_STEM.to_string()),
    };
    sanitize(&stem)
}

/// Path separators cannot appear in a file name.
fn sanitize(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hands out unique paths inside one directory.
#[derive(Debug)]
pub struct NamePlanner {
    dir: PathBuf,
    taken: HashSet<PathBuf>,
}

impl NamePlanner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            taken: HashSet::new(),
        }
    }

    pub fn claim(&mut self, stem: &str) -> PathBuf {
        let mut attempt = 1;
        loop {
            let name = if attempt == 1 {
                format!("{}.{}", stem, EXTENSION)
            } else {
                format!("{} ({}).{}", stem, attempt, EXTENSION)
            };
            let path = self.dir.join(name);
            if !self.taken.contains(&path) && !path.exists() {
                self.taken.insert(path.clone());
                return path;
            }
            attempt += 1;
        }
    }
}

/// One path per session, in session order.
pub fn plan_paths(sessions: &[Session], pattern: &TimePattern, dir: &Path) -> Vec<PathBuf> {
    let mut planner = NamePlanner::new(dir);
    sessions
        .iter()
        .map(|session| planner.claim(&file_stem(session, pattern)))
        .collect()
}
