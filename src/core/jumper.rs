// Picks the directory to jump to
//
// Walks entries heaviest first. A consecutive-component match wins, then a
// basename close to the last needle, then the needles anywhere in the path.

use crate::core::matcher::{anywhere_re, consecutive_re, match_dist};
use crate::db::{Database, Entry};
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

// How similar a basename has to be to the last needle to count
const SIMILARITY_THRESHOLD: f32 = 0.6;

pub struct Jumper {
    db: Arc<Database>,
}

impl Jumper {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Best existing directory for `needles`, never `cwd` itself
    pub async fn jump(&self, needles: &[String], cwd: &Path) -> Result<Option<String>> {
        let Some(last) = needles.last() else {
            return Ok(None);
        };

        let candidates: Vec<Entry> = self
            .db
            .sorted()
            .await?
            .into_iter()
            .filter(|e| {
                let path = Path::new(&e.path);
                path.exists() && path != cwd
            })
            .collect();

        let consecutive = consecutive_re(needles)?;
        let anywhere = anywhere_re(needles)?;

        let found = candidates
            .iter()
            .find(|e| consecutive.is_match(&e.path))
            .or_else(|| {
                candidates
                    .iter()
                    .find(|e| match_dist(last, &e.path, SIMILARITY_THRESHOLD))
            })
            .or_else(|| candidates.iter().find(|e| anywhere.is_match(&e.path)));

        debug!(?needles, target = ?found.map(|e| &e.path), "jump lookup");
        Ok(found.map(|e| e.path.clone()))
    }
}
