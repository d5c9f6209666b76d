//! Job identity and on-disk layout.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::PipelineResult;

/// Length of the short job identifier, in hex characters.
const JOB_ID_LEN: usize = 8;

/// One processing job and its working directory.
///
/// All intermediate and final artifacts for a request live under
/// `<output_root>/<job_id>/`; result filenames are reported relative to the
/// output root as `<job_id>/<clip_name>`.
#[derive(Debug, Clone)]
pub struct Job {
    id: String,
    dir: PathBuf,
}

impl Job {
    /// Allocate a fresh job id and create its directory under `output_root`.
    pub fn create(output_root: &Path) -> PipelineResult<Self> {
        let id = new_job_id();
        let dir = output_root.join(&id);
        std::fs::create_dir_all(&dir)?;
        Ok(Self { id, dir })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a clip inside the job directory.
    pub fn clip_path(&self, clip_name: &str) -> PathBuf {
        self.dir.join(clip_name)
    }

    /// Result filename as reported to clients, relative to the output root.
    pub fn result_filename(&self, clip_name: &str) -> String {
        format!("{}/{}", self.id, clip_name)
    }
}

/// Short random job identifier: the leading hex of a v4 UUID.
fn new_job_id() -> String {
    let full = Uuid::new_v4().simple().to_string();
    full[..JOB_ID_LEN].to_string()
}
