// src/batch_ops.rs

//! Parallel directory decryption.
//!
//! Every file runs its own independent pipeline (read, footer parse, KDF,
//! CTR pass, write), so jobs fan out across rayon's pool with no shared
//! state. One file failing (bad footer, I/O error) never aborts the
//! rest; the summary carries every per-file outcome.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::aliases::LogPassword;
use crate::decryptor::decrypt_file;
use crate::error::EndxError;
use crate::footer::FooterWarning;

/// One batch entry: where the ciphertext lives and where the plaintext goes.
pub type DecryptJob = (PathBuf, PathBuf);

/// Per-file batch result. `Ok` carries the footer warnings for display.
#[derive(Debug)]
pub struct JobOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<Vec<FooterWarning>, EndxError>,
}

/// Aggregate view over a finished batch.
#[derive(Debug)]
pub struct BatchSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Collect the `*.log` files directly inside `dir`, sorted by name.
///
/// Non-recursive on purpose: the producer writes a flat directory of log
/// files, and recursing would sweep up unrelated trees.
pub fn find_log_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, EndxError> {
    let entries = WalkDir::new(dir.as_ref())
        .max_depth(1)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| EndxError::Io(e.into()))?;

    let mut files: Vec<PathBuf> = entries
        .into_iter()
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|s| s.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("log"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Decrypt every job in parallel, writing each plaintext to its output
/// path. Failures stay confined to their own job.
pub fn decrypt_batch(jobs: &[DecryptJob], password: &LogPassword) -> BatchSummary {
    let outcomes = jobs
        .par_iter()
        .map(|(input, output)| {
            let result = decrypt_file(input, password).and_then(|decrypted| {
                std::fs::write(output, &decrypted.plaintext)?;
                Ok(decrypted.warnings)
            });
            JobOutcome {
                input: input.clone(),
                output: output.clone(),
                result,
            }
        })
        .collect();

    BatchSummary { outcomes }
}
