// src/bin/endx_decrypt.rs

//! Command-line front end for Endx log decryption.
//!
//! Thin orchestration over the library: argument parsing, no-echo password
//! prompting, output path naming, and per-file progress reporting. All the
//! actual work happens in `endx_decrypt::decrypt_file` / `decrypt_batch`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use endx_decrypt::aliases::LogPassword;
use endx_decrypt::{decrypt_batch, decrypt_file, find_log_files, EndxError};

#[derive(Parser, Debug)]
#[command(
    name = "endx-decrypt",
    version,
    about = "Decrypt AES-CTR encrypted Endx log files"
)]
struct Cli {
    /// Input log file (single-file mode)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Input directory of *.log files (batch mode, requires --output)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Output file (single mode) or output directory (batch mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decryption password; prompted without echo when omitted
    #[arg(short, long)]
    password: Option<String>,
}

enum Mode {
    Single {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    Batch {
        dir: PathBuf,
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Usage errors are decided before the password prompt ever appears.
    let mode = match (cli.file, cli.dir) {
        (Some(_), Some(_)) => bail!("--file and --dir are mutually exclusive"),
        (None, None) => bail!("one of --file or --dir must be given"),
        (Some(input), None) => Mode::Single {
            input,
            output: cli.output,
        },
        (None, Some(dir)) => Mode::Batch {
            dir,
            out_dir: cli
                .output
                .context("batch mode (--dir) requires --output")?,
        },
    };

    let password = match cli.password {
        Some(p) => p,
        None => rpassword::prompt_password("Enter decryption password: ")
            .context("failed to read password")?,
    };
    if password.is_empty() {
        return Err(EndxError::EmptyPassword.into());
    }
    let password = LogPassword::new(password);

    match mode {
        Mode::Single { input, output } => run_single(&input, output, &password),
        Mode::Batch { dir, out_dir } => run_batch(&dir, &out_dir, &password),
    }
}

fn run_single(input: &Path, output: Option<PathBuf>, password: &LogPassword) -> Result<ExitCode> {
    let output = output.unwrap_or_else(|| default_output_path(input));

    let decrypted = decrypt_file(input, password)
        .with_context(|| format!("failed to decrypt {}", input.display()))?;
    for w in &decrypted.warnings {
        warn!("{}: {w}", input.display());
    }

    std::fs::write(&output, &decrypted.plaintext)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "decrypted {} -> {} ({} bytes)",
        input.display(),
        output.display(),
        decrypted.plaintext.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_batch(dir: &Path, out_dir: &Path, password: &LogPassword) -> Result<ExitCode> {
    let inputs =
        find_log_files(dir).with_context(|| format!("failed to scan {}", dir.display()))?;
    if inputs.is_empty() {
        warn!("no .log files found in {}", dir.display());
        return Ok(ExitCode::SUCCESS);
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let jobs: Vec<(PathBuf, PathBuf)> = inputs
        .into_iter()
        .map(|input| {
            let output = out_dir.join(batch_output_name(&input));
            (input, output)
        })
        .collect();

    info!("decrypting {} log file(s)", jobs.len());
    let summary = decrypt_batch(&jobs, password);

    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(warnings) => {
                for w in warnings {
                    warn!("{}: {w}", outcome.input.display());
                }
                info!(
                    "decrypted {} -> {}",
                    outcome.input.display(),
                    outcome.output.display()
                );
            }
            Err(e) => warn!("failed {}: {e}", outcome.input.display()),
        }
    }

    info!(
        "done: {}/{} file(s) decrypted",
        summary.succeeded(),
        summary.outcomes.len()
    );

    if summary.failed() > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// `app.log` -> `app.decrypt.log`, next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("decrypted");
    let name = match input.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{stem}.decrypt.{ext}"),
        None => format!("{stem}.decrypt"),
    };
    input.with_file_name(name)
}

/// `app.log` -> `app_decrypted.txt` inside the batch output directory.
fn batch_output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("log");
    format!("{stem}_decrypted.txt")
}
