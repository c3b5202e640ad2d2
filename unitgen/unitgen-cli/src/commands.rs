//! Command implementations for the unitgen CLI.
//!
//! Inputs are read up front, generated in parallel on the rayon pool and then
//! emitted in argument order. A failing input is reported and counted but
//! never stops the others.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use unitgen_codegen::{GeneratedArtifact, TestGenerator};
use unitgen_core::{OutputFormat, UnitgenConfig};

use crate::output;

/// Input argument that reads Java source from stdin.
pub const STDIN_ARG: &str = "-";

/// Where a Java source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Effective settings of one `generate` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub inputs: Vec<InputSource>,
    /// Write `<ClassName>Test.java` files here instead of printing
    pub out_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub overwrite: bool,
}

impl GenerateOptions {
    /// Combine command-line flags with the loaded configuration. Flags win.
    pub fn resolve(
        inputs: &[String],
        out_dir: Option<PathBuf>,
        format: Option<OutputFormat>,
        force: bool,
        config: &UnitgenConfig,
    ) -> Self {
        Self {
            inputs: inputs.iter().map(|arg| InputSource::from_arg(arg)).collect(),
            out_dir: out_dir.or_else(|| config.output().directory.clone()),
            format: format.unwrap_or(config.output().format),
            overwrite: force || config.output().overwrite,
        }
    }
}

/// Result of writing one artifact into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The file existed and overwriting was not allowed
    Skipped(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub generated: usize,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: usize,
}

impl GenerateSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Run `generate` against the process stdin and stdout.
pub fn generate_tests(options: &GenerateOptions) -> Result<GenerateSummary> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    generate_with(options, stdin.lock(), &mut stdout.lock())
}

/// Run `generate` with explicit stdin and stdout handles.
pub fn generate_with<R: Read, W: Write>(
    options: &GenerateOptions,
    mut stdin: R,
    out: &mut W,
) -> Result<GenerateSummary> {
    let sources = read_sources(&options.inputs, &mut stdin);
    let generator = TestGenerator::new();

    let results: Vec<Result<GeneratedArtifact>> = sources
        .into_par_iter()
        .zip(options.inputs.par_iter())
        .map(|(source, input)| {
            let source = source?;
            generator
                .generate(&source)
                .with_context(|| format!("Failed to generate tests for {}", input))
        })
        .collect();

    let mut summary = GenerateSummary::default();
    for (input, result) in options.inputs.iter().zip(results) {
        let artifact = match result {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!(input = %input, "Skipping input");
                output::error(format!("{:#}", e));
                summary.failed += 1;
                continue;
            }
        };
        summary.generated += 1;

        let Some(dir) = &options.out_dir else {
            emit(out, &artifact, options.format)?;
            continue;
        };

        match write_artifact(dir, &artifact, options.overwrite) {
            Ok(WriteOutcome::Written(path)) => {
                output::success(format!("{} -> {}", input, path.display()));
                summary.written.push(path);
            }
            Ok(WriteOutcome::Skipped(path)) => {
                output::warning(format!(
                    "{} already exists, skipping (use --force to overwrite)",
                    path.display()
                ));
                summary.skipped.push(path);
            }
            Err(e) => {
                output::error(format!("{:#}", e));
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    info!(
        generated = summary.generated,
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        failed = summary.failed,
        "Generation finished"
    );
    Ok(summary)
}

fn read_sources<R: Read>(inputs: &[InputSource], stdin: &mut R) -> Vec<Result<String>> {
    let mut stdin_text: Option<String> = None;

    inputs
        .iter()
        .map(|input| match input {
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            InputSource::Stdin => {
                // stdin can only be drained once
                if let Some(text) = &stdin_text {
                    return Ok(text.clone());
                }
                let mut buf = String::new();
                stdin
                    .read_to_string(&mut buf)
                    .context("Failed to read source from stdin")?;
                stdin_text = Some(buf.clone());
                Ok(buf)
            }
        })
        .collect()
}

fn emit<W: Write>(out: &mut W, artifact: &GeneratedArtifact, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(artifact.test_suite_text.as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, artifact)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write an artifact's suite to `<dir>/<ClassName>Test.java`.
pub fn write_artifact(
    dir: &Path,
    artifact: &GeneratedArtifact,
    overwrite: bool,
) -> Result<WriteOutcome> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(artifact.file_name());
    if path.exists() && !overwrite {
        debug!("Keeping existing {}", path.display());
        return Ok(WriteOutcome::Skipped(path));
    }

    fs::write(&path, &artifact.test_suite_text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(WriteOutcome::Written(path))
}

/// Write a default configuration file.
pub fn config_init(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => UnitgenConfig::resolve_path()?,
    };

    if path.exists() && !force {
        bail!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    UnitgenConfig::default()
        .save_to_path(&path)
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;
    output::success(format!("Configuration written to {}", path.display()));
    Ok(path)
}

/// Print the effective configuration.
pub fn config_show(config: &UnitgenConfig, source: &Path) {
    output::header("unitgen configuration");

    let file = if source.exists() {
        source.display().to_string()
    } else {
        format!("{} (not found, using defaults)", source.display())
    };
    output::kv("file", file);
    output::kv("general.log_level", &config.general().log_level);
    output::kv("output.format", config.output().format);
    output::kv(
        "output.directory",
        config
            .output()
            .directory
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "<stdout>".to_string()),
    );
    output::kv("output.overwrite", config.output().overwrite);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("src/Calc.java"),
            InputSource::File(PathBuf::from("src/Calc.java"))
        );
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = UnitgenConfig::default();
        config.output_mut().directory = Some(PathBuf::from("generated"));
        config.output_mut().format = OutputFormat::Json;

        let from_config =
            GenerateOptions::resolve(&["-".to_string()], None, None, false, &config);
        assert_eq!(from_config.out_dir, Some(PathBuf::from("generated")));
        assert_eq!(from_config.format, OutputFormat::Json);
        assert!(!from_config.overwrite);

        let from_flags = GenerateOptions::resolve(
            &["A.java".to_string()],
            Some(PathBuf::from("out")),
            Some(OutputFormat::Text),
            true,
            &config,
        );
        assert_eq!(from_flags.out_dir, Some(PathBuf::from("out")));
        assert_eq!(from_flags.format, OutputFormat::Text);
        assert!(from_flags.overwrite);
    }

    #[test]
    fn test_stdin_is_read_once() {
        let inputs = vec![InputSource::Stdin, InputSource::Stdin];
        let mut stdin = "class A {}".as_bytes();
        let sources = read_sources(&inputs, &mut stdin);
        assert_eq!(sources.len(), 2);
        for source in sources {
            assert_eq!(source.unwrap(), "class A {}");
        }
    }
}
