//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use serde::Deserialize;

use divq_adapter_sim::SimulatorBackend;
use divq_core::{Candidate, CountingConfig, DivisionProperty, Multiset, PiMode, Readout};
use divq_hal::{BackendConfig, BackendFactory};

/// Marking width used when a problem file leaves it out.
const DEFAULT_MARKING_QUBITS: usize = 3;

/// Shots used by `--readout sampled` when neither the file nor `--shots` sets them.
const DEFAULT_SHOTS: u32 = 1024;

/// On-disk problem description (JSON or YAML).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    /// Multiset elements, in marking-register order.
    pub elements: Vec<u64>,
    /// Bit width of every element.
    #[serde(default = "default_marking_qubits")]
    pub marking_qubits: usize,
    /// Counting settings; CLI flags override individual fields.
    #[serde(default)]
    pub counting: CountingConfig,
}

fn default_marking_qubits() -> usize {
    DEFAULT_MARKING_QUBITS
}

/// Readout names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReadoutKind {
    /// Full-register basis state with the marking register at zero
    Basis,
    /// Counting register marginal
    Marginal,
    /// Seeded simulated measurements
    Sampled,
}

/// Problem and counting options shared by `search` and `count`.
#[derive(Debug, Clone, Args)]
pub struct ProblemArgs {
    /// Problem file (JSON or YAML); defaults to {1, 1, 1, 3, 3, 5}
    #[arg(short, long)]
    pub input: Option<String>,

    /// Width of the counting (phase) register
    #[arg(short = 'p', long)]
    pub counting_qubits: Option<usize>,

    /// How the counting register is read out
    #[arg(long, value_enum)]
    pub readout: Option<ReadoutKind>,

    /// Shots for sampled readout [default: 1024]
    #[arg(long)]
    pub shots: Option<u32>,

    /// RNG seed for sampled readout [default: 0]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use π = 3.14 to reproduce published estimates
    #[arg(long)]
    pub legacy_pi: bool,

    /// Simulator register limit
    #[arg(long, default_value = "20")]
    pub max_qubits: u64,
}

impl Default for ProblemArgs {
    /// Same values clap fills in when no flag is given.
    fn default() -> Self {
        Self {
            input: None,
            counting_qubits: None,
            readout: None,
            shots: None,
            seed: None,
            legacy_pi: false,
            max_qubits: 20,
        }
    }
}

impl ProblemArgs {
    /// Load the multiset and merge file settings with CLI overrides.
    pub fn resolve(&self) -> Result<(Multiset, CountingConfig)> {
        let (multiset, mut config) = match &self.input {
            Some(path) => {
                let problem = load_problem(path)?;
                let multiset = Multiset::new(problem.elements, problem.marking_qubits)
                    .with_context(|| format!("Invalid multiset in {path}"))?;
                (multiset, problem.counting)
            }
            None => (Multiset::example(), CountingConfig::default()),
        };

        if let Some(p) = self.counting_qubits {
            config.counting_qubits = p;
        }
        if let Some(kind) = self.readout {
            config.readout = match (kind, config.readout) {
                (ReadoutKind::Basis, _) => Readout::BasisState,
                (ReadoutKind::Marginal, _) => Readout::Marginal,
                (ReadoutKind::Sampled, sampled @ Readout::Sampled { .. }) => sampled,
                (ReadoutKind::Sampled, _) => Readout::Sampled {
                    shots: DEFAULT_SHOTS,
                    seed: 0,
                },
            };
        }
        match &mut config.readout {
            Readout::Sampled { shots, seed } => {
                if let Some(s) = self.shots {
                    *shots = s;
                }
                if let Some(s) = self.seed {
                    *seed = s;
                }
            }
            _ if self.shots.is_some() || self.seed.is_some() => {
                anyhow::bail!("--shots and --seed require sampled readout");
            }
            _ => {}
        }
        if self.legacy_pi {
            config.pi = PiMode::Legacy;
        }
        config.validate()?;

        Ok((multiset, config))
    }

    /// Simulator sized by `--max-qubits`.
    pub fn backend(&self) -> Result<SimulatorBackend> {
        let config =
            BackendConfig::new("simulator").with_extra("max_qubits", self.max_qubits.into());
        Ok(SimulatorBackend::from_config(config)?)
    }
}

/// Read a problem file; `.yaml`/`.yml` parse as YAML, everything else as JSON.
pub fn load_problem(path: &str) -> Result<ProblemFile> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .map_err(|e| anyhow::anyhow!("Parse error in {path}: {e}")),
        _ => serde_json::from_str(&source)
            .map_err(|e| anyhow::anyhow!("Parse error in {path}: {e}")),
    }
}

/// Print every evaluated candidate as a table.
pub fn print_trace(trace: &[Candidate]) {
    println!(
        "  {:>6}  {:>6}  {:>10}  {:>6}",
        style("weight").dim(),
        style("u").dim(),
        style("count").dim(),
        style("parity").dim()
    );
    for candidate in trace {
        let parity = if candidate.is_odd() {
            style("odd").green().bold()
        } else {
            style("even").dim()
        };
        println!(
            "  {:>6}  {:>6}  {:>10.4}  {:>6}",
            candidate.weight,
            format!("{:#04x}", candidate.u),
            candidate.count,
            parity
        );
    }
}

/// Print a search result as text or JSON.
pub fn print_result(result: &DivisionProperty, show_trace: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if show_trace {
        print_trace(&result.trace);
        println!();
    }
    if result.corrected {
        println!(
            "  {} odd cardinality: k = 1 reported as k = 0",
            style("note:").yellow()
        );
    }
    println!("{result}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_problem() {
        let (multiset, config) = ProblemArgs::default().resolve().unwrap();
        assert_eq!(multiset, Multiset::example());
        assert_eq!(config, CountingConfig::default());
    }

    #[test]
    fn test_load_json_problem() {
        let file = write_temp(
            ".json",
            r#"{"elements": [7, 7], "counting": {"pi": "legacy"}}"#,
        );
        let problem = load_problem(file.path().to_str().unwrap()).unwrap();
        assert_eq!(problem.elements, vec![7, 7]);
        assert_eq!(problem.marking_qubits, 3);
        assert_eq!(problem.counting.pi, PiMode::Legacy);
    }

    #[test]
    fn test_load_yaml_problem() {
        let file = write_temp(
            ".yaml",
            "elements: [1, 2, 3]\nmarking_qubits: 2\ncounting:\n  counting_qubits: 5\n",
        );
        let problem = load_problem(file.path().to_str().unwrap()).unwrap();
        assert_eq!(problem.elements, vec![1, 2, 3]);
        assert_eq!(problem.marking_qubits, 2);
        assert_eq!(problem.counting.counting_qubits, 5);
    }

    #[test]
    fn test_cli_flags_override_file() {
        let file = write_temp(
            ".json",
            r#"{"elements": [1], "counting": {"counting_qubits": 5}}"#,
        );
        let args = ProblemArgs {
            input: Some(file.path().to_str().unwrap().to_string()),
            counting_qubits: Some(7),
            readout: Some(ReadoutKind::Sampled),
            shots: Some(64),
            seed: Some(3),
            legacy_pi: true,
            ..Default::default()
        };
        let (_, config) = args.resolve().unwrap();
        assert_eq!(config.counting_qubits, 7);
        assert_eq!(config.readout, Readout::Sampled { shots: 64, seed: 3 });
        assert_eq!(config.pi, PiMode::Legacy);
    }

    #[test]
    fn test_sampling_flags_override_file_readout() {
        let file = write_temp(
            ".yaml",
            "elements: [1]\ncounting:\n  readout: {kind: sampled, shots: 512, seed: 7}\n",
        );
        let args = ProblemArgs {
            input: Some(file.path().to_str().unwrap().to_string()),
            shots: Some(64),
            ..Default::default()
        };
        let (_, config) = args.resolve().unwrap();
        assert_eq!(config.readout, Readout::Sampled { shots: 64, seed: 7 });

        // Naming the readout again keeps the file's sampling settings.
        let args = ProblemArgs {
            input: Some(file.path().to_str().unwrap().to_string()),
            readout: Some(ReadoutKind::Sampled),
            ..Default::default()
        };
        let (_, config) = args.resolve().unwrap();
        assert_eq!(config.readout, Readout::Sampled { shots: 512, seed: 7 });
    }

    #[test]
    fn test_sampled_readout_defaults() {
        let args = ProblemArgs {
            readout: Some(ReadoutKind::Sampled),
            ..Default::default()
        };
        let (_, config) = args.resolve().unwrap();
        assert_eq!(
            config.readout,
            Readout::Sampled {
                shots: DEFAULT_SHOTS,
                seed: 0
            }
        );
    }

    #[test]
    fn test_sampling_flags_without_sampled_readout_rejected() {
        let args = ProblemArgs {
            shots: Some(64),
            ..Default::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("require sampled readout"));
    }

    #[test]
    fn test_oversized_max_qubits_rejected() {
        let args = ProblemArgs {
            max_qubits: 63,
            ..Default::default()
        };
        assert!(args.backend().is_err());
    }

    #[test]
    fn test_invalid_multiset_is_reported() {
        let file = write_temp(".json", r#"{"elements": [9]}"#);
        let args = ProblemArgs {
            input: Some(file.path().to_str().unwrap().to_string()),
            ..Default::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Invalid multiset"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_temp(".json", r#"{"elements": [1], "bogus": true}"#);
        assert!(load_problem(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_problem("/nonexistent/problem.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
