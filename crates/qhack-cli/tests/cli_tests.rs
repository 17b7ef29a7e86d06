//! CLI parsing and end-to-end tests.
//!
//! Argument parsing is checked via clap `try_parse_from` on an equivalent
//! definition, since the binary's own types are not importable. The
//! end-to-end tests run the built `qhack` binary with stdin input.

use std::io::Write;
use std::process::{Command, Output, Stdio};

// ============================================================================
// End-to-end runs
// ============================================================================

fn run_qhack(args: &[&str], stdin: &str) -> Output {
    run_qhack_with_env(args, stdin, &[])
}

fn run_qhack_with_env(args: &[&str], stdin: &str, env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qhack"));
    cmd.args(args)
        .env_remove("QHACK_TOPOLOGY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        cmd.env(key, value);
    }
    let mut child = cmd.spawn().expect("failed to spawn qhack");
    // The child may exit before reading stdin (e.g. on a config error).
    if let Err(e) = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
    {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "failed to write stdin: {e}");
    }
    child.wait_with_output().expect("failed to wait for qhack")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

mod swaps_tests {
    use super::*;

    #[test]
    fn test_reference_answers() {
        for (input, expected) in [
            ("0,1", "0\n"),
            ("1,4", "0\n"),
            ("0,2", "2\n"),
            ("0,5", "4\n"),
            ("5,8", "2\n"),
            ("2,6\n", "6\n"),
        ] {
            let output = run_qhack(&["swaps"], input);
            assert!(output.status.success(), "failed on {input}");
            assert_eq!(stdout(&output), expected, "wrong answer for {input}");
        }
    }

    #[test]
    fn test_explain_keeps_stdout_clean() {
        let output = run_qhack(&["swaps", "--explain"], "0,5");
        assert!(output.status.success());
        assert_eq!(stdout(&output), "4\n");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("round 3"));
        assert!(stderr.contains("0 -> 1 -> 4 -> 5"));
    }

    #[test]
    fn test_json_report() {
        let output = run_qhack(&["swaps", "--format", "json"], "5,8");
        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(report["control"], 5);
        assert_eq!(report["target"], 8);
        assert_eq!(report["swaps"], 2);
        assert_eq!(report["route"], serde_json::json!([5, 4, 8]));
    }

    #[test]
    fn test_unknown_format_fails() {
        let output = run_qhack(&["swaps", "-f", "yaml"], "0,1");
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown output format"));
    }

    #[test]
    fn test_invalid_qubit_fails() {
        let output = run_qhack(&["swaps"], "0,9");
        assert!(!output.status.success());
        assert!(stdout(&output).is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("not part of the topology"));
    }

    #[test]
    fn test_malformed_input_fails() {
        let output = run_qhack(&["swaps"], "0;5");
        assert!(!output.status.success());
    }

    #[test]
    fn test_topology_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "preset: linear-6").unwrap();
        let path = file.path().to_str().unwrap();

        let output = run_qhack(&["swaps", "--topology", path], "0,5");
        assert!(output.status.success());
        assert_eq!(stdout(&output), "8\n");
    }

    #[test]
    fn test_topology_from_env() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"preset": "star-5"}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let output = run_qhack_with_env(&["swaps"], "1,2", &[("QHACK_TOPOLOGY", path)]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "2\n");
    }

    #[test]
    fn test_oversized_preset_fails() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "preset: full-100000").unwrap();
        let path = file.path().to_str().unwrap();

        let output = run_qhack(&["swaps", "-t", path], "0,1");
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("at most 1024"));
    }

    #[test]
    fn test_disconnected_topology_fails() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "adjacency:\n  0: [1]\n  1: [0]\n  2: []").unwrap();
        let path = file.path().to_str().unwrap();

        let output = run_qhack(&["swaps", "-t", path], "0,2");
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("unreachable"));
    }
}

mod measurements_tests {
    use super::*;

    #[test]
    fn test_compression_ratio() {
        let output = run_qhack(&["measurements"], "4,Y,I,Z,I,Y,X,I,I,Y,I,X,I,I,I,I,Z\n");
        assert!(output.status.success());
        assert_eq!(stdout(&output), "0.5\n");
    }

    #[test]
    fn test_no_compression_prints_python_float() {
        let output = run_qhack(&["measurements"], "2,X,X,Y,Y,Z,Z");
        assert!(output.status.success());
        assert_eq!(stdout(&output), "0.0\n");
    }

    #[test]
    fn test_groups_listing() {
        let output = run_qhack(&["measurements", "--groups"], "2,X,I,I,Z");
        assert!(output.status.success());
        assert_eq!(stdout(&output), "0.5\n");
        assert!(String::from_utf8_lossy(&output.stderr).contains("XZ"));
    }

    #[test]
    fn test_json_plan() {
        let output = run_qhack(&["measurements", "-f", "json"], "2,X,I,I,Z,Y,Y");
        assert!(output.status.success());
        let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(summary["words"], serde_json::json!(["XI", "IZ", "YY"]));
        assert_eq!(summary["groups"][0]["setting"], "XZ");
        assert_eq!(summary["groups"][0]["members"], serde_json::json!([0, 1]));
        assert_eq!(summary["groups"][1]["setting"], "YY");
        let ratio = summary["compression_ratio"].as_f64().unwrap();
        assert!((ratio - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_empty_hamiltonian_fails() {
        let output = run_qhack(&["measurements"], "3");
        assert!(!output.status.success());
    }

    #[test]
    fn test_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1,X,Z,X").unwrap();
        let path = file.path().to_str().unwrap();

        let output = run_qhack(&["measurements", "-i", path], "");
        assert!(output.status.success());
        assert_eq!(stdout(&output), format!("{:?}\n", 1.0 - 2.0 / 3.0));
    }
}

mod givens_tests {
    use super::*;

    fn angles(output: &Output) -> Vec<f64> {
        stdout(output)
            .trim()
            .split(',')
            .map(|field| field.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_prints_three_angles() {
        let output = run_qhack(&["givens"], "0.8,-0.4,0.4,-0.2\n");
        assert!(output.status.success());
        let got = angles(&output);
        let expected = [1.2025284333582569, std::f64::consts::FRAC_PI_2, 0.4899573262537284];
        assert_eq!(got.len(), 3);
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-12, "{g} != {e}");
        }
    }

    #[test]
    fn test_zero_c_prints_python_zero() {
        let output = run_qhack(&["givens"], "0.6,-0.8,0,0");
        assert!(output.status.success());
        let out = stdout(&output);
        let fields: Vec<&str> = out.trim().split(',').collect();
        assert_eq!(fields[1], "0.0");
        assert_eq!(fields[2], "-0.0");
    }

    #[test]
    fn test_json_angles() {
        let output = run_qhack(&["givens", "--format", "json"], "0.5,0.5,-0.5,-0.5");
        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        let theta_2 = json["theta_2"].as_f64().unwrap();
        assert!((theta_2 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(json["theta_1"].is_f64());
        assert!(json["theta_3"].is_f64());
    }

    #[test]
    fn test_zero_b_fails() {
        let output = run_qhack(&["givens"], "1,0,0,0");
        assert!(!output.status.success());
        assert!(stdout(&output).is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Amplitude b is zero"));
    }

    #[test]
    fn test_malformed_input_fails() {
        let output = run_qhack(&["givens"], "0.8,-0.4,0.4");
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("got 3 field(s)"));
    }

    #[test]
    fn test_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0.6,-0.8,0,0").unwrap();
        let path = file.path().to_str().unwrap();

        let output = run_qhack(&["givens", "-i", path], "");
        assert!(output.status.success());
        assert_eq!(angles(&output).len(), 3);
    }
}

// ============================================================================
// Clap argument parsing
// ============================================================================

mod parse_tests {
    use clap::{Parser, Subcommand};

    #[derive(Parser)]
    #[command(name = "qhack")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Swaps {
            #[arg(short, long)]
            input: Option<String>,
            #[arg(short, long)]
            topology: Option<String>,
            #[arg(long)]
            explain: bool,
            #[arg(short, long, default_value = "text")]
            format: String,
        },
        Measurements {
            #[arg(short, long)]
            input: Option<String>,
            #[arg(long)]
            groups: bool,
            #[arg(short, long, default_value = "text")]
            format: String,
        },
        Givens {
            #[arg(short, long)]
            input: Option<String>,
            #[arg(short, long, default_value = "text")]
            format: String,
        },
        Version,
    }

    #[test]
    fn test_swaps_defaults() {
        let cli = TestCli::try_parse_from(["qhack", "swaps"]).unwrap();
        match cli.command {
            TestCommands::Swaps {
                input,
                topology,
                explain,
                format,
            } => {
                assert!(input.is_none());
                assert!(topology.is_none());
                assert!(!explain);
                assert_eq!(format, "text");
            }
            _ => panic!("expected swaps"),
        }
    }

    #[test]
    fn test_swaps_all_flags() {
        let cli = TestCli::try_parse_from([
            "qhack", "-vv", "swaps", "-i", "gate.txt", "-t", "topo.yaml", "--explain", "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            TestCommands::Swaps {
                input,
                topology,
                explain,
                format,
            } => {
                assert_eq!(input.as_deref(), Some("gate.txt"));
                assert_eq!(topology.as_deref(), Some("topo.yaml"));
                assert!(explain);
                assert_eq!(format, "json");
            }
            _ => panic!("expected swaps"),
        }
    }

    #[test]
    fn test_measurements_groups() {
        let cli = TestCli::try_parse_from(["qhack", "measurements", "--groups", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            TestCommands::Measurements { groups: true, .. }
        ));
    }

    #[test]
    fn test_givens_args() {
        let cli = TestCli::try_parse_from(["qhack", "givens", "-i", "amps.txt"]).unwrap();
        match cli.command {
            TestCommands::Givens { input, format } => {
                assert_eq!(input.as_deref(), Some("amps.txt"));
                assert_eq!(format, "text");
            }
            _ => panic!("expected givens"),
        }
        assert!(TestCli::try_parse_from(["qhack", "givens", "--explain"]).is_err());
    }

    #[test]
    fn test_version() {
        let cli = TestCli::try_parse_from(["qhack", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["qhack", "route"]).is_err());
        assert!(TestCli::try_parse_from(["qhack"]).is_err());
    }
}
