//! Integration tests running the siq-cli binary

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

static EMPTY_FILES: AtomicUsize = AtomicUsize::new(0);

/// Write a symbol configuration unique to this test
fn symbols_file(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("siq-cli-{}-{name}.json", std::process::id()));
    std::fs::write(&path, json).unwrap();
    path
}

/// Run the binary with an empty symbol configuration unless `symbols` is given
fn run(args: &[&str], symbols: Option<&PathBuf>) -> Output {
    let empty;
    let symbols = match symbols {
        Some(path) => path,
        None => {
            let n = EMPTY_FILES.fetch_add(1, Ordering::Relaxed);
            empty = symbols_file(&format!("empty{n}"), "{}");
            &empty
        }
    };
    Command::new(env!("CARGO_BIN_EXE_siq-cli"))
        .arg("--symbols")
        .arg(symbols)
        .args(args)
        .output()
        .expect("failed to run siq-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_parse() {
    let output = run(&["parse", "velocity", "3.6 km/h"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 m/s");
}

#[test]
fn test_parse_error() {
    let output = run(&["parse", "length", "5 furlongs"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Symbol 'furlongs' cannot be parsed"), "{stderr}");
}

#[test]
fn test_render() {
    let output = run(&["render", "-2", "-1", "2"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1/Nm");
}

#[test]
fn test_render_rejects_out_of_range_exponents() {
    let output = run(&["render", "--", "-2147483648"], None);
    assert!(!output.status.success());
    let output = run(&["render", "1001"], None);
    assert!(!output.status.success());
}

#[test]
fn test_rejects_out_of_range_configured_exponents() {
    let symbols = symbols_file(
        "huge",
        r#"{ "symbols": [ { "symbol": "x", "length": 2147483647, "mass": 2147483647, "time": 2147483647 } ] }"#,
    );
    let output = run(&["render", "1"], Some(&symbols));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exponent 2147483647"), "{stderr}");
}

#[test]
fn test_configured_symbols() {
    let symbols = symbols_file("hertz", r#"{ "symbols": [ { "symbol": "Hz", "time": -1 } ] }"#);
    let output = run(&["parse", "frequency", "3MHz"], Some(&symbols));
    assert_eq!(stdout(&output), "3000000 Hz");

    let output = run(&["render", "0", "0", "-1"], Some(&symbols));
    assert_eq!(stdout(&output), "Hz");
}

#[test]
fn test_types() {
    let output = run(&["types"], None);
    let listing = stdout(&output);
    assert!(listing.lines().any(|l| l == "Quantity<m/s, f64> (Velocity)"));
    assert!(listing.lines().any(|l| l == "Quantity<Pa, f32>"));
}

#[test]
fn test_check_from_stdin() {
    let empty = symbols_file("check", "{}");
    let mut child = Command::new(env!("CARGO_BIN_EXE_siq-cli"))
        .arg("--symbols")
        .arg(&empty)
        .arg("check")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn siq-cli");

    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, "# comment").unwrap();
        writeln!(stdin, "Mass: 5 t => 5000 kg").unwrap();
        writeln!(stdin, "Time: 2 h => 1 h").unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("= 5000 kg"));
    assert!(lines[1].ends_with("= 7200 s (expected 1 h)"));
}
