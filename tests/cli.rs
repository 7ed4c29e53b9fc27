use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn tracer() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tracer"))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("spheretrace-cli-{}-{}", name, std::process::id()))
}

#[test]
fn small_render_exits_cleanly_and_writes_ppm() {
    let output = temp_path("small.ppm");
    let status = tracer()
        .args(["--width", "4", "--height", "3", "--log-level", "error", "--output"])
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = fs::read(&output).unwrap();
    fs::remove_file(&output).unwrap();
    let header = b"P6\n4 3\n255\n";
    assert_eq!(&bytes[..header.len()], &header[..]);
    assert_eq!(bytes.len(), header.len() + 4 * 3 * 3);
}

#[test]
fn unwritable_output_fails_with_nonzero_status() {
    let output = temp_path("missing-dir").join("out.ppm");
    let status = tracer()
        .args(["--width", "4", "--height", "3", "--log-level", "error", "--output"])
        .arg(&output)
        .status()
        .unwrap();
    assert!(!status.success());
    assert_eq!(status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn empty_gradient_is_rejected() {
    let output = temp_path("empty-gradient.ppm");
    let status = tracer()
        .args(["--gradient", "--width", "0", "--log-level", "error", "--output"])
        .arg(&output)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
    assert!(!output.exists());
}
