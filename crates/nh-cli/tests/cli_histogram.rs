use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_numhist"))
}

fn run(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e));
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("numhist-test-{}-{}", std::process::id(), name))
}

#[test]
fn neither_saving_nor_showing_is_rejected() {
    let out = run(&["--noShow"], "1 2 3\n");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("nothing to do"), "stderr was: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn save_writes_an_svg_image() {
    let path = temp_path("basic.svg");
    let out = run(&["--noShow", "--save", path.to_str().unwrap()], "1 2 2 3 4\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">Histogram</text>"));
    assert!(svg.contains(">Count</text>"));
    assert!(svg.contains(">Frequency</text>"));
    let _ = fs::remove_file(&path);
}

#[test]
fn save_writes_a_png_image() {
    let path = temp_path("basic.png");
    let out = run(&["--noShow", "--save", path.to_str().unwrap()], "1 2 2 3 4\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = temp_path("bad.bmp");
    let out = run(&["--noShow", "--save", path.to_str().unwrap()], "1 2 3\n");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bmp"), "stderr was: {stderr}");
    assert!(!path.exists());
}

#[test]
fn print_numbers_echoes_original_token_text_in_order() {
    let path = temp_path("echo.svg");
    let out = run(
        &["--noShow", "--save", path.to_str().unwrap(), "--printNumbers"],
        "007 abc 3.14\n",
    );
    assert!(out.status.success());
    // Literal text, not the parsed value: "007" stays "007".
    assert_eq!(String::from_utf8_lossy(&out.stdout), "007\n3.14\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn report_non_numeric_names_each_offending_token_once() {
    let path = temp_path("report.svg");
    let out = run(
        &["--noShow", "--save", path.to_str().unwrap(), "--reportNonNumeric"],
        "1 abc 2\nxyz 3\n",
    );
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("Non-numeric").count(), 2);
    assert!(stderr.contains("\"abc\""));
    assert!(stderr.contains("\"xyz\""));
    let _ = fs::remove_file(&path);
}

#[test]
fn add_n_appends_statistics_to_the_title() {
    let path = temp_path("addn.svg");
    let out = run(
        &["--noShow", "--addN", "--save", path.to_str().unwrap()],
        "10 20 30 40\n",
    );
    assert!(out.status.success());
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("n=4, mean=25.00, median=25.00, std=11.18"), "svg: {svg}");
    let _ = fs::remove_file(&path);
}

#[test]
fn custom_labels_and_title_appear_in_output() {
    let path = temp_path("labels.svg");
    let out = run(
        &[
            "--noShow",
            "--save",
            path.to_str().unwrap(),
            "--x",
            "Latency (ms)",
            "--y",
            "Requests",
            "--title",
            "API latency",
        ],
        "5 6 7\n",
    );
    assert!(out.status.success());
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains(">Latency (ms)</text>"));
    assert!(svg.contains(">Requests</text>"));
    assert!(svg.contains(">API latency</text>"));
    let _ = fs::remove_file(&path);
}

#[test]
fn identical_runs_produce_identical_images() {
    let a = temp_path("idem-a.svg");
    let b = temp_path("idem-b.svg");
    let input = "3 1 4 1 5 9 2 6\n";
    assert!(run(&["--noShow", "--bins", "5", "--save", a.to_str().unwrap()], input)
        .status
        .success());
    assert!(run(&["--noShow", "--bins", "5", "--save", b.to_str().unwrap()], input)
        .status
        .success());
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    let _ = fs::remove_file(&a);
    let _ = fs::remove_file(&b);
}

#[test]
fn empty_input_still_renders_an_image() {
    let path = temp_path("empty.svg");
    let out = run(&["--noShow", "--save", path.to_str().unwrap()], "");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(fs::read_to_string(&path).unwrap().starts_with("<svg"));
    let _ = fs::remove_file(&path);
}

#[test]
fn single_sample_does_not_crash() {
    let path = temp_path("single.svg");
    let out = run(
        &["--noShow", "--addN", "--save", path.to_str().unwrap()],
        "42\n",
    );
    assert!(out.status.success());
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("n=1, mean=42.00, median=42.00, std=0.00"));
    let _ = fs::remove_file(&path);
}

#[test]
fn style_file_overrides_render_defaults() {
    let style = temp_path("style.yaml");
    fs::write(&style, "colors:\n  bars: '#ff0000'\n").unwrap();
    let path = temp_path("styled.svg");
    let out = run(
        &[
            "--noShow",
            "--save",
            path.to_str().unwrap(),
            "--style",
            style.to_str().unwrap(),
        ],
        "1 2 3\n",
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("#ff0000"));
    assert!(!svg.contains("#1f77b4"));
    let _ = fs::remove_file(&style);
    let _ = fs::remove_file(&path);
}
