use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_raw(dir: &Path, rows: usize) -> Result<String, Box<dyn Error>> {
    let mut text = String::from("command,mean,stddev,median,user,system,min,max\n");
    for i in 0..rows {
        text.push_str(&format!("bench {i},0.{i:04},0.001,0.{i:04},0.01,0.0,0.0001,0.9\n"));
    }
    fs::write(dir.join("bench.csv"), &text)?;
    Ok(text)
}

#[test]
fn cases_lists_load_major_table() -> Result<(), Box<dyn Error>> {
    let output = Command::cargo_bin("cases")?.output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 151);
    assert_eq!(lines[0], "case,load,ctype,workers");
    assert_eq!(lines[1], "0,1,None,1");
    assert_eq!(lines[150], "149,1000000,Process,10");
    Ok(())
}

#[test]
fn help_lists_every_full_case() -> Result<(), Box<dyn Error>> {
    let output = Command::cargo_bin("bench")?.arg("help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 361);
    assert_eq!(lines[0], "0,simple_division,None,1,1");
    assert_eq!(lines[84], "84,simple_division,Process,2,1");
    assert_eq!(lines[360], "number of cases: 360");
    Ok(())
}

#[test]
fn missing_case_is_usage_error() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("bench")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected arg: [CASE]"));
    Command::cargo_bin("bench")?
        .args(["1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected arg: [CASE]"));
    Ok(())
}

#[test]
fn out_of_range_case_fails() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("bench")?
        .arg("360")
        .assert()
        .failure()
        .stderr(predicate::str::contains("case index 360 out of range"));
    Ok(())
}

#[test]
fn runs_sequential_thread_and_process_cases() -> Result<(), Box<dyn Error>> {
    // 0: sequential, 44: two threads, 84: two processes; all at load 1
    for case in ["0", "44", "84"] {
        Command::cargo_bin("bench")?.arg(case).assert().success();
    }
    Ok(())
}

#[test]
fn process_case_collects_every_child_partial() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("bench")?
        .env("RUST_LOG", "info")
        .arg("84")
        .assert()
        .success()
        .stderr(predicate::str::contains("simple_division finished with 2 partial(s)"));
    Command::cargo_bin("bench-accel")?
        .env("RUST_LOG", "info")
        .arg("20")
        .assert()
        .success()
        .stderr(predicate::str::contains("simple_division_accelerated finished with 1 partial(s)"));
    Ok(())
}

#[test]
fn join_appends_metadata_columns() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let raw = write_raw(dir.path(), 360)?;

    Command::cargo_bin("bench")?
        .current_dir(dir.path())
        .arg("join")
        .assert()
        .success();

    let full = fs::read_to_string(dir.path().join("bench.full.csv"))?;
    let lines: Vec<&str> = full.lines().collect();
    let raw_lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 361);
    assert_eq!(
        lines[0],
        "command,mean,stddev,median,user,system,min,max,alg,type,workers,load"
    );
    for (line, raw_line) in lines.iter().zip(&raw_lines).skip(1) {
        assert_eq!(line.split(',').count(), raw_line.split(',').count() + 4);
        assert!(line.starts_with(raw_line));
    }
    assert!(lines[1].ends_with(",simple_division,None,1,1"));
    assert!(lines[360].ends_with(",simple_division_accelerated,Process,10,1000"));
    Ok(())
}

#[test]
fn join_with_short_raw_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_raw(dir.path(), 12)?;

    Command::cargo_bin("bench")?
        .current_dir(dir.path())
        .arg("join")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    assert!(!dir.path().join("bench.full.csv").exists());
    Ok(())
}

#[test]
fn join_without_raw_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    Command::cargo_bin("bench")?
        .current_dir(dir.path())
        .arg("join")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bench.csv"));
    Ok(())
}

#[test]
fn config_overrides_axes_and_files() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("concbench.toml");
    fs::write(
        &config,
        r#"
[full]
algorithms = ["peace_of_pi"]
workers = [1, 3]
loads = [1]

[files]
raw = "pi.csv"
full = "pi.full.csv"
"#,
    )?;

    let output = Command::cargo_bin("bench")?
        .args(["--config", config.to_str().unwrap(), "help"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("5,peace_of_pi,Process,3,1"));
    assert!(stdout.ends_with("number of cases: 6\n"));

    // the pi routine still runs under every mode
    for case in ["0", "3"] {
        Command::cargo_bin("bench")?
            .args(["--config", config.to_str().unwrap(), case])
            .assert()
            .success();
    }
    // three child processes; their partials must add up to the 1000-term series
    Command::cargo_bin("bench")?
        .env("RUST_LOG", "info")
        .args(["--config", config.to_str().unwrap(), "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("peace_of_pi finished with 3 partial(s)"))
        .stderr(predicate::str::contains("pi estimate 3.141"));

    fs::write(dir.path().join("pi.csv"), "command,mean\na,1\nb,2\nc,3\nd,4\ne,5\nf,6\n")?;
    Command::cargo_bin("bench")?
        .current_dir(dir.path())
        .args(["--config", "concbench.toml", "join"])
        .assert()
        .success();
    let full = fs::read_to_string(dir.path().join("pi.full.csv"))?;
    assert_eq!(full.lines().last(), Some("f,6,peace_of_pi,Process,3,1"));
    Ok(())
}

#[test]
fn accel_runner_indexes_load_table() -> Result<(), Box<dyn Error>> {
    // 20: one process at load 1; 12: three threads at load 1
    for case in ["0", "12", "20"] {
        Command::cargo_bin("bench-accel")?.arg(case).assert().success();
    }
    Command::cargo_bin("bench-accel")?
        .arg("150")
        .assert()
        .failure()
        .stderr(predicate::str::contains("case index 150 out of range"));
    Command::cargo_bin("bench-accel")?
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("number of cases: 150"));
    Ok(())
}

#[test]
fn accel_join_produces_151_lines() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let raw = write_raw(dir.path(), 150)?;

    Command::cargo_bin("bench-accel")?
        .current_dir(dir.path())
        .arg("join")
        .assert()
        .success();

    let full = fs::read_to_string(dir.path().join("bench.full.csv"))?;
    let lines: Vec<&str> = full.lines().collect();
    assert_eq!(lines.len(), 151);
    for (line, raw_line) in lines.iter().zip(raw.lines()).skip(1) {
        assert_eq!(line.split(',').count(), raw_line.split(',').count() + 4);
    }
    assert!(lines[150].ends_with(",simple_division_accelerated,Process,10,1000000"));
    Ok(())
}

#[test]
fn plot_renders_svg_from_full_files() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_raw(dir.path(), 360)?;
    Command::cargo_bin("bench")?
        .current_dir(dir.path())
        .arg("join")
        .assert()
        .success();
    fs::rename(dir.path().join("bench.full.csv"), dir.path().join("division.full.csv"))?;

    Command::cargo_bin("bench-plot")?
        .current_dir(dir.path())
        .args(["--output", "grid.svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plotted 1 algorithm(s) x 4 load(s)"));
    let svg = fs::read_to_string(dir.path().join("grid.svg"))?;
    assert!(svg.contains("division 1000"));
    Ok(())
}

#[test]
fn plot_without_results_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    Command::cargo_bin("bench-plot")?
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no *.full.csv files"));
    Ok(())
}
