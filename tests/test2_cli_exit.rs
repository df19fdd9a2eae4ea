use std::process::{Command, Output};

fn run_binary(args: &[&str], dir: &std::path::Path) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_s3-bucket-tool"))
        .args(args)
        .current_dir(dir)
        // Static dummy credentials and no metadata lookups keep the run offline and fast
        .env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")
        .env("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
        .env("AWS_MAX_ATTEMPTS", "1")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_CONFIG_FILE", dir.join("no-config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", dir.join("no-credentials"))
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_SESSION_TOKEN")
        .output()
}

#[test]
fn unreachable_service_exits_with_status_one() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("baby.JPG"), b"bytes")?;

    let output = run_binary(
        &["--endpoint-url", "http://127.0.0.1:1", "--wait-timeout", "1"],
        dir.path(),
    )?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    println!("stdout: {stdout}\nstderr: {stderr}");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("AWS Session Created"));
    assert!(stderr.contains("Unable to create bucket \"bruno-golang-5\""));
    // Nothing after the failed step ran
    assert!(!stdout.contains("Buckets:"));
    assert!(!stdout.contains("Successfully uploaded"));
    Ok(())
}

#[test]
fn unsupported_region_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let output = run_binary(&["--region", "eu-west-1"], dir.path())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported region"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn zero_wait_timeout_fails_validation() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let output = run_binary(&["--wait-timeout", "0"], dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Error: --wait-timeout must be greater than zero.")
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("AWS Session Created"));
    Ok(())
}

#[test]
fn missing_credentials_fail_session_creation() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("baby.JPG"), b"bytes")?;

    // No credential source is reachable: no env keys, no profile files, no metadata services
    let output = Command::new(env!("CARGO_BIN_EXE_s3-bucket-tool"))
        .args(["--endpoint-url", "http://127.0.0.1:1"])
        .current_dir(dir.path())
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_WEB_IDENTITY_TOKEN_FILE")
        .env_remove("AWS_ROLE_ARN")
        .env_remove("AWS_CONTAINER_CREDENTIALS_RELATIVE_URI")
        .env_remove("AWS_CONTAINER_CREDENTIALS_FULL_URI")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_CONFIG_FILE", dir.path().join("no-config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", dir.path().join("no-credentials"))
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    println!("stderr: {stderr}");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Unable to create AWS session"));
    // The session step printed nothing and no later step ran
    assert!(output.stdout.is_empty());
    Ok(())
}
