use assert_cmd::Command;
use std::path::Path;

pub fn jnl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jnl").unwrap();
    cmd.env_remove("JNL_FILE");
    cmd.env_remove("JNL_LOG");
    cmd.env("JNL_CONFIG", "/nonexistent/jnl/config.toml");
    cmd
}

/// Run `jnl <journal> <args>` and require success
#[allow(dead_code)]
pub fn jnl_ok(journal: &Path, args: &[&str]) -> String {
    let output = jnl_cmd().arg(journal).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "jnl {:?} failed:\nstdout:\n{}\nstderr:\n{}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
