use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters recorded in the sidecar.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

/// Write `data` as pretty JSON to `artifact`, plus `<stem>.provenance.json`
/// holding the git commit, callsite, params, and outputs. Returns the sidecar path.
#[track_caller]
pub fn write_with_sidecar<P: AsRef<Path>, S: Serialize>(
    artifact: P,
    data: &S,
    payload: Payload,
) -> Result<PathBuf> {
    let callsite = Location::caller();
    let artifact = artifact.as_ref();
    if let Some(parent) = artifact.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display()))?;
    }
    fs::write(artifact, serde_json::to_vec_pretty(data)?)
        .with_context(|| format!("writing {}", artifact.display()))?;

    let sidecar = sidecar_path(artifact);
    let doc = json!({
        "code_rev": current_git_rev(),
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "cones".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/rays.json"));
        assert_eq!(derived, Path::new("/tmp/out/rays.provenance.json"));
    }

    #[test]
    fn writes_artifact_and_sidecar() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested/rays.json");
        let data = vec![[1.0, 0.0], [-1.0, 0.0]];
        let sidecar =
            write_with_sidecar(&artifact, &data, Payload::new(json!({"cone_number": 2}))).unwrap();
        let written: Vec<[f64; 2]> =
            serde_json::from_slice(&fs::read(&artifact).unwrap()).unwrap();
        assert_eq!(written, data);
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["cone_number"], 2);
        assert_eq!(prov["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(prov["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }
}
