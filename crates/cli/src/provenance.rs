//! Run metadata written next to every faces file.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::write_json;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Code revision, library version, run parameters and produced files.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub wirefaces_version: &'static str,
    pub params: Value,
    pub outputs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
}

impl Provenance {
    pub fn new(params: Value, outputs: Vec<String>) -> Self {
        Self {
            code_rev: code_rev(),
            wirefaces_version: wirefaces::VERSION,
            params,
            outputs,
            callsite: None,
        }
    }

    /// Record `artifact` and write `<stem>.provenance.json` beside it.
    #[track_caller]
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let caller = Location::caller();
        self.callsite = Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        });
        self.outputs.push(artifact.to_string_lossy().into_owned());
        let path = sidecar_path(artifact);
        write_json(&path, &serde_json::to_value(&self)?)?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (runtime, then build time), else `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_owned))
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn sidecar_replaces_the_extension() {
        assert_eq!(
            sidecar_path(Path::new("out/cube.json")),
            Path::new("out/cube.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("faces")),
            Path::new("faces.provenance.json")
        );
    }

    #[test]
    fn sidecar_lists_params_version_and_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("deep/faces.json");
        let written = Provenance::new(json!({"command": "cube", "rot_x": 0.3}), Vec::new())
            .write_beside(&artifact)
            .unwrap();
        assert_eq!(written, dir.path().join("deep/faces.provenance.json"));

        let doc: Value = serde_json::from_slice(&fs::read(&written).unwrap()).unwrap();
        assert_eq!(doc["params"]["rot_x"], 0.3);
        assert_eq!(doc["wirefaces_version"], wirefaces::VERSION);
        assert_eq!(doc["outputs"].as_array().map(Vec::len), Some(1));
        assert!(doc["outputs"][0].as_str().unwrap().ends_with("faces.json"));
        assert_eq!(doc["callsite"]["file"], file!());
    }

    #[test]
    fn report_block_has_no_callsite() {
        let doc = serde_json::to_value(Provenance::new(json!({}), Vec::new())).unwrap();
        assert!(doc.get("callsite").is_none());
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
