//! Shared fixtures for integration tests
//!
//! Provides shell-script stand-ins for `kreadconfig5` and `kwriteconfig5`
//! that store entries as `[group][group]key=value` lines in a plain file.

#![allow(dead_code)]

use kdeconfig::ToolsConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_READER: &str = r#"#!/bin/sh
file=""; key=""; groups=""
while [ $# -gt 0 ]; do
  case "$1" in
    --file) file="$2"; shift 2 ;;
    --group) groups="$groups[$2]"; shift 2 ;;
    --key) key="$2"; shift 2 ;;
    *) shift ;;
  esac
done
if [ ! -f "$file" ]; then
  echo
  exit 0
fi
awk -v p="$groups$key=" 'index($0, p) == 1 { v = substr($0, length(p) + 1) } END { print v }' "$file"
"#;

const FAKE_WRITER: &str = r#"#!/bin/sh
file=""; key=""; groups=""; delete=0; value=""
while [ $# -gt 0 ]; do
  case "$1" in
    --file) file="$2"; shift 2 ;;
    --group) groups="$groups[$2]"; shift 2 ;;
    --key) key="$2"; shift 2 ;;
    --type) shift 2 ;;
    --delete) delete=1; shift ;;
    *) value="$1"; shift ;;
  esac
done
p="$groups$key="
tmp="$file.tmp"
if [ -f "$file" ]; then
  awk -v p="$p" 'index($0, p) != 1' "$file" > "$tmp"
else
  : > "$tmp"
fi
if [ "$delete" -eq 0 ]; then
  printf '%s%s\n' "$p" "$value" >> "$tmp"
fi
mv "$tmp" "$file"
"#;

const FAILING_WRITER: &str = r#"#!/bin/sh
echo "kwriteconfig5: unable to write" >&2
exit 1
"#;

/// Temporary directory holding fake tools and a config file
pub struct FakeKde {
    dir: TempDir,
    pub reader: PathBuf,
    pub writer: PathBuf,
    pub config_file: PathBuf,
}

impl FakeKde {
    pub fn new() -> Self {
        Self::with_writer(FAKE_WRITER)
    }

    /// Fake whose writer always exits 1 without touching the file
    pub fn with_failing_writer() -> Self {
        Self::with_writer(FAILING_WRITER)
    }

    fn with_writer(writer_script: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let reader = install_script(dir.path(), "kreadconfig5", FAKE_READER);
        let writer = install_script(dir.path(), "kwriteconfig5", writer_script);
        let config_file = dir.path().join("kdeglobals");
        Self {
            dir,
            reader,
            writer,
            config_file,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tools(&self) -> ToolsConfig {
        ToolsConfig {
            read_binary: self.reader.to_string_lossy().into_owned(),
            write_binary: self.writer.to_string_lossy().into_owned(),
        }
    }

    /// Seed the config file with raw `[group]key=value` lines
    pub fn seed(&self, lines: &[&str]) {
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&self.config_file, contents).expect("Failed to seed config file");
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.config_file).unwrap_or_default()
    }
}

fn install_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
    path
}
