#![allow(dead_code)]
use std::path::PathBuf;

use tempfile::{tempdir, TempDir};

use crate::project::Project;

#[derive(Default)]
pub struct TempSetup {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl TempSetup {
    pub fn setup(&mut self) -> PathBuf {
        self.temp = Some(tempdir().unwrap());
        self.path = self.temp.as_ref().unwrap().path().to_owned();

        self.path.clone()
    }

    pub fn pathbuf(&self) -> PathBuf {
        self.path.clone()
    }
}

impl Drop for TempSetup {
    fn drop(&mut self) {
        if let Some(temp) = self.temp.take() {
            temp.close().expect("cant close file");
        }
    }
}

pub fn make_fake_project(root: Option<PathBuf>) -> Project {
    let root = root.unwrap_or_else(|| PathBuf::from("/tmp/test_root"));

    Project {
        name: String::from("test_project"),
        root,
    }
}
