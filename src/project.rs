use std::{env, error::Error, iter, path::PathBuf};

use crate::template;

// every project gets the same three sub dirs
const PROJECT_SUB_DIRS: [&str; 3] = ["src", "include", "build"];

pub const CMAKE_LISTS_FILE: &str = "CMakeLists.txt";
pub const MAIN_CPP_FILE: &str = "main.cpp";

// a project struct to hold the data for one scaffold run
#[derive(Debug)]
pub struct Project {
    pub name: String,
    // the target root, the project dir is made under this
    pub root: PathBuf,
}

impl Project {
    // no dir on the cli means the project goes in the current dir
    pub fn new(
        name: String,
        root: Option<String>,
    ) -> Result<Self, Box<dyn Error>> {
        let root = match root {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };

        Ok(Self { name, root })
    }

    pub fn project_path(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    pub fn src_path(&self) -> PathBuf {
        self.project_path().join("src")
    }

    pub fn build_path(&self) -> PathBuf {
        self.project_path().join("build")
    }

    // the project dir itself first, then the fixed sub dirs
    pub fn dir_iter(&self) -> impl Iterator<Item = PathBuf> {
        let project_path = self.project_path();

        iter::once(project_path.clone()).chain(
            PROJECT_SUB_DIRS
                .iter()
                .map(move |dir| project_path.join(dir)),
        )
    }

    // the two seed files and where they go, with the cmake file already
    // rendered for this project
    pub fn file_iter(
        &self,
    ) -> impl Iterator<Item = (PathBuf, &'static str, String)> {
        let cmake_lists = template::render_cmake_lists(&self.name);

        iter::once((self.project_path(), CMAKE_LISTS_FILE, cmake_lists))
            .chain(iter::once((
                self.src_path(),
                MAIN_CPP_FILE,
                template::MAIN_CPP.to_owned(),
            )))
    }

    /// the success message with the shell commands to build and run the
    /// new project
    pub fn build_instructions(&self) -> String {
        format!(
            "the project was created successfully, \
             thanks for using gtkmm-helper!\n\n\
             you can build the project using the commands below.\n\
             $ cd {}\n\
             $ cmake ..\n\
             $ make\n\
             you can then run the project.\n\
             $ ./{}",
            self.build_path().display(),
            self.name
        )
    }
}
