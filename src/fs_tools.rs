use std::error::Error;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::helper_error::HelperError;
use crate::project::Project;

// non recursive on purpose, a missing target root is the callers problem
// and has to surface as an error, a dir that already exists is a no-op
fn make_dir(dir: &Path) -> io::Result<()> {
    match fs::create_dir(dir) {
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
        other => other,
    }
}

fn make_project_dirs(project: &Project) -> Result<(), Box<dyn Error>> {
    for dir in project.dir_iter() {
        make_dir(&dir)?;
    }

    Ok(())
}

// best effort like the rest of the file step, a file that cant be opened or
// written is reported and skipped, the run keeps going
pub fn write_project_file(dir: &Path, file_name: &str, content: &str) {
    let file_path = dir.join(file_name);

    match fs::File::create(&file_path) {
        Ok(mut file) => {
            if let Err(err) = file.write_all(content.as_bytes()) {
                eprintln!(
                    "error: unable to write file {} -- {}",
                    file_name, err
                );
            }
        }
        Err(_) => {
            eprintln!("error: unable to open file {}", file_name);
        }
    }
}

fn make_project_files(project: &Project) {
    for (dir, file_name, content) in project.file_iter() {
        write_project_file(&dir, file_name, &content);
    }
}

// the interface for making the project tree
// this will make
//     - the project dir and its fixed sub dirs
//     - the rendered CMakeLists.txt and the seed main.cpp
// only dir creation can fail the run, file writes are best effort
pub fn make_project_tree(project: &Project) -> Result<(), HelperError> {
    if let Err(err) = make_project_dirs(project) {
        return Err(HelperError::from_io_err(err));
    }

    make_project_files(project);

    Ok(())
}
