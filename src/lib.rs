//! make a minimal gtkmm/cmake project skeleton

pub mod parse_args;

mod fs_tools;
mod helper_error;
mod project;
mod template;

#[cfg(test)]
mod test_utils;

use std::error::Error;

use crate::fs_tools::make_project_tree;

pub use crate::project::Project;

///! make a new project from a Project struct
pub fn make_project(project: &Project) -> Result<(), Box<dyn Error>> {
    if let Err(err) = make_project_tree(project) {
        return Err(Box::from(err.to_string()));
    }

    println!("{}", project.build_instructions());

    Ok(())
}
