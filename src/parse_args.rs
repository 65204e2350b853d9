use std::{env, error::Error};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// make a minimal gtkmm project with a cmake build
#[derive(Parser, Default, Debug)]
#[clap(name = "gtkmm-helper")]
pub struct HelperArgs {
    /// create new project
    #[clap(short = 'n', long = "new", value_name = "NAME")]
    pub name: Option<String>,
    /// set target directory for new project. if not set, the project will
    /// be created in the current directory
    #[clap(short, long, value_name = "PATH")]
    pub dir: Option<String>,
}

// NOTE: i dont know a way to get clap to parse the args the way i want
fn check_args(args: &HelperArgs) -> Result<(), Box<dyn Error>> {
    if args.dir.is_some() && args.name.is_none() {
        return Err(Box::from(String::from(
            "error: --dir option can only be used after --new option.",
        )));
    }

    Ok(())
}

// Ok(None) means there is nothing to do and that is fine, usage was printed
pub fn parse_args() -> Result<Option<HelperArgs>, Box<dyn Error>> {
    // running with no arguments at all is not an error, just show the usage
    if env::args().len() == 1 {
        HelperArgs::command().print_help()?;

        return Ok(None);
    }

    let helper_args = match HelperArgs::try_parse() {
        Ok(args) => args,
        // clap renders --help itself, that is a success not an error
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            err.print()?;

            return Ok(None);
        }
        Err(err) => return Err(Box::from(err.to_string())),
    };

    check_args(&helper_args)?;

    Ok(Some(helper_args))
}
