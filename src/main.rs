#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! acontrol-cli — command-line front end for the acontrol appliance.
//!
//! Routes `<context> <command>` argument pairs through nested option tables
//! and forwards card management to the appliance's registry service over
//! HTTP/JSON.

mod cli;
mod commands;
mod registry;
mod types;

use cli::Argv;

fn main() {
    println!("acontrol - Access Control System");
    println!("Otavio Ribeiro <otavio.ribeiro@gmail.com>\n");

    let argv = Argv::from_env();

    match cli::dispatch(&argv) {
        Ok(_handled) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
