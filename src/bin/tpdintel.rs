//! TPD Intel CLI
//!
//! A small front-end for the resolver: loads the catalog directory,
//! lists companies or a company's programs, and renders the resolved
//! view for one (company, program) selection.

use std::path::PathBuf;
use std::process;

use tpdintel::{render_view, CatalogSet, Resolver};

/// CLI configuration
struct Config {
    /// Directory holding the three catalog files
    data_dir: PathBuf,
    /// Selected company
    company: Option<String>,
    /// Selected program
    program: Option<String>,
    /// List companies instead of resolving
    list_companies: bool,
    /// List the selected company's programs instead of resolving
    list_programs: bool,
    /// Emit the resolved view as JSON instead of rendered text
    json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/final"),
            company: None,
            program: None,
            list_companies: false,
            list_programs: false,
            json: false,
        }
    }
}

fn take_value(args: &[String], i: usize, flag: &str) -> String {
    if i + 1 < args.len() {
        args[i + 1].clone()
    } else {
        eprintln!("error: {flag} requires a value");
        process::exit(1);
    }
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                config.data_dir = PathBuf::from(take_value(&args, i, "--data-dir"));
                i += 2;
            }
            "--company" | "-c" => {
                config.company = Some(take_value(&args, i, "--company"));
                i += 2;
            }
            "--program" | "-p" => {
                config.program = Some(take_value(&args, i, "--program"));
                i += 2;
            }
            "--list-companies" => {
                config.list_companies = true;
                i += 1;
            }
            "--list-programs" => {
                config.list_programs = true;
                i += 1;
            }
            "--json" => {
                config.json = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("tpdintel - TPD program intelligence resolver");
                println!();
                println!("USAGE:");
                println!("    tpdintel [OPTIONS]");
                println!();
                println!("OPTIONS:");
                println!("    -d, --data-dir <DIR>      Catalog directory [default: data/final]");
                println!("    -c, --company <NAME>      Company to resolve");
                println!("    -p, --program <NAME>      Program to resolve");
                println!("        --list-companies      List companies and exit");
                println!("        --list-programs       List the company's programs and exit");
                println!("        --json                Emit the resolved view as JSON");
                println!("    -h, --help                Print help information");
                process::exit(0);
            }
            arg => {
                eprintln!("error: unknown argument: {arg}");
                process::exit(1);
            }
        }
    }

    config
}

fn main() {
    env_logger::init();
    let config = parse_args();

    let catalogs = match CatalogSet::load_dir(&config.data_dir) {
        Ok(catalogs) => catalogs,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let resolver = Resolver::build(catalogs);

    if config.list_companies {
        for company in resolver.companies() {
            println!("{company}");
        }
        return;
    }

    let Some(company) = config.company.as_deref() else {
        eprintln!("error: --company is required (or use --list-companies)");
        process::exit(1);
    };

    if config.list_programs {
        for program in resolver.programs_for(company) {
            println!("{program}");
        }
        return;
    }

    let Some(program) = config.program.as_deref() else {
        eprintln!("error: --program is required with --company");
        process::exit(1);
    };

    let view = resolver.resolve(company, program);
    if config.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize view: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", render_view(program, &view));
    }
}
