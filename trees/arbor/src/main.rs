use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use arbor::{analyze_source, TraversalReport};
use arbor_parser::parse_tree;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "arbor",
    version,
    about = "Parse bracket-notation binary trees and rebuild them as AVL trees",
    long_about = "arbor reads a binary tree written in bracket notation, e.g.\n\
        (8 (9 (5)) (1)), validates it, and rebuilds its values as a\n\
        self-balancing AVL tree.\n\n\
        EXAMPLES:\n\
        \n  arbor check tree.txt            Validate a bracket string\n\
        \n  arbor walk tree.txt             Print every traversal order\n\
        \n  arbor walk --json tree.txt      Emit the traversals as JSON\n\
        \n  echo '(2 (1) (3))' | arbor walk Read the tree from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a bracket string without printing traversals
    Check(InputArgs),

    /// Parse a bracket string and print every traversal order
    Walk(WalkArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
struct WalkArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Emit the traversal report as JSON
    #[arg(long)]
    json: bool,
}

fn read_source(input: Option<&PathBuf>) -> io::Result<String> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.trim_end().to_string())
}

fn run_check(args: &InputArgs) -> ExitCode {
    let source = match read_source(args.input.as_ref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    match parse_tree(&source) {
        Ok(tree) => {
            println!("OK: {} node(s)", tree.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &TraversalReport) {
    let line = |values: &[i64]| {
        values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("depth-first (source order): {}", line(&report.depth_first));
    println!("breadth-first:              {}", line(&report.breadth_first));
    println!("pre-order:                  {}", line(&report.pre_order));
    println!("in-order:                   {}", line(&report.in_order));
    println!("post-order:                 {}", line(&report.post_order));
    println!(
        "{} node(s), AVL height {}",
        report.node_count, report.avl_height
    );
}

fn run_walk(args: &WalkArgs) -> ExitCode {
    let source = match read_source(args.input.input.as_ref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    match analyze_source(&source) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("error: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match &cli.command {
        Command::Check(args) => run_check(args),
        Command::Walk(args) => run_walk(args),
    }
}
