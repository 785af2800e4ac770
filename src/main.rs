use std::process::ExitCode;

use clap::Parser;
use exprtree::{Binding, Config, PowAssociativity, Slot, compile_with};
use tracing_subscriber::{EnvFilter, fmt};

/// exprtree compiles a math expression into a tree, folds its constant parts
/// and prints its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, as NAME=VALUE. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    vars: Vec<(String, f64)>,

    /// Prints the compiled tree before the value.
    #[arg(short, long)]
    tree: bool,

    /// Groups `^` chains from the left, so `2^3^2` is 64.
    #[arg(long)]
    left_pow: bool,

    /// Makes `log` the natural logarithm instead of base 10.
    #[arg(long)]
    natural_log: bool,

    /// Skips constant folding.
    #[arg(long)]
    no_optimize: bool,

    expression: String,
}

/// Splits a `NAME=VALUE` argument.
fn parse_assignment(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.trim().to_owned(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let config = Config { pow_associativity: if args.left_pow {
                              PowAssociativity::LeftToRight
                          } else {
                              PowAssociativity::RightToLeft
                          },
                          natural_log:       args.natural_log,
                          optimize:          !args.no_optimize, };

    let slots: Vec<Slot> = args.vars.iter().map(|(_, value)| Slot::new(*value)).collect();
    let bindings: Vec<Binding> = args.vars
                                     .iter()
                                     .zip(&slots)
                                     .map(|((name, _), slot)| Binding::variable(name, slot))
                                     .collect();

    match compile_with(&args.expression, &bindings, &config) {
        Ok(tree) => {
            if args.tree {
                print!("{}", tree.dump());
            }
            println!("{}", tree.eval());
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{}", args.expression);
            eprintln!("{:>width$}", "^", width = error.offset());
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}
