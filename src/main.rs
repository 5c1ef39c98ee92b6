// shunt: interactive front end for the expression engine
//
// With an expression argument: compile it once, evaluate it --repeat times
// and print the result (plus timing when repeating). Without one: read
// expressions line by line from stdin.

use clap::Parser;
use parser::{render_parse_error, report_parse_error, AssignPolicy, CompileOptions, ParseError};
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::{Duration, Instant};
use vm::Expression;

const SOURCE_NAME: &str = "<input>";

#[derive(Parser, Debug)]
#[command(name = "shunt", version, about = "Compile arithmetic expressions to postfix and evaluate them")]
struct Cli {
    /// Expression to evaluate; starts an interactive session when omitted
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Number of timed evaluations per expression
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Keep literal subexpressions instead of folding them at compile time
    #[arg(long)]
    no_fold: bool,

    /// Assign a variable before evaluating, e.g. --set x=2 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    assignments: Vec<(String, f64)>,

    /// Let --set create variables the expression never mentions
    #[arg(long)]
    declare: bool,

    /// Print the compiled postfix program before the result
    #[arg(long)]
    postfix: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> CompileOptions {
        let policy = if self.declare {
            AssignPolicy::DeclareUnknown
        } else {
            AssignPolicy::IgnoreUnknown
        };
        CompileOptions::new()
            .fold_constants(!self.no_fold)
            .assign_policy(policy)
    }
}

fn parse_assignment(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{}': {}", name.trim(), e))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let code = match &cli.expression {
        Some(source) => run_once(&cli, source),
        None => match repl(&cli) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("error: {}", e);
                1
            }
        },
    };
    std::process::exit(code);
}

fn run_once(cli: &Cli, source: &str) -> i32 {
    let mut expr = match compile(cli, source) {
        Ok(expr) => expr,
        Err(e) => return e.exit_code(),
    };
    for (name, value) in &cli.assignments {
        assign(&mut expr, name, *value);
    }

    if cli.postfix {
        println!("postfix: {}", expr);
    }
    let (result, elapsed) = timed_evaluate(&mut expr, cli.repeat);
    println!("{}", result);
    if cli.repeat > 1 {
        print_timing(cli.repeat, elapsed);
    }
    0
}

fn repl(cli: &Cli) -> io::Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut current: Option<Expression> = None;
    let mut stdout = io::stdout();

    log::info!("shunt v{} ready", env!("CARGO_PKG_VERSION"));
    prompt(&mut stdout, interactive)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            prompt(&mut stdout, interactive)?;
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            let mut words = command.split_whitespace();
            match (words.next(), current.as_mut()) {
                (Some("quit" | "q"), _) => break,
                (Some("postfix"), Some(expr)) => println!("{}", expr),
                (Some("vars"), Some(expr)) => {
                    for (name, value) in expr.registry().iter() {
                        println!("{} = {}", name, value);
                    }
                }
                (Some("set"), Some(expr)) => {
                    let name = words.next().unwrap_or_default();
                    let value_source: Vec<&str> = words.collect();
                    match Expression::new(&value_source.join(" ")) {
                        Ok(mut value) => {
                            assign(expr, name, value.evaluate());
                            evaluate_and_print(expr, cli.repeat);
                        }
                        Err(e) => eprintln!("error: {}", e),
                    }
                }
                (Some("postfix" | "vars" | "set"), None) => eprintln!("no expression yet"),
                (other, _) => eprintln!("unknown command ':{}'", other.unwrap_or_default()),
            }
            prompt(&mut stdout, interactive)?;
            continue;
        }

        current = match compile(cli, line) {
            Ok(mut expr) => {
                for (name, value) in &cli.assignments {
                    assign(&mut expr, name, *value);
                }
                if cli.postfix {
                    println!("postfix: {}", expr);
                }
                evaluate_and_print(&mut expr, cli.repeat);
                Some(expr)
            }
            // Later commands must not act on the expression before this one.
            Err(_) => Some(Expression::poisoned(line)),
        };
        prompt(&mut stdout, interactive)?;
    }
    Ok(())
}

/// Compiles `source`, printing a diagnostic on failure.
fn compile(cli: &Cli, source: &str) -> Result<Expression, ParseError> {
    Expression::with_options(source, &cli.options()).inspect_err(|e| {
        log::debug!("compilation of {:?} failed: {:?}", source, e);
        if io::stderr().is_terminal() {
            if report_parse_error(SOURCE_NAME, source, e).is_err() {
                eprintln!("error: {}", e);
            }
        } else {
            eprint!("{}", render_parse_error(SOURCE_NAME, source, e));
        }
    })
}

fn assign(expr: &mut Expression, name: &str, value: f64) {
    if !expr.set_variable(name, value) {
        log::warn!("ignoring assignment to unknown variable '{}'", name);
    }
}

fn evaluate_and_print(expr: &mut Expression, repeat: u32) {
    let (result, elapsed) = timed_evaluate(expr, repeat);
    println!("{}", result);
    if repeat > 1 {
        print_timing(repeat, elapsed);
    }
}

fn timed_evaluate(expr: &mut Expression, repeat: u32) -> (f64, Duration) {
    let start = Instant::now();
    let mut result = f64::NAN;
    for _ in 0..repeat {
        result = expr.evaluate();
    }
    (result, start.elapsed())
}

fn print_timing(repeat: u32, elapsed: Duration) {
    let mean = elapsed / repeat;
    println!("{} evaluations in {:?} ({:?} each)", repeat, elapsed, mean);
}

fn prompt(stdout: &mut io::Stdout, interactive: bool) -> io::Result<()> {
    if interactive {
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
