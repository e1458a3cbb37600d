use clap::Parser;

use logic_table::expr::LogicExpr;
use logic_table::render::RenderConfig;
use logic_table::token::Token;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expression to analyze.
    #[arg(value_name = "EXPR", default_value = "a|~a|b|~b")]
    expr: String,

    /// Simplified form of the expression, checked for equivalence.
    #[arg(value_name = "SIMPLIFIED", default_value = "a|~a")]
    simplified: String,

    /// Enable debug logging.
    #[clap(long)]
    debug: bool,
}

fn print_table(title: &str, infix: &str, e: &LogicExpr, config: &RenderConfig) -> color_eyre::Result<()> {
    println!("\n{}: {}\n", title, infix);
    println!("{}", e.to_table_string_with_config(config)?);
    Ok(())
}

/// Print both tables and whether the two expressions are equivalent.
fn compare(expr: &str, simplified: &str) -> color_eyre::Result<()> {
    let mut e = LogicExpr::new(expr)?;
    let mut s = LogicExpr::new(simplified)?;

    print_table("logic expression", expr, &e, &RenderConfig::default())?;
    print_table("simplified logic expression", simplified, &s, &RenderConfig::default())?;

    if e.equivalent(&mut s) {
        println!("* the two expressions are equivalent.\n");
    } else {
        println!("* the two expressions are NOT equivalent.\n");
    }
    Ok(())
}

fn report_satisfiability(infix: &str, e: &LogicExpr) -> color_eyre::Result<()> {
    println!("Expression: {}", infix);
    if e.is_satisfiable() {
        println!("\n* is satisfiable at values:\n");
        let config = RenderConfig {
            satisfying_only: true,
            ..RenderConfig::default()
        };
        println!("{}", e.to_table_string_with_config(&config)?);
    } else {
        println!("\n* the expression is unsatisfiable\n");
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    compare(&args.expr, &args.simplified)?;

    let simplified = LogicExpr::new(&args.simplified)?;
    report_satisfiability(&args.simplified, &simplified)?;

    let mut expression = LogicExpr::new(&args.expr)?;
    report_satisfiability(&args.expr, &expression)?;

    let tautology = expression.is_tautology();
    if tautology {
        println!("* the expression is tautology.");
    }
    if !tautology && expression.is_satisfiable() {
        return Ok(());
    }

    // Look for a single gate whose flip makes the expression satisfiable.
    let mut chars: Vec<char> = args.expr.chars().collect();
    for i in 0..chars.len() {
        let Some(flipped) = Token::from_char(chars[i]).and_then(Token::flipped) else {
            continue;
        };

        let original = chars[i];
        chars[i] = flipped.symbol();
        let candidate: String = chars.iter().collect();
        expression.set_expression_partial(&candidate)?;

        if expression.is_satisfiable() {
            println!("\nexpression becomes satisfiable by changing\n");
            println!("from: {}", args.expr);
            println!("to:   {}", candidate);
            println!("      {}^", " ".repeat(i));

            compare(&candidate, &args.simplified)?;
            return Ok(());
        }

        chars[i] = original;
    }

    Ok(())
}
