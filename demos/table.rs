use clap::Parser;

use logic_table::expr::LogicExpr;
use logic_table::render::RenderConfig;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Infix expression, e.g. `(a|b)&~c`.
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Only print rows where the expression is true.
    #[clap(long)]
    satisfying_only: bool,

    /// Variables to keep; reports whether all other variables are redundant.
    #[clap(long, value_name = "VARS")]
    keep: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let mut e = LogicExpr::new(&args.expr)?;
    println!("postfix = {}", e.postfix());

    if let Some(keep) = &args.keep {
        let subset: Vec<char> = keep.chars().filter(|c| c.is_alphabetic()).collect();
        let redundant = e.is_other_variables_redundant(&subset);
        println!("variables outside {:?} redundant: {}", subset, redundant);
    }

    let config = RenderConfig {
        satisfying_only: args.satisfying_only,
        ..RenderConfig::default()
    };
    println!("{}", e.to_table_string_with_config(&config)?);

    println!("satisfiable: {}", e.is_satisfiable());
    println!("tautology: {}", e.is_tautology());
    println!("models: {}", e.sat_count());

    Ok(())
}
