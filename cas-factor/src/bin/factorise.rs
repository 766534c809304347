use cas_factor::algebra::{Expression, Factor, Monomial};
use cas_factor::polynomial::{factorise_with_steps, Step};
use cas_factor::value::ExactValue;
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;

fn term(coefficient: i64, factors: Vec<Factor>) -> Monomial {
    Monomial::new(ExactValue::integer(coefficient), factors)
}

fn sym(symbol: char) -> Factor {
    Factor::symbol(symbol)
}

fn main() {
    let level = env::var("CAS_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]).is_err() {
        eprintln!("a logger is already installed");
    }

    let x = Monomial::from_factors(vec![sym('x')]);
    let inputs = vec![
        // 2a + 2b
        Expression::new(vec![term(2, vec![sym('a')]), term(2, vec![sym('b')])]),
        // 8x^2yz + 12xy^3
        Expression::new(vec![
            term(8, vec![sym('x').pow(2), sym('y'), sym('z')]),
            term(12, vec![sym('x'), sym('y').pow(3)]),
        ]),
        // 2x + 4
        Expression::new(vec![term(2, vec![sym('x')]), Monomial::integer(4)]),
        // a + b
        Expression::new(vec![term(1, vec![sym('a')]), term(1, vec![sym('b')])]),
        // a^x + a^2
        Expression::new(vec![
            term(1, vec![sym('a').with_exponent(x)]),
            term(1, vec![sym('a').pow(2)]),
        ]),
    ];

    for expr in inputs {
        info!("factorising `{}`", expr);

        let mut steps: Vec<Step> = Vec::new();
        match factorise_with_steps(&expr, &mut steps) {
            Ok(result) => {
                for step in &steps {
                    println!("  {step}");
                }
                println!("{expr} = {result}");
            },
            Err(err) => {
                error!("could not factorise `{}`: {}", expr, err);
                if let Err(io_err) = err.report_to_stderr("input") {
                    error!("could not print the report: {}", io_err);
                }
            },
        }
    }
}
