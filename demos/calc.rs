use ac_fraction::{Error, Rational64};
use clap::{value_t, App, Arg, ArgMatches};

/// Construct a fraction from a given pair of arguments.
fn fraction(matches: &ArgMatches, num: &str, den: &str) -> Result<Rational64, Error> {
    let num = value_t!(matches, num, i64).unwrap_or_else(|err| err.exit());
    let den = value_t!(matches, den, i64).unwrap_or_else(|err| err.exit());

    Rational64::new(num, den)
}

/// Apply a given operator and print the result.
fn calculate(matches: &ArgMatches) -> Result<(), Error> {
    let lhs = fraction(matches, "lhs-num", "lhs-den")?;
    let rhs = fraction(matches, "rhs-num", "rhs-den")?;

    let res = match matches.value_of("operator").unwrap() {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" => lhs.try_div(rhs)?,
        "cmp" => {
            println!("{:?}", lhs.cmp(&rhs));

            return Ok(());
        }
        _ => unreachable!(),
    };

    println!("{} ({})", res, res.as_f64());

    Ok(())
}

fn main() {
    let matches = App::new("calc")
        .arg(
            Arg::with_name("lhs-num")
                .required(true)
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("LHS_NUM")
                .help("Numerator of the left operand"),
        )
        .arg(
            Arg::with_name("lhs-den")
                .required(true)
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("LHS_DEN")
                .help("Denominator of the left operand"),
        )
        .arg(
            Arg::with_name("operator")
                .required(true)
                .takes_value(true)
                .allow_hyphen_values(true)
                .possible_values(&["+", "-", "*", "/", "cmp"])
                .value_name("OPERATOR")
                .help("Operator"),
        )
        .arg(
            Arg::with_name("rhs-num")
                .required(true)
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("RHS_NUM")
                .help("Numerator of the right operand"),
        )
        .arg(
            Arg::with_name("rhs-den")
                .required(true)
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("RHS_DEN")
                .help("Denominator of the right operand"),
        )
        .get_matches();

    ac_fraction::set_log_callback(|msg| eprintln!("WARNING: {}", msg));

    if let Err(err) = calculate(&matches) {
        eprintln!("ERROR: {}", err);
    }
}
