use payoff_core::{
    cli::{output::Formatter, run_cli},
    init,
};

fn main() {
    init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run_cli(&args) {
        eprintln!("{}", Formatter::from_env(true).error(err));
        std::process::exit(1);
    }
}
