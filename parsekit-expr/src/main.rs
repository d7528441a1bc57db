use anyhow::{Result, bail};
use clap::Parser as ClapParser;
use parsekit::State;
use parsekit_expr::ExprPipeline;
use smartstring::alias::String;
use std::io::{self, BufRead};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to parse; one line is read from standard input if omitted
    #[arg(short, long)]
    input: Option<String>,
}

fn read_line() -> Result<std::string::String> {
    let mut line = std::string::String::new();
    io::stdin().lock().read_line(&mut line)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let source = match args.input {
        Some(input) => input.to_string(),
        None => read_line()?,
    };

    let pipeline = ExprPipeline::try_new()?;
    let mut state = State::new();

    let Ok(tokens) = pipeline.lex(&mut state, &source) else {
        bail!("{}", state.message());
    };
    println!("got {} tokens", tokens.len());
    println!("{}", tokens.display(&source));

    let Ok(tree) = pipeline.parse(&mut state, &tokens) else {
        bail!("{}", state.message());
    };
    print!("{}", tree.display(&source));

    log::info!(
        "Stats: {:?}, {:?}",
        state.stats().lexer,
        state.stats().parser
    );
    Ok(())
}
