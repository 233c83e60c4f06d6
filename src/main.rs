use clap::Parser;
use minre::cli::Cli;
use minre::matcher::{Matcher, Span};
use minre::output::Output;
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    // compile once, match every string against the same chain
    let matcher = Matcher::compile(&cli.pattern)?;

    let spans: Vec<Option<Span>> = if cli.sequential || cli.strings.len() == 1 {
        cli.strings.iter().map(|s| matcher.find(s)).collect()
    } else {
        cli.strings.par_iter().map(|s| matcher.find(s)).collect()
    };

    for (input, span) in cli.strings.iter().zip(spans) {
        output.print_check(input, span);
    }

    Ok(())
}
