use clap::Parser;

#[derive(Parser)]
#[command(
    name = "minre",
    about = "Minimal regex matcher - compile a pattern once, match many strings",
    version
)]
pub struct Cli {
    /// Pattern to compile: literals, `.` wildcard, `*` repetition suffix,
    /// `^` start anchor, trailing `$` end anchor
    pub pattern: String,

    /// Strings to test against the compiled pattern
    #[arg(required = true)]
    pub strings: Vec<String>,

    /// Match strings sequentially instead of in parallel
    #[arg(short, long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
