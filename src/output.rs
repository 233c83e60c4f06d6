use crate::matcher::Span;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    /// One report block per input: the string being checked, the boolean
    /// result, the matched substring when there is one, then a blank
    /// separator line.
    pub fn print_check(&mut self, input: &str, span: Option<Span>) {
        writeln!(self.stdout, "Check {}", input).unwrap();
        match span {
            Some(span) => {
                self.set_color(Color::Green);
                writeln!(self.stdout, "true").unwrap();
                self.reset();
                writeln!(self.stdout, "{}", span.slice(input)).unwrap();
            }
            None => {
                self.set_color(Color::Red);
                writeln!(self.stdout, "false").unwrap();
                self.reset();
            }
        }
        writeln!(self.stdout).unwrap();
    }
}
