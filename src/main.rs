use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::input::{Collected, InputError, Interactive};

mod cowsay;
mod figures;
mod input;
mod utils;

const USAGE: &str = "The command is intended to work with pipes.\nUsage: fortune | gophersay";

#[derive(Parser, Debug)]
#[command(name = "gophersay", version)]
#[command(about = "Frames piped text in a speech balloon spoken by an ASCII figure")]
struct Args {
    /// The figure name. Valid alternate values are `cow`, `cat`, and `random`
    #[arg(short, long, env = "GOPHERSAY_FIGURE", default_value = figures::DEFAULT_NAME)]
    figure: String,

    /// List the figure names and exit
    #[arg(short, long)]
    list: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Printed,
    Usage,
}

fn run<P: Interactive, R: io::BufRead, W: Write>(
    args: &Args,
    probe: &P,
    input: R,
    out: &mut W,
) -> Result<Outcome> {
    if args.list {
        for name in figures::names() {
            writeln!(out, "{name}")?;
        }
        return Ok(Outcome::Printed);
    }

    let lines = match input::collect(probe, input)? {
        Collected::Lines(lines) => lines,
        Collected::Interactive => {
            writeln!(out, "{USAGE}")?;
            return Ok(Outcome::Usage);
        }
    };

    let figure = figures::select(&args.figure);
    log::debug!("Figure: {}", figure.name);

    writeln!(out, "{}", cowsay::gen_bubble(&lines))?;
    writeln!(out)?;
    writeln!(out, "{}", figure.art)?;
    writeln!(out)?;
    Ok(Outcome::Printed)
}

/// Maps a failed run to its output and exit status.
fn report<W: Write, E: Write>(e: &anyhow::Error, out: &mut W, err_out: &mut E) -> ExitCode {
    if e.downcast_ref::<InputError>().is_some() {
        log::error!("{e:#}");
        let _ = writeln!(out, "Error!");
        let _ = out.flush();
    } else {
        let _ = writeln!(err_out, "{e:#}");
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let probe = input::FdProbe(io::stdin());
    let mut out = io::BufWriter::new(io::stdout().lock());
    let result = run(&args, &probe, io::stdin().lock(), &mut out)
        .and_then(|outcome| out.flush().map(|_| outcome).map_err(Into::into));

    match result {
        Ok(outcome) => {
            log::debug!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, &mut out, &mut io::stderr()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Probe(bool);

    impl Interactive for Probe {
        fn is_interactive(&self) -> io::Result<bool> {
            Ok(self.0)
        }
    }

    fn args(figure: &str) -> Args {
        Args {
            figure: figure.to_string(),
            list: false,
        }
    }

    fn render(args: &Args, probe: Probe, stdin: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(args, &probe, Cursor::new(stdin.to_string()), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn hello_hi_with_cat() {
        let (outcome, text) = render(&args("cat"), Probe(false), "hello\nhi\n");
        assert_eq!(outcome, Outcome::Printed);
        let expected = format!(
            " _______\n/ hello \\\n\\ hi    /\n -------\n\n{}\n\n",
            figures::select("cat").art
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn terminal_prints_only_usage() {
        let (outcome, text) = render(&args("gopher"), Probe(true), "hello\n");
        assert_eq!(outcome, Outcome::Usage);
        assert_eq!(
            text,
            "The command is intended to work with pipes.\nUsage: fortune | gophersay\n"
        );
    }

    #[test]
    fn unknown_figure_prints_random() {
        let (_, text) = render(&args("dragon"), Probe(false), "x\n");
        assert!(text.ends_with(&format!("{}\n\n", figures::select("random").art)));
    }

    #[test]
    fn list_skips_input() {
        let a = Args {
            figure: "gopher".into(),
            list: true,
        };
        let (_, text) = render(&a, Probe(true), "");
        assert_eq!(text, "gopher\ncow\ncat\nrandom\n");
    }

    #[test]
    fn default_figure_is_gopher() {
        let a = Args::try_parse_from(["gophersay"]).unwrap();
        assert_eq!(a.figure, "gopher");
        let a = Args::try_parse_from(["gophersay", "-f", "cow"]).unwrap();
        assert_eq!(a.figure, "cow");
    }

    #[test]
    fn query_failure_prints_error_on_stdout() {
        struct Broken;
        impl Interactive for Broken {
            fn is_interactive(&self) -> io::Result<bool> {
                Err(io::Error::from_raw_os_error(9))
            }
        }

        let mut out = Vec::new();
        let err = run(&args("gopher"), &Broken, Cursor::new("hi\n"), &mut out).unwrap_err();
        assert!(out.is_empty());

        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        let code = report(&err, &mut stdout, &mut stderr);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        assert_eq!(stdout, b"Error!\n");
        assert!(stderr.is_empty());
    }

    #[test]
    fn read_failure_goes_to_stderr() {
        let mut out = Vec::new();
        let err = run(&args("cat"), &Probe(false), Cursor::new(vec![0xff, b'\n']), &mut out)
            .unwrap_err();

        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        let code = report(&err, &mut stdout, &mut stderr);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        assert!(stdout.is_empty());
        assert!(String::from_utf8(stderr).unwrap().contains("standard input"));
    }
}
