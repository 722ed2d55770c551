use flateq::{eval, EqError, EqResult};
use std::io::{self, Write};
use std::process::ExitCode;

const PROMPT: &str = "Input an equation. It will be evaluated parentheses first, then \
                      exponentiation, division and multiplication, and finally addition and \
                      subtraction.";

fn read_equation() -> io::Result<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut stdout = io::stdout();
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.write_all(b"\n> ")?;
    stdout.flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

/// What the binary prints for an outcome and the exit status that goes with it.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    line: String,
    to_stderr: bool,
    status: u8,
}

fn report(outcome: EqResult<f64>) -> Report {
    match outcome {
        Ok(x) => Report {
            line: format!("Result = {}", x),
            to_stderr: false,
            status: 0,
        },
        Err(EqError::Parse(e)) => {
            log::debug!("stopped reading at offset {}", e.offset());
            Report {
                line: format!("Error parsing equation: {}", e),
                to_stderr: true,
                status: 1,
            }
        }
        Err(EqError::Eval(e)) => Report {
            line: format!("Error processing equation: {}", e),
            to_stderr: true,
            status: 1,
        },
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let text = read_equation()?;
    let Report {
        line,
        to_stderr,
        status,
    } = report(eval::<f64>(&text));
    if to_stderr {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
    Ok(ExitCode::from(status))
}
