//! listmark CLI - Markdown lists to HTML
//!
//! Usage: `listmark [--lists-only] [--escape] [--tab-width N] [FILE|-]`

use std::io::{self, Read, Write};

use listmark::Options;

struct Args {
    lists_only: bool,
    options: Options,
    path: Option<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> io::Result<Args> {
    let mut parsed = Args {
        lists_only: false,
        options: Options::default(),
        path: None,
    };

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lists-only" => parsed.lists_only = true,
            "--escape" => parsed.options.escape_text = true,
            "--tab-width" => {
                let value = args.next().ok_or_else(|| invalid("--tab-width needs a value"))?;
                parsed.options.tab_width = value
                    .parse()
                    .ok()
                    .filter(|&width: &usize| width > 0)
                    .ok_or_else(|| invalid("--tab-width must be a positive integer"))?;
            }
            "-" => parsed.path = None,
            flag if flag.starts_with("--") => {
                return Err(invalid(&format!("unknown option: {flag}")));
            }
            _ => parsed.path = Some(arg),
        }
    }

    Ok(parsed)
}

fn invalid(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message.to_string())
}

fn main() -> io::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    // Read from the file argument, or stdin
    let input = match &args.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = if args.lists_only {
        listmark::render_lists_with_options(&input, &args.options)
    } else {
        listmark::to_html_with_options(&input, &args.options)
    };
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
