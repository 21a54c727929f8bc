mod debug_report;

use std::io::{self, IsTerminal, Read};

use textsift::{analyze, compile, interpret};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match config.mode {
        Mode::Analyze => run_analyze(&config),
        Mode::Interpret => run_interpret(&config),
    }
}

fn run_analyze(config: &CliConfig) {
    let record = analyze(&config.input);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&record).expect("record serializes"));
    } else {
        debug_report::print_record(&record, config.color);
    }
}

fn run_interpret(config: &CliConfig) {
    let interpretation = match interpret(&config.input) {
        Ok(interpretation) => interpretation,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let predicate = compile(&interpretation.filter);
    let candidates: Vec<(textsift::AnalysisRecord, bool)> =
        config.against.iter().map(|value| {
            let record = analyze(value);
            let kept = predicate.matches(&record);
            (record, kept)
        }).collect();

    if config.json {
        let kept: Vec<&str> =
            candidates.iter().filter(|(_, kept)| *kept).map(|(r, _)| r.value.as_str()).collect();
        let out = serde_json::json!({
            "phrase": interpretation.phrase,
            "filter": interpretation.filter,
            "matched_rules": interpretation.matched_rules,
            "predicate": predicate,
            "kept": kept,
        });
        println!("{}", serde_json::to_string_pretty(&out).expect("report serializes"));
    } else {
        debug_report::print_interpretation(&interpretation, &predicate, &candidates, config.color);
    }
}

enum Mode {
    Analyze,
    Interpret,
}

struct CliConfig {
    mode: Mode,
    input: String,
    against: Vec<String>,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut mode: Option<Mode> = None;
    let mut input: Option<String> = None;
    let mut against: Vec<String> = Vec::new();
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("textsift {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "analyze" if mode.is_none() => mode = Some(Mode::Analyze),
            "interpret" if mode.is_none() => mode = Some(Mode::Interpret),
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--against" => {
                let value = args.next().ok_or_else(|| "error: --against expects a value".to_string())?;
                against.push(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--against=") => {
                against.push(arg.trim_start_matches("--against=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let Some(mode) = mode else {
        return Err(format!("error: expected a mode (analyze | interpret)\n\n{}", help_text()));
    };

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { mode, input, against, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches('\n').to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "textsift {version}

Deterministic text analysis and filter-phrase interpretation CLI.

Usage:
  textsift analyze [OPTIONS] [--] <text...>
  textsift interpret [OPTIONS] [--] <phrase...>
  textsift <mode> [OPTIONS] --input <text>
  echo <text> | textsift <mode> [OPTIONS]

Modes:
  analyze                 Compute the content-addressed analysis record
  interpret               Translate a filter phrase into a structured filter

Options:
  -i, --input <text>      Input text (alternative to positional/stdin)
      --against <text>    Candidate string to run the compiled predicate
                          against (interpret mode; repeatable)
      --json              Machine-readable output
      --color             Force colored output
      --no-color          Disable colored output
  -h, --help              Show this help
  -V, --version           Show version

Examples:
  textsift analyze \"race car\"
  textsift interpret \"all single word palindromic strings\"
  textsift interpret \"longer than 3 chars\" --against kayak --against ab",
        version = env!("CARGO_PKG_VERSION")
    )
}
