//! Line-oriented version of the calculator form.
//!
//! Each line is one input event: `<field> <value>` (or `<field>=<value>`)
//! updates the form, and a handful of bare words act on it.

use std::io::Write;

use anyhow::{Context, Result};
use calculator::{CalculatorConfig, FormSession, SubmissionDispatcher, SubmitError};
use colored::Colorize;
use model::{Field, Genre};
use tokio::io::{AsyncBufReadExt, BufReader};

/// What one line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Set { name: &'a str, value: &'a str },
    Show,
    Submit,
    Reset,
    Genres,
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> Command<'_> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Command::Empty,
        "show" => return Command::Show,
        "submit" | "calculate" => return Command::Submit,
        "reset" | "clear" => return Command::Reset,
        "genres" => return Command::Genres,
        "help" | "?" => return Command::Help,
        "quit" | "exit" | "q" => return Command::Quit,
        _ => {}
    }

    let line = line.strip_prefix("set ").map(str::trim_start).unwrap_or(line);
    match line.find(|c: char| c == '=' || c.is_whitespace()) {
        Some(at) => {
            let rest = line[at..].trim_start();
            let value = rest.strip_prefix('=').unwrap_or(rest).trim_start();
            Command::Set {
                name: line[..at].trim(),
                value,
            }
        }
        None => Command::Set {
            name: line,
            value: "",
        },
    }
}

/// Run the form until the user quits or input ends
pub async fn run(config: &CalculatorConfig) -> Result<()> {
    let dispatcher = SubmissionDispatcher::from_config(config);
    let mut session = FormSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "CULT CLASSIC CALCULATOR".bold().blue());
    println!("How likely is your movie to become a cult classic?");
    println!("Scoring mode: {}. Type `help` for commands.", config.mode);

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match parse_line(&line) {
            Command::Empty => {}
            Command::Set { name, value } => {
                if let Err(err) = session.set_field(name, value) {
                    println!("{} {}", "✗".red(), err);
                }
            }
            Command::Show => show(&session),
            Command::Submit => {
                println!("{}", "Calculating...".dimmed());
                match session.submit(&dispatcher).await {
                    Ok(result) => crate::print_result(result),
                    Err(SubmitError::Busy) => println!("{}", "Still calculating".yellow()),
                    Err(err) => println!("{} {}", "✗".red(), err),
                }
            }
            Command::Reset => {
                session.reset();
                println!("Form cleared");
            }
            Command::Genres => {
                let names: Vec<_> = Genre::ALL.iter().map(|g| g.to_string()).collect();
                println!("{}", names.join(", "));
            }
            Command::Help => help(),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("{} ", ">".bold());
    std::io::stdout().flush().context("Failed to flush stdout")
}

fn show(session: &FormSession) {
    let record = session.record();
    let values = [
        (Field::Title, record.title.clone()),
        (Field::Year, record.year.to_string()),
        (Field::Runtime, record.runtime.to_string()),
        (Field::Revenue, record.revenue.to_string()),
        (Field::Budget, record.budget.to_string()),
        (Field::Adult, record.adult.to_string()),
        (Field::Genre, record.genre.to_string()),
        (Field::Tagline, record.tagline.clone()),
        (Field::Description, record.description.clone()),
    ];
    for (field, value) in values {
        println!("  {} {}", format!("{:<12}", field).cyan(), value);
    }
    if session.result().is_some() {
        println!("{}", "(a result is available, submit again to refresh)".dimmed());
    }
}

fn help() {
    println!("{}", "Commands:".bold());
    println!("  <field> <value>   set a field, e.g. `runtime 95` or `title=Heathers`");
    println!("  show              print the form");
    println!("  submit            calculate the score");
    println!("  reset             start over with a blank form");
    println!("  genres            list accepted genres");
    println!("  quit              leave");
    let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
    println!("Fields: {}", names.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_line("  "), Command::Empty);
        assert_eq!(parse_line("SUBMIT"), Command::Submit);
        assert_eq!(parse_line("show"), Command::Show);
        assert_eq!(parse_line("q"), Command::Quit);
    }

    #[test]
    fn test_parse_assignments() {
        assert_eq!(
            parse_line("title Night of the Living Dead"),
            Command::Set {
                name: "title",
                value: "Night of the Living Dead"
            }
        );
        assert_eq!(
            parse_line("set runtime 96"),
            Command::Set {
                name: "runtime",
                value: "96"
            }
        );
        assert_eq!(
            parse_line("description = A = B"),
            Command::Set {
                name: "description",
                value: "A = B"
            }
        );
        assert_eq!(
            parse_line("genre=Horror"),
            Command::Set {
                name: "genre",
                value: "Horror"
            }
        );
    }

    #[test]
    fn test_parse_field_without_value_clears_it() {
        assert_eq!(
            parse_line("tagline"),
            Command::Set {
                name: "tagline",
                value: ""
            }
        );
    }
}
