//! Line-oriented front end: command parsing and the read/eval/print loop.

use crate::config::OutputFormat;
use crate::models::{parse_mask, valid_subnet_bases};
use crate::output;
use crate::processing::{analyze, BitSelection, NetworkInfo};
use crate::quiz::{QuizSession, RandomSource};
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  visualize|v <ip> <mask> [ip2]  show the network breakdown
  quiz|next|q                    new question
  answer|a <text>                answer the current question
  show                           visualize the current question
  subnets <mask>                 list subnet bases on 192.168.1.x
  bits <mask> <boundary>         bits between the mask and a boundary (0-32)
  score                          show the score
  help                           this text
  quit|exit                      leave
";

const NO_QUESTION: &str = "No active question. Type 'quiz' first.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Visualize {
        ip: String,
        mask: String,
        second_ip: Option<String>,
    },
    Quiz,
    Answer(String),
    Show,
    Subnets(String),
    Bits {
        mask: String,
        boundary: u8,
    },
    Score,
    Help,
    Quit,
}

/// Parse one input line. Blank lines give `Ok(None)`; bad usage gives a hint.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let tokens = split_and_strip(line);
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (name.to_lowercase().as_str(), args) {
        ("visualize" | "v", [ip, mask]) => Command::Visualize {
            ip: ip.to_string(),
            mask: mask.to_string(),
            second_ip: None,
        },
        ("visualize" | "v", [ip, mask, second]) => Command::Visualize {
            ip: ip.to_string(),
            mask: mask.to_string(),
            second_ip: Some(second.to_string()),
        },
        ("visualize" | "v", _) => return Err("Usage: visualize <ip> <mask> [ip2]".to_string()),
        ("quiz" | "next" | "q", []) => Command::Quiz,
        ("answer" | "a", [_, ..]) => Command::Answer(args.join(" ")),
        ("answer" | "a", []) => return Err("Usage: answer <text>".to_string()),
        ("show", []) => Command::Show,
        ("subnets", [mask]) => Command::Subnets(mask.to_string()),
        ("subnets", _) => return Err("Usage: subnets <mask>".to_string()),
        ("bits", [mask, boundary]) => match boundary.parse::<u8>() {
            Ok(boundary) if boundary <= 32 => Command::Bits {
                mask: mask.to_string(),
                boundary,
            },
            _ => return Err("Usage: bits <mask> <boundary>".to_string()),
        },
        ("bits", _) => return Err("Usage: bits <mask> <boundary>".to_string()),
        ("score", []) => Command::Score,
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        _ => return Err(format!("Unknown command: {}. Type 'help'.", line.trim())),
    };
    Ok(Some(command))
}

/// Split on whitespace, keeping 'quoted' and "quoted" text together.
fn split_and_strip(input: &str) -> Vec<&str> {
    RE.find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .collect()
}
lazy_static! {
    static ref RE: Regex =
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex?");
}

/// One quiz session plus an output format.
pub struct Repl<R: RandomSource> {
    session: QuizSession<R>,
    format: OutputFormat,
}

impl<R: RandomSource> Repl<R> {
    pub fn new(session: QuizSession<R>, format: OutputFormat) -> Repl<R> {
        Repl { session, format }
    }

    pub fn session(&self) -> &QuizSession<R> {
        &self.session
    }

    /// Run one command and return the text to print.
    pub fn execute(&mut self, command: Command) -> Result<String, Box<dyn Error>> {
        log::debug!("execute {:?}", command);
        let json = self.format == OutputFormat::Json;

        let text = match command {
            Command::Visualize {
                ip,
                mask,
                second_ip,
            } => match analyze(&ip, &mask, second_ip.as_deref()) {
                Ok(info) => self.render_info(&info)?,
                Err(e) => {
                    log::warn!("Rejected input ip={ip} mask={mask}: {e}");
                    format!("Invalid IP or Subnet Mask: {e}\n")
                }
            },
            Command::Quiz => {
                let question = self.session.generate();
                if json {
                    output::question_json(question)?
                } else {
                    output::render_question(question)
                }
            }
            Command::Answer(text) => match self.session.check_answer(&text) {
                Some(outcome) if json => output::outcome_json(&outcome, self.session.score())?,
                Some(outcome) => output::render_outcome(&outcome, self.session.score()),
                None => format!("{NO_QUESTION}\n"),
            },
            Command::Show => match self.session.current_as_visualizer_inputs() {
                Some(inputs) => {
                    let info = NetworkInfo::from_addresses(inputs.ip, inputs.mask, inputs.second_ip);
                    self.render_info(&info)?
                }
                None => format!("{NO_QUESTION}\n"),
            },
            Command::Subnets(mask) => match parse_mask(&mask) {
                Ok(mask) => {
                    let bases = valid_subnet_bases(mask);
                    if bases.len() > 64 {
                        log::info!("Large subnet listing: {} bases for {mask}", bases.len());
                    }
                    if json {
                        output::subnet_bases_json(&bases)?
                    } else {
                        output::render_subnet_bases(&bases)
                    }
                }
                Err(e) => format!("Invalid IP or Subnet Mask: {e}\n"),
            },
            Command::Bits { mask, boundary } => match parse_mask(&mask) {
                Ok(mask) => {
                    let selection = BitSelection::from_mask(mask, boundary);
                    if json {
                        output::bit_selection_json(&selection)?
                    } else {
                        output::render_bit_selection(&selection)
                    }
                }
                Err(e) => format!("Invalid IP or Subnet Mask: {e}\n"),
            },
            Command::Score if json => output::to_json(&self.session.score())?,
            Command::Score => output::render_score(self.session.score()),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };
        Ok(text)
    }

    fn render_info(&self, info: &NetworkInfo) -> Result<String, Box<dyn Error>> {
        Ok(match self.format {
            OutputFormat::Json => output::to_json(info)?,
            OutputFormat::Terminal => output::render_network_info(info),
        })
    }

    /// Read commands until `quit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, mut out: W) -> Result<(), Box<dyn Error>> {
        log::info!("#Start repl");
        write!(out, "{}", "Subnetting quiz. Type 'help' for commands.\n".bold())?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    let text = self.execute(command)?;
                    write!(out, "{text}")?;
                    if !text.ends_with('\n') {
                        writeln!(out)?;
                    }
                }
                Ok(None) => {}
                Err(usage) => writeln!(out, "{usage}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        log::info!("#End repl score={}", self.session.score());
        Ok(())
    }
}
