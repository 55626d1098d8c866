// cpc: propositional formulas and Portuguese sentences
// (c) 2017 Tim Taubert <tim@timtaubert.de>
// CPC may be freely distributed under the MIT license.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use rcpc::types::OPERATORS;
use rcpc::{AcceptAll, AtomMap, Confirm, Session, State};

/// Translate between propositional formulas and Portuguese sentences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Atom map file, one LETTER=description per line
    #[arg(short, long, global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sentence to formula
    ToFormula {
        sentence: String,
        /// Accept the detected atoms without asking
        #[arg(short, long)]
        yes: bool,
        /// Write the confirmed atom map to this file
        #[arg(long)]
        save_map: Option<PathBuf>,
    },
    /// Formula to sentence, needs --map
    ToText { formula: String },
    /// Print a formula in canonical form
    Normalize { formula: String },
    /// Evaluate a formula, e.g. `eval "A -> B" A=true B=false`
    Eval {
        formula: String,
        values: Vec<String>,
    },
    /// List the connectives
    Operators,
}

// Reviews proposed atoms on the terminal.
struct Prompt;

impl Confirm for Prompt {
    fn confirm(&mut self, mut proposed: AtomMap) -> Option<AtomMap> {
        println!("Detected atoms:");
        println!("{}", proposed);
        println!(
            "Edit with LETTER=description (empty description removes, +=description adds), \
             an empty line accepts, q cancels."
        );

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.ok()?;
            let line = line.trim();
            match line {
                "" => break,
                "q" | "Q" => return None,
                _ => {}
            }
            match line.split_once('=') {
                Some(("+", desc)) => match proposed.push(desc.trim()) {
                    Ok(id) => println!("{}={}", id, desc.trim()),
                    Err(e) => eprintln!("{}", e),
                },
                Some((id, desc)) if !id.trim().is_empty() => {
                    let id = id.trim().to_uppercase();
                    if desc.trim().is_empty() {
                        proposed.remove(&id);
                    } else {
                        proposed.insert(&id, desc.trim());
                    }
                }
                _ => eprintln!("expected LETTER=description"),
            }
        }

        Some(proposed)
    }
}

fn parse_value(text: &str) -> Result<(String, bool), String> {
    let (id, val) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=true|false, got {:?}", text))?;
    let val = match val.trim().to_lowercase().as_str() {
        "1" | "t" | "true" | "v" | "verdadeiro" => true,
        "0" | "f" | "false" | "falso" => false,
        other => return Err(format!("not a truth value: {:?}", other)),
    };
    Ok((id.trim().to_string(), val))
}

fn run(args: Args) -> Result<(), String> {
    let mut session = Session::new();
    if let Some(ref path) = args.map {
        let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        session.apply_atoms_text(&text).map_err(|e| e.to_string())?;
    }

    match args.command {
        Command::ToFormula {
            sentence,
            yes,
            save_map,
        } => {
            let (mut accept, mut prompt) = (AcceptAll, Prompt);
            let confirm: &mut dyn Confirm = if yes { &mut accept } else { &mut prompt };
            match session.to_formula(&sentence, confirm).map_err(|e| e.to_string())? {
                Some(formula) => {
                    if let Some(path) = save_map {
                        fs::write(&path, session.atoms_text() + "\n")
                            .map_err(|e| format!("{}: {}", path.display(), e))?;
                        eprintln!("saved {} atoms to {}", session.atoms().len(), path.display());
                    }
                    println!("{}", formula);
                }
                None => eprintln!("cancelled"),
            }
        }
        Command::ToText { formula } => {
            println!("{}", session.to_portuguese(&formula).map_err(|e| e.to_string())?);
        }
        Command::Normalize { formula } => {
            println!("{}", session.normalize(&formula).map_err(|e| e.to_string())?);
        }
        Command::Eval { formula, values } => {
            let mut state = State::new();
            for text in &values {
                let (id, val) = parse_value(text)?;
                state.set(&id, val);
            }
            println!("{}", session.evaluate(&formula, &state).map_err(|e| e.to_string())?);
        }
        Command::Operators => {
            for op in OPERATORS.iter() {
                println!("{}  {:<14} {}", op.symbol, op.name, op.reading);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
