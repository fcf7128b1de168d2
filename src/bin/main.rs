//! `scrabble-query` — a thin CLI wrapper around the query engine (spec §6
//! "Command-line surface"). Argument parsing is hand-rolled rather than
//! pulled from a crate, matching every example binary in the teacher
//! crate: `wordtest.rs` and `lib/examples/best_scores.rs` both parse their
//! own plain `&str` arguments with no CLI-parsing dependency.
use anyhow::{bail, Context, Result};
use scrabble_engine::parse::{parse_crosswords, parse_word_spec};
use scrabble_engine::{evaluate, Lexicon, Query, Rack};
use std::env;
use std::process::ExitCode;

const DEFAULT_LIMIT: usize = 10_000;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: scrabble-query query [-n N] <LEXICON_PATH> <LETTER_POOL> <WORD_SPEC> [<CROSSWORDS>...]");
    }

    let subcommand = args.remove(0);
    if subcommand != "query" {
        bail!("unknown subcommand '{}'; expected 'query'", subcommand);
    }

    let mut limit = DEFAULT_LIMIT;
    let mut positional = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "-n" {
            let n = iter
                .next()
                .context("-n requires a numeric argument")?
                .parse::<usize>()
                .context("-n argument must be a non-negative integer")?;
            limit = n;
        } else {
            positional.push(arg);
        }
    }

    if positional.len() < 3 {
        bail!("usage: query [-n N] <LEXICON_PATH> <LETTER_POOL> <WORD_SPEC> [<CROSSWORDS>...]");
    }
    let lexicon_path = &positional[0];
    let letter_pool = &positional[1];
    let word_spec_str = &positional[2];
    let crossword_tokens: Vec<&str> = positional[3..].iter().map(String::as_str).collect();

    let lexicon = Lexicon::from_file(lexicon_path).context("loading lexicon")?;
    let rack = Rack::from_pool(letter_pool).context("parsing letter pool")?;
    let word_spec = parse_word_spec(word_spec_str).context("parsing word specification")?;
    let crosswords = parse_crosswords(&crossword_tokens).context("parsing crosswords")?;
    let query = Query::new(rack, word_spec, crosswords).context("constructing query")?;

    let query_crosswords = query.crosswords().to_vec();
    let results = evaluate(&lexicon, &query, limit);

    for result in &results {
        let word = result.word().to_uppercase();
        let crosswords_formed: Vec<String> = result
            .crosswords_formed(&query_crosswords)
            .into_iter()
            .map(|w| w.to_uppercase())
            .collect();

        if crosswords_formed.is_empty() {
            println!("{} {}", word, result.score);
        } else {
            println!("{} {} {}", word, crosswords_formed.join(" "), result.score);
        }
    }

    Ok(())
}
