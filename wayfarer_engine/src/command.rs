//! Command module
//!
//! Splits raw input into a normalized verb and argument, then resolves the
//! verb (and its synonyms) into an engine [`Command`].

use variantly;

/// A raw line of input reduced to a lowercase verb plus optional argument.
///
/// The argument keeps interior words joined by single spaces; a missing
/// argument is `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub verb: String,
    pub arg: Option<String>,
}

/// Normalize a raw line into a [`ParsedInput`].
///
/// Empty or whitespace-only input yields an empty verb, which the engine
/// silently ignores. `"talk to <name>"` is special-cased ahead of generic
/// splitting so the preposition never leaks into the argument.
pub fn parse_input(raw: &str) -> ParsedInput {
    let normalized = raw.trim().to_lowercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    match tokens.as_slice() {
        [] => ParsedInput {
            verb: String::new(),
            arg: None,
        },
        ["talk", "to", rest @ ..] => ParsedInput {
            verb: "talk".to_string(),
            arg: join_tokens(rest),
        },
        [verb, rest @ ..] => ParsedInput {
            verb: (*verb).to_string(),
            arg: join_tokens(rest),
        },
    }
}

fn join_tokens(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Answer(Option<String>),
    Drop(Option<String>),
    Examine(Option<String>),
    Go(Option<String>),
    Help,
    Hint,
    Inventory,
    Load(Option<String>),
    Look,
    Nothing,
    Quit,
    Save(Option<String>),
    Take(Option<String>),
    Talk(Option<String>),
    Tasks,
    Unknown,
    #[variantly(rename = "use_cmd")]
    Use(Option<String>),
}

/// Resolve a parsed verb and its synonyms into a [`Command`].
///
/// Bare direction words double as movement commands. Anything unrecognized
/// becomes [`Command::Unknown`], which the REPL answers with a single
/// "not understood" message rather than an error.
pub fn resolve_command(input: ParsedInput) -> Command {
    let ParsedInput { verb, arg } = input;
    match verb.as_str() {
        "" => Command::Nothing,
        "quit" | "exit" => Command::Quit,
        "look" | "l" => Command::Look,
        "inventory" | "i" => Command::Inventory,
        "help" | "?" => Command::Help,
        "go" | "move" => Command::Go(arg),
        dir @ ("north" | "south" | "east" | "west" | "up" | "down" | "northeast" | "northwest"
        | "southeast" | "southwest" | "n" | "s" | "e" | "w" | "u" | "d" | "ne" | "nw" | "se"
        | "sw") => Command::Go(Some(dir.to_string())),
        "take" | "get" | "pick" | "grab" => Command::Take(arg),
        "drop" | "leave" | "put" => Command::Drop(arg),
        "use" => Command::Use(arg),
        "talk" | "speak" | "chat" => Command::Talk(arg),
        "examine" | "inspect" | "check" | "read" => Command::Examine(arg),
        "answer" | "solve" => Command::Answer(arg),
        "tasks" | "task" | "quest" | "quests" => Command::Tasks,
        "hint" | "hints" | "clue" => Command::Hint,
        "save" => Command::Save(arg),
        "load" => Command::Load(arg),
        _ => Command::Unknown,
    }
}
