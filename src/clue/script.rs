/*!
Reading a game from lines of text.

Each line holds one command, `#` begins a comment, and blank lines are ignored.

```none
players <player>…
suspects <item>…
weapons <item>…
rooms <item>…
hand <owner> <item>…
suggest <suggester> <item> <item> <item> <refuter | -> <shown | ->
accuse <accuser> <item> <item> <item> <true | false>
notepad
```

The roster lines must come before any other command.
If no roster lines are given, the [classic](crate::clue::roster::Roster::classic) roster is used.

Only the form of a line is checked when reading.
Names are checked when a command is [applied](Game::apply) to a game.

```rust
# use clue_sat::clue::script::Script;
# use clue_sat::config::Config;
# use clue_sat::reports::Entailment;
let text = "
players a b c
suspects s1 s2
weapons w1 w2
rooms r1 r2

hand a s1 w1 # the hand of a
suggest a s2 w2 r2 b -
";

let script = Script::read(text.as_bytes()).unwrap();
let mut game = script.game(Config::default()).unwrap();
for line in &script.lines {
    game.apply(&line.command).unwrap();
}
assert_eq!(game.query("a", "s2"), Ok(Entailment::False));
```
*/

use std::io::BufRead;

use crate::{
    clue::{
        roster::{Category, Roster},
        Game,
    },
    config::Config,
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

/// A command of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Hand {
        owner: String,
        items: Vec<String>,
    },

    Suggest {
        suggester: String,
        items: [String; 3],
        refuter: Option<String>,
        shown: Option<String>,
    },

    Accuse {
        accuser: String,
        items: [String; 3],
        correct: bool,
    },

    /// Display the notepad of the game.
    Notepad,
}

/// A command, together with the (1-indexed) line of the command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

/// A script.
#[derive(Clone, Debug)]
pub struct Script {
    pub roster: Roster,
    pub lines: Vec<Line>,
}

/// The category lines, in order.
const CATEGORY_NAMES: [&str; 3] = ["suspects", "weapons", "rooms"];

impl Script {
    /// Reads a script.
    pub fn read(mut reader: impl BufRead) -> Result<Self, ErrorKind> {
        let mut players: Option<Vec<String>> = None;
        let mut categories: [Option<Vec<String>>; 3] = [None, None, None];
        let mut lines = Vec::default();

        let mut buffer = String::default();
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            let content = match buffer.split_once('#') {
                Some((content, _comment)) => content,
                None => buffer.as_str(),
            };
            let mut words = content.split_whitespace();
            let Some(keyword) = words.next() else {
                continue;
            };
            let arguments = words.map(String::from).collect::<Vec<_>>();
            let line_error = err::ParseError::Line(line_counter);

            if let Some(index) = CATEGORY_NAMES.iter().position(|name| *name == keyword) {
                if !lines.is_empty() || categories[index].is_some() {
                    return Err(line_error.into());
                }
                categories[index] = Some(arguments);
                continue;
            }

            if keyword == "players" {
                if !lines.is_empty() || players.is_some() {
                    return Err(line_error.into());
                }
                players = Some(arguments);
                continue;
            }

            match parse_command(keyword, arguments) {
                Some(command) => lines.push(Line {
                    number: line_counter,
                    command,
                }),
                None => {
                    log::error!(target: targets::PARSE, "Unreadable command at line {line_counter}: {}", buffer.trim_end());
                    return Err(line_error.into());
                }
            }
        }

        let roster = match (players, categories) {
            (None, [None, None, None]) => Roster::classic(),

            (players, [suspects, weapons, rooms]) => {
                let players = players.unwrap_or_default();
                let players = players.iter().map(String::as_str).collect::<Vec<_>>();
                let category = |index: usize, items: Option<Vec<String>>| Category {
                    name: CATEGORY_NAMES[index].to_string(),
                    items: items.unwrap_or_default(),
                };
                Roster::new(
                    &players,
                    [category(0, suspects), category(1, weapons), category(2, rooms)],
                )?
            }
        };

        log::info!(target: targets::PARSE, "Read a script of {} commands", lines.len());
        Ok(Script { roster, lines })
    }

    /// A fresh game on the roster of the script.
    pub fn game(&self, config: Config) -> Result<Game, ErrorKind> {
        Game::new(self.roster.clone(), config)
    }
}

/// The command of a line, if the line has the form of some command.
fn parse_command(keyword: &str, arguments: Vec<String>) -> Option<Command> {
    match keyword {
        "hand" => {
            let mut arguments = arguments.into_iter();
            let owner = arguments.next()?;
            Some(Command::Hand {
                owner,
                items: arguments.collect(),
            })
        }

        "suggest" => {
            let [suggester, item1, item2, item3, refuter, shown] = <[String; 6]>::try_from(arguments).ok()?;
            Some(Command::Suggest {
                suggester,
                items: [item1, item2, item3],
                refuter: optional(refuter),
                shown: optional(shown),
            })
        }

        "accuse" => {
            let [accuser, item1, item2, item3, correct] = <[String; 5]>::try_from(arguments).ok()?;
            Some(Command::Accuse {
                accuser,
                items: [item1, item2, item3],
                correct: correct.parse().ok()?,
            })
        }

        "notepad" if arguments.is_empty() => Some(Command::Notepad),

        _ => None,
    }
}

/// `-` stands for nothing.
fn optional(argument: String) -> Option<String> {
    match argument.as_str() {
        "-" => None,
        _ => Some(argument),
    }
}

impl Game {
    /// Applies a command to the game.
    ///
    /// [Command::Notepad] does not change the game, and is left to the caller.
    pub fn apply(&mut self, command: &Command) -> Result<(), ErrorKind> {
        match command {
            Command::Hand { owner, items } => {
                let items = items.iter().map(String::as_str).collect::<Vec<_>>();
                self.hand(owner, &items)
            }

            Command::Suggest {
                suggester,
                items: [item1, item2, item3],
                refuter,
                shown,
            } => self.suggest(
                suggester,
                item1,
                item2,
                item3,
                refuter.as_deref(),
                shown.as_deref(),
            ),

            Command::Accuse {
                accuser,
                items: [item1, item2, item3],
                correct,
            } => self.accuse(accuser, item1, item2, item3, *correct),

            Command::Notepad => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_without_roster_lines() {
        let script = Script::read("hand sc wh li st\nnotepad\n".as_bytes()).unwrap();

        assert_eq!(script.roster.player_count(), 6);
        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[1].number, 2);
        assert_eq!(script.lines[1].command, Command::Notepad);
    }

    #[test]
    fn suggestion_form() {
        let script = Script::read("suggest sc sc ro lo mu sc\nsuggest pl pe pi ba - -".as_bytes()).unwrap();

        assert_eq!(
            script.lines[1].command,
            Command::Suggest {
                suggester: "pl".to_string(),
                items: ["pe", "pi", "ba"].map(String::from),
                refuter: None,
                shown: None,
            }
        );
    }

    #[test]
    fn line_errors() {
        let line_error = |n| Some(ErrorKind::Parse(err::ParseError::Line(n)));

        assert_eq!(Script::read("\n# comment\nsuggest sc sc ro lo mu\n".as_bytes()).err(), line_error(3));
        assert_eq!(Script::read("accuse sc pe pi bi maybe\n".as_bytes()).err(), line_error(1));
        assert_eq!(Script::read("hand sc wh\nplayers a b\n".as_bytes()).err(), line_error(2));
        assert_eq!(Script::read("shout sc\n".as_bytes()).err(), line_error(1));
        assert_eq!(Script::read("notepad now\n".as_bytes()).err(), line_error(1));
    }

    #[test]
    fn partial_roster() {
        let script = "players a b\nsuspects s\nweapons w\n";
        assert_eq!(
            Script::read(script.as_bytes()).err(),
            Some(ErrorKind::Roster(err::RosterError::EmptyCategory))
        );
    }
}
