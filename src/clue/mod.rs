/*!
The game of Clue, as a propositional knowledge base.

- [roster] --- players, items, and the encoding of 'owner holds item' as an atom.
- [axioms] --- clauses true of every game.
- [events] --- clauses from observed hands, suggestions, and accusations.
- [game](Game) --- a roster together with a context, and queries on the context.
- [notepad] --- a grid of the entailments of every 'owner holds item' literal.
- [script] --- reading a game from lines of text.
*/

pub mod axioms;
pub mod events;
mod game;
pub use game::Game;
pub mod notepad;
pub mod roster;
pub mod script;
