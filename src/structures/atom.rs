/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, the atom fixed to be true, or:
- *u - 1* is an atom.

That is, the atoms of a context are [0..*m*) for some *m*, and atoms of interest are [1..*m*).
This allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`, and for the sign of an integer to stand for the polarity of a literal.

```rust
# use clue_sat::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..97).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- For the game of Clue an atom stands for the proposition that some owner holds some card.
  See [roster](crate::clue::roster) for the encoding.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom `0` is fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Limited by the representation of literals as (signed) integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
