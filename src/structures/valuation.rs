/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology.
- Each non-zero index of the vector is interpreted as an atom.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use clue_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);
```

# Soundness

As the value of an atom is determined by using the atom as an index on the dereferenced structure, there is no structural guarantee that the returned value is for the atom.
For example, a sub-slice of a valuation is (also) a valuation, though with a shifted language.
*/

use super::atom::Atom;

/// The status of a valuation with respect to some literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom of the literal has no value.
    None,

    /// The atom of the literal has the value of the polarity of the literal.
    Set,

    /// The atom of the literal has the value opposite to the polarity of the literal.
    Conflict,
}

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator through all (Atom, Value) pairs (excluding top).
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs().filter_map(|(atom, value)| match value {
            None => Some(atom),
            Some(_) => None,
        })
    }
}
