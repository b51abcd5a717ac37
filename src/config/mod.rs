/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each option is a [ConfigOption], which pairs a value with a name and the range of permitted values.

```rust
# use clue_sat::config::{AccusationPolicy, Config};
let mut config = Config::default();
assert!(config.accusation_policy.set(AccusationPolicy::RulesOnly));
assert_eq!(config.accusation_policy.value, AccusationPolicy::RulesOnly);
```
*/

mod accusation_policy;
pub use accusation_policy::AccusationPolicy;

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The value given to an atom when freely choosing a value for the atom.
    /// On a conflict, the opposite value is tried.
    pub decision_polarity: ConfigOption<bool>,

    /// What an incorrect accusation reveals about the cards of the accuser.
    pub accusation_policy: ConfigOption<AccusationPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decision_polarity: ConfigOption {
                name: "decision_polarity",
                min: false,
                max: true,
                value: true,
            },

            accusation_policy: ConfigOption {
                name: "accusation_policy",
                min: AccusationPolicy::MIN,
                max: AccusationPolicy::MAX,
                value: AccusationPolicy::RationalAccuser,
            },
        }
    }
}
