use crate::misc::log::targets::{self};

/// A named option of a configuration, with the range of permitted values.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the permitted range.
    /// Otherwise, the option is unchanged and false is returned.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                log::info!(target: targets::CONFIG, "{} set to: {value}", self.name);
                self.value = value;
                true
            }
            false => false,
        }
    }
}
