use rand::{rngs::SmallRng, Rng, SeedableRng};

// Percentage of two-child deletes served by the predecessor under
// Replace::Random.
const PREDECESSOR_PERCENT: u8 = 49;

/// Replace pick the node that takes the place of a deleted entry
/// having both children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Replace {
    /// Rightmost entry from the left sub-tree.
    Predecessor,
    /// Leftmost entry from the right sub-tree.
    Successor,
    /// Predecessor or successor, picked by a random generator seeded
    /// with `seed`. Same seed and same sequence of operations shall
    /// produce the same tree.
    Random { seed: u128 },
}

impl Default for Replace {
    fn default() -> Replace {
        Replace::Predecessor
    }
}

/// Configuration for [`Llrb`] instances.
///
/// ```
/// use llrb_rank::{Config, Llrb, Replace};
///
/// let config = Config::new("words").set_replace(Replace::Successor);
/// let llrb: Llrb<String, u64> = Llrb::from_config(config);
/// assert_eq!(llrb.replace(), Replace::Successor);
/// ```
///
/// [`Llrb`]: crate::Llrb
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) name: String,
    pub(crate) replace: Replace,
}

impl Config {
    /// New configuration for instance identified by `name`, uses the
    /// default replace policy.
    pub fn new<S>(name: S) -> Config
    where
        S: AsRef<str>,
    {
        Config {
            name: name.as_ref().to_string(),
            replace: Default::default(),
        }
    }

    /// Set the replace policy for deleting entries with both children.
    pub fn set_replace(mut self, replace: Replace) -> Config {
        self.replace = replace;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn replace(&self) -> Replace {
        self.replace
    }
}

// Runtime counterpart of Replace, owns the generator for random policy.
#[derive(Clone)]
pub(crate) enum Picker {
    Predecessor,
    Successor,
    Random(SmallRng),
}

impl Picker {
    pub(crate) fn new(replace: Replace) -> Picker {
        match replace {
            Replace::Predecessor => Picker::Predecessor,
            Replace::Successor => Picker::Successor,
            Replace::Random { seed } => {
                Picker::Random(SmallRng::from_seed(seed.to_le_bytes()))
            }
        }
    }

    /// Return true to replace with predecessor, false for successor.
    pub(crate) fn predecessor(&mut self) -> bool {
        match self {
            Picker::Predecessor => true,
            Picker::Successor => false,
            Picker::Random(rng) => rng.gen_range(0_u8, 100) < PREDECESSOR_PERCENT,
        }
    }
}
