/// The fixed chromosome-identifier partition used as comparison cohorts.
///
/// "Small" is a closed set of identifiers (a domain convention, not a length
/// threshold); every chromosome not in the set falls in the "large" group.
/// The default matches S. cerevisiae chromosomes I, III and VI, the three
/// shortest chromosomes of the organism.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    small: Vec<u32>,
}

impl GroupConfig {
    pub fn new(small: Vec<u32>) -> Self {
        Self { small }
    }

    pub fn is_small(&self, chr: u32) -> bool {
        self.small.contains(&chr)
    }

    pub fn small_set(&self) -> &[u32] {
        &self.small
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            small: vec![1, 3, 6],
        }
    }
}
