/// Ordered, deduplicated list of ingredient names entered by the user.
///
/// Entries are never empty and never repeated (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pantry a fresh session starts with.
    pub fn starter() -> Self {
        let mut set = Self::new();
        for item in ["Tomatoes", "Onion", "Garlic"] {
            set.add(item);
        }
        set
    }

    /// Append `candidate` (trimmed) unless it is blank or already present.
    ///
    /// Returns whether the set changed.
    pub fn add(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.is_empty() || self.contains(candidate) {
            return false;
        }
        self.items.push(candidate.to_string());
        true
    }

    /// Remove the entry equal to `target`. Returns whether the set changed.
    pub fn remove(&mut self, target: &str) -> bool {
        match self.items.iter().position(|item| item == target) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `item` is already in the set (exact match).
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    /// Number of ingredients.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ingredients in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Ingredients in insertion order, as stored.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Readable enumeration used in prompts, e.g. "Tomatoes, Onion, Garlic".
    pub fn enumerate(&self) -> String {
        self.items.join(", ")
    }
}

impl<'a> FromIterator<&'a str> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

impl FromIterator<String> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(&item);
        }
        set
    }
}
