/// Category assigned whenever a menu selection cannot be resolved.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Suggestions offered on a fresh session.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Food", "Transport", "Entertainment", "Bills", "Other"];

/// Ordered menu of suggested category names.
///
/// The registry only drives menus; expenses carry free-form category strings and
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

/// Outcome of turning a raw menu answer into a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryResolution {
    Selected(String),
    /// The "add a new category" slot, one past the last entry.
    CreateNew,
    /// Out of range or non-numeric; carries [`FALLBACK_CATEGORY`].
    Fallback(String),
}

impl CategoryResolution {
    /// Category name for flows that never offer the "new category" slot.
    pub fn into_name(self) -> String {
        match self {
            CategoryResolution::Selected(name) | CategoryResolution::Fallback(name) => name,
            CategoryResolution::CreateNew => FALLBACK_CATEGORY.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CategoryResolution::Fallback(_))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Menu number of the "add a new category" entry.
    pub fn new_category_slot(&self) -> usize {
        self.names.len() + 1
    }

    /// Appends a trimmed name and returns it; blank names are ignored.
    /// Duplicates are not checked.
    pub fn add(&mut self, name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.names.push(trimmed.to_string());
        Some(trimmed.to_string())
    }

    /// Resolves a 1-based menu answer. With `allow_new`, the slot after the last
    /// entry asks for a new category instead of falling back.
    pub fn resolve(&self, choice: &str, allow_new: bool) -> CategoryResolution {
        let Ok(number) = choice.trim().parse::<usize>() else {
            return CategoryResolution::Fallback(FALLBACK_CATEGORY.to_string());
        };
        if allow_new && number == self.new_category_slot() {
            return CategoryResolution::CreateNew;
        }
        match number.checked_sub(1).and_then(|idx| self.names.get(idx)) {
            Some(name) => CategoryResolution::Selected(name.clone()),
            None => CategoryResolution::Fallback(FALLBACK_CATEGORY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_defaults() {
        let registry = CategoryRegistry::new();
        assert_eq!(
            registry.list(),
            ["Food", "Transport", "Entertainment", "Bills", "Other"]
        );
        assert_eq!(registry.new_category_slot(), 6);
    }

    #[test]
    fn add_trims_and_skips_blank_names() {
        let mut registry = CategoryRegistry::new();
        assert_eq!(registry.add("  Pets "), Some("Pets".to_string()));
        assert_eq!(registry.add("   "), None);
        assert_eq!(registry.add("Food"), Some("Food".to_string()));
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.list()[5], "Pets");
    }

    #[test]
    fn resolve_handles_menu_numbers() {
        let registry = CategoryRegistry::new();
        assert_eq!(
            registry.resolve("2", true),
            CategoryResolution::Selected("Transport".into())
        );
        assert_eq!(registry.resolve(" 1 ", false).into_name(), "Food");
        assert_eq!(registry.resolve("6", true), CategoryResolution::CreateNew);
    }

    #[test]
    fn resolve_falls_back_to_other() {
        let registry = CategoryRegistry::new();
        for choice in ["0", "6", "42", "-1", "abc", ""] {
            let resolved = registry.resolve(choice, false);
            assert!(resolved.is_fallback(), "choice `{choice}`");
            assert_eq!(resolved.into_name(), FALLBACK_CATEGORY);
        }
        assert!(registry.resolve("7", true).is_fallback());
    }
}
