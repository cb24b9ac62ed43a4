// Menu category filter

pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Matches items whose category equals this one; `None` matches uncategorized items.
    Only(Option<String>),
}

impl CategoryFilter {
    /// Builds a filter from a button's `data-category` attribute.
    pub fn from_attr(category: Option<&str>) -> Self {
        match category {
            Some(ALL_CATEGORY) => CategoryFilter::All,
            other => CategoryFilter::Only(other.map(str::to_owned)),
        }
    }

    pub fn shows(&self, item_category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c.as_deref() == item_category,
        }
    }

    /// CSS `display` value for an item under this filter.
    pub fn display_for(&self, item_category: Option<&str>) -> &'static str {
        if self.shows(item_category) { "block" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        let f = CategoryFilter::from_attr(Some("all"));
        assert_eq!(f, CategoryFilter::All);
        assert!(f.shows(Some("desserts")));
        assert!(f.shows(None));
    }

    #[test]
    fn named_category_matches_exactly() {
        let f = CategoryFilter::from_attr(Some("mains"));
        assert!(f.shows(Some("mains")));
        assert!(!f.shows(Some("Mains")));
        assert!(!f.shows(None));
        assert_eq!(f.display_for(Some("starters")), "none");
        assert_eq!(f.display_for(Some("mains")), "block");
    }

    #[test]
    fn missing_button_category_matches_uncategorized_items() {
        let f = CategoryFilter::from_attr(None);
        assert!(f.shows(None));
        assert!(!f.shows(Some("mains")));
    }
}
