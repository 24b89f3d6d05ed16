//! The fixed color palette shared by every chart.

/// Color assignments for the spending categories the charts expect to see.
const CATEGORY_COLORS: [(&str, &str); 7] = [
    ("Housing", "#4285F4"),
    ("Food", "#34A853"),
    ("Transportation", "#FBBC05"),
    ("Entertainment", "#A142F4"),
    ("Healthcare", "#EA4335"),
    ("Shopping", "#F06292"),
    ("Others", "#808080"),
];

/// The color used for categories outside the fixed palette.
pub const FALLBACK_COLOR: &str = "#A9A9A9";

/// Look up the display color for `category`.
///
/// The same category maps to the same color in every chart. Categories
/// outside the fixed palette all map to [FALLBACK_COLOR] so an unexpected
/// label still renders.
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_COLOR, category_color};

    #[test]
    fn known_categories_have_distinct_colors() {
        let categories = [
            "Housing",
            "Food",
            "Transportation",
            "Entertainment",
            "Healthcare",
            "Shopping",
            "Others",
        ];

        let mut colors: Vec<&str> = categories.iter().map(|name| category_color(name)).collect();
        colors.sort_unstable();
        colors.dedup();

        assert_eq!(colors.len(), categories.len());
    }

    #[test]
    fn unknown_category_gets_fallback_color() {
        assert_eq!(category_color("Subscriptions"), FALLBACK_COLOR);
        assert_eq!(category_color(""), FALLBACK_COLOR);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_ne!(category_color("Food"), FALLBACK_COLOR);
        assert_eq!(category_color("food"), FALLBACK_COLOR);
    }
}
