//! File categories recognized by extension.

use std::fmt;

/// Classification label for a file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Script,
    Style,
    Markup,
    Test,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] =
        [Category::Script, Category::Style, Category::Markup, Category::Test];

    /// Recognized suffixes for this category, lowercase.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Category::Script => &[".js", ".ts"],
            Category::Style => &[".scss", ".sass", ".less", ".css"],
            Category::Markup => &[".html", ".wxml"],
            Category::Test => &[".spec.ts", ".spec.js"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Script => "script",
            Category::Style => "style",
            Category::Markup => "markup",
            Category::Test => "test",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Category::Script => 1,
            Category::Style => 1 << 1,
            Category::Markup => 1 << 2,
            Category::Test => 1 << 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of categories matched by a path. Empty means unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn of(categories: &[Category]) -> Self {
        categories.iter().fold(Self::EMPTY, |set, category| set.with(*category))
    }

    #[must_use]
    pub fn with(self, category: Category) -> Self {
        CategorySet(self.0 | category.bit())
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn intersects(self, other: CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_unrecognized(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |category| self.contains(*category))
    }

    /// Dominant category: a test marker outranks the underlying script extension.
    pub fn primary(self) -> Option<Category> {
        if self.contains(Category::Test) {
            return Some(Category::Test);
        }
        self.iter().next()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unrecognized() {
            return f.write_str("unrecognized");
        }
        let names: Vec<&str> = self.iter().map(Category::as_str).collect();
        f.write_str(&names.join(", "))
    }
}
