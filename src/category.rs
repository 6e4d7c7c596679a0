//! The fixed set of spending categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Classifies what a transaction was spent on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, eating out, snacks.
    #[default]
    Food,
    /// Fuel, fares, parking.
    Transportation,
    /// Movies, games, outings.
    Entertainment,
    /// Clothes and other purchases.
    Shopping,
    /// Rent, utilities, subscriptions.
    Bills,
    /// Medicine, doctor visits.
    Health,
    /// Courses, books, fees.
    Education,
    /// Anything that does not fit elsewhere.
    Others,
}

impl Category {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Health,
        Category::Education,
        Category::Others,
    ];

    /// The name of the category as it is displayed and persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Others => "Others",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCategory] if `s` does not name a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidCategory(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, category::Category};

    #[test]
    fn parses_every_category_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" bills ".parse::<Category>(), Ok(Category::Bills));
        assert_eq!("HEALTH".parse::<Category>(), Ok(Category::Health));
    }

    #[test]
    fn parse_rejects_unknown_name() {
        assert_eq!(
            "Groceries".parse::<Category>(),
            Err(Error::InvalidCategory("Groceries".to_owned()))
        );
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Transportation).unwrap();

        assert_eq!(json, "\"Transportation\"");
    }

    #[test]
    fn default_is_food() {
        assert_eq!(Category::default(), Category::Food);
    }
}
