//! Menu entries and their categories.
use crate::menu::MenuError;
use crate::model::rupees;
use serde::Serialize;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Which tab of the menu a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Appetizer,
    MainCourse,
    Dessert,
}

impl Category {
    /// Every category, in the order the menu presents them.
    pub const ALL: [Category; 3] = [Category::Appetizer, Category::MainCourse, Category::Dessert];

    /// Short tag used when registering dishes and when typing commands.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::MainCourse => "main",
            Category::Dessert => "dessert",
        }
    }

    /// Section title shown on the menu tab.
    pub fn title(self) -> &'static str {
        match self {
            Category::Appetizer => "Appetizers",
            Category::MainCourse => "Main Courses",
            Category::Dessert => "Desserts",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = MenuError;

    /// Accepts the tags `appetizer`, `main` and `dessert` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "appetizer" => Ok(Category::Appetizer),
            "main" => Ok(Category::MainCourse),
            "dessert" => Ok(Category::Dessert),
            _ => Err(MenuError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single entry on the menu.
///
/// Dishes are immutable once built; the menu and the cart hand out clones.
/// The display form (`"Spring Rolls - rs.500.00"`) is what the menu tabs and the
/// order list show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    name: String,
    price: f64,
    category: Category,
}

impl Dish {
    /// Creates a new Dish.
    ///
    /// # Errors
    /// Returns [`MenuError::InvalidPrice`] when `price` is negative, NaN or infinite.
    pub fn new(name: impl Into<String>, price: f64, category: Category) -> Result<Self, MenuError> {
        let name = name.into();
        if !price.is_finite() || price < 0.0 {
            return Err(MenuError::InvalidPrice { name, price });
        }
        Ok(Self { name, price, category })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, rupees(self.price))
    }
}
