//! The static catalog of dishes, one ordered section per [`Category`].
//!
//! The menu is filled once at startup by [`Menu::house`] and only read afterwards.

pub mod error;

pub use error::*;

use crate::model::{Category, Dish};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Menu {
    appetizers: Vec<Dish>,
    main_courses: Vec<Dish>,
    desserts: Vec<Dish>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// The menu served by the restaurant.
    pub fn house() -> Result<Self, MenuError> {
        const HOUSE: [(&str, &str, f64); 15] = [
            ("appetizer", "Spring Rolls", 500.0),
            ("appetizer", "Garlic Bread", 400.0),
            ("appetizer", "Chicken Wings", 600.0),
            ("appetizer", "Spicy Chips", 200.0),
            ("appetizer", "Stuffed Mushrooms", 300.0),
            ("main", "Grilled Chicken", 1200.0),
            ("main", "Pasta Alfredo", 1100.0),
            ("main", "Beef Steak", 1500.0),
            ("main", "Veggie Burger", 500.0),
            ("main", "Fish and Chips", 1300.0),
            ("dessert", "Cheesecake", 200.99),
            ("dessert", "Ice Cream", 300.99),
            ("dessert", "Brownie", 50.99),
            ("dessert", "Cupcake", 60.59),
            ("dessert", "Fruit Salad", 400.79),
        ];

        let mut menu = Self::new();
        for (tag, name, price) in HOUSE {
            let category: Category = tag.parse()?;
            menu.add_dish(Dish::new(name, price, category)?);
        }
        debug!(size = menu.len(), "House menu loaded");
        Ok(menu)
    }

    /// Appends a dish to the section of its category.
    pub fn add_dish(&mut self, dish: Dish) {
        self.section_mut(dish.category()).push(dish);
    }

    /// The dishes of one section, in menu order.
    pub fn dishes(&self, category: Category) -> &[Dish] {
        match category {
            Category::Appetizer => &self.appetizers,
            Category::MainCourse => &self.main_courses,
            Category::Dessert => &self.desserts,
        }
    }

    /// Every section paired with its category, in tab order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[Dish])> + '_ {
        Category::ALL.into_iter().map(move |category| (category, self.dishes(category)))
    }

    /// Looks up the dish at a 0-based `index` of a section.
    pub fn get(&self, category: Category, index: usize) -> Result<&Dish, MenuError> {
        self.dishes(category)
            .get(index)
            .ok_or_else(|| MenuError::NoSuchSelection {
                category: category.title().to_string(),
                row: index + 1,
            })
    }

    pub fn len(&self) -> usize {
        self.appetizers.len() + self.main_courses.len() + self.desserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn section_mut(&mut self, category: Category) -> &mut Vec<Dish> {
        match category {
            Category::Appetizer => &mut self.appetizers,
            Category::MainCourse => &mut self.main_courses,
            Category::Dessert => &mut self.desserts,
        }
    }
}
