//! The customer's in-progress cart.

use crate::model::Dish;
use serde::Serialize;

/// An ordered list of dishes; the same dish may appear more than once.
///
/// The total is always recomputed from the items, so it cannot drift from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Order {
    items: Vec<Dish>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dish to the end of the order.
    pub fn add(&mut self, dish: Dish) {
        self.items.push(dish);
    }

    /// Removes the first dish whose name matches `name`, ignoring case.
    ///
    /// Returns `false` and leaves the order untouched when nothing matches.
    pub fn remove(&mut self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        match self.items.iter().position(|dish| dish.name().to_lowercase() == wanted) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of the prices of every item; zero when empty.
    pub fn total(&self) -> f64 {
        // Empty orders total +0.0, never -0.0.
        self.items.iter().fold(0.0, |total, dish| total + dish.price())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Dish] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn dish(name: &str, price: f64) -> Dish {
        Dish::new(name, price, Category::MainCourse).unwrap()
    }

    #[test]
    fn test_total_is_sum_of_added_prices() {
        let mut order = Order::new();
        assert_eq!(order.total(), 0.0);

        let prices = [500.0, 200.99, 60.59, 1500.0, 60.59];
        for (i, price) in prices.iter().enumerate() {
            order.add(dish(&format!("dish {}", i), *price));
        }

        let expected: f64 = prices.iter().sum();
        assert!((order.total() - expected).abs() < 1e-9);
        assert_eq!(order.len(), prices.len());
    }

    #[test]
    fn test_remove_only_touches_matching_dish() {
        let mut order = Order::new();
        order.add(dish("Spring Rolls", 500.0));
        order.add(dish("Beef Steak", 1500.0));
        order.add(dish("Brownie", 50.99));

        assert!(order.remove("beef steak"));

        let names: Vec<&str> = order.items().iter().map(Dish::name).collect();
        assert_eq!(names, vec!["Spring Rolls", "Brownie"]);
        assert!((order.total() - 550.99).abs() < 1e-9);
    }

    #[test]
    fn test_remove_takes_first_duplicate_only() {
        let mut order = Order::new();
        order.add(dish("Cupcake", 60.59));
        order.add(dish("Brownie", 50.99));
        order.add(dish("Cupcake", 60.59));

        assert!(order.remove("CUPCAKE"));

        let names: Vec<&str> = order.items().iter().map(Dish::name).collect();
        assert_eq!(names, vec!["Brownie", "Cupcake"]);
    }

    #[test]
    fn test_remove_missing_leaves_order_unchanged() {
        let mut order = Order::new();
        order.add(dish("Veggie Burger", 500.0));
        let before = order.clone();

        assert!(!order.remove("Fish and Chips"));
        assert_eq!(order, before);

        let mut empty = Order::new();
        assert!(!empty.remove("anything"));
    }

    #[test]
    fn test_clear_resets_total_and_items() {
        let mut order = Order::new();
        order.add(dish("Grilled Chicken", 1200.0));
        order.add(dish("Pasta Alfredo", 1100.0));

        order.clear();

        assert!(order.is_empty());
        assert!(order.items().is_empty());
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn test_empty_total_is_positive_zero() {
        let mut order = Order::new();
        assert!(order.total().is_sign_positive());

        order.add(dish("Brownie", 50.99));
        order.clear();

        assert!(order.total().is_sign_positive());
        assert_eq!(crate::model::rupees(order.total()), "rs.0.00");
    }
}
