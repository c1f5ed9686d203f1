use restaurant_desk::billing::{generate_invoice, Invoice, InvoiceId};
use restaurant_desk::menu::Menu;
use restaurant_desk::model::{Category, Customer, Dish, Order};

fn house_dish(category: Category, name: &str) -> Dish {
    let menu = Menu::house().unwrap();
    menu.dishes(category)
        .iter()
        .find(|dish| dish.name() == name)
        .cloned()
        .unwrap_or_else(|| panic!("{} not on the menu", name))
}

#[test]
fn test_invoice_for_asha_totals_to_two_decimals() {
    let mut order = Order::new();
    order.add(house_dish(Category::Appetizer, "Spring Rolls"));
    order.add(house_dish(Category::Dessert, "Cheesecake"));

    let text = generate_invoice(&Customer::new("Asha", "999"), &order);

    assert!(text.starts_with("Invoice ID: "));
    assert!(text.contains("- Spring Rolls: rs.500.00\n"));
    assert!(text.contains("- Cheesecake: rs.200.99\n"));
    assert!(text.contains("\nTotal: rs.700.99\n"));
}

#[test]
fn test_invoice_lists_duplicates_in_order() {
    let mut order = Order::new();
    order.add(house_dish(Category::Dessert, "Cupcake"));
    order.add(house_dish(Category::MainCourse, "Veggie Burger"));
    order.add(house_dish(Category::Dessert, "Cupcake"));

    let invoice = Invoice::new(InvoiceId::from("feedbeef"), &Customer::new("Ravi", "12345"), &order);
    let text = invoice.render();
    let items: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("- "))
        .map(|line| line.trim_start_matches("- "))
        .collect();

    assert_eq!(
        items,
        vec!["Cupcake: rs.60.59", "Veggie Burger: rs.500.00", "Cupcake: rs.60.59"]
    );
    assert!(text.ends_with("Total: rs.621.18\n"));
}

#[test]
fn test_invoice_is_a_snapshot_of_the_order() {
    let mut order = Order::new();
    order.add(house_dish(Category::MainCourse, "Beef Steak"));
    let invoice = Invoice::new(InvoiceId::from("00c0ffee"), &Customer::new("Asha", "999"), &order);

    order.clear();

    assert_eq!(invoice.items.len(), 1);
    assert_eq!(invoice.total, 1500.0);
}
