//! Parsing of the lines typed into the form.

use crate::model::Category;
use std::str::FromStr;
use thiserror::Error;

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Redraw the menu tabs.
    Menu,
    /// "Add to Order" with a row selected in one of the tabs (1-based).
    Add { category: Category, row: usize },
    /// "Remove Selected" with a row selected in the order list (1-based).
    Remove { row: usize },
    /// "Clear Order".
    Clear,
    /// Fill in the name field.
    Name(String),
    /// Fill in the contact field.
    Contact(String),
    Checkout,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no menu tab called '{0}'")]
    UnknownTab(String),

    #[error("'{0}' is not a row number")]
    InvalidRow(String),
}

/// Matches a menu tab by a prefix of its tag or title, e.g. `a`, `main`, `desserts`.
pub fn parse_tab(input: &str) -> Result<Category, CommandError> {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return Err(CommandError::UnknownTab(input.to_string()));
    }
    Category::ALL
        .into_iter()
        .find(|category| {
            category.tag().starts_with(&wanted) || category.title().to_lowercase().starts_with(&wanted)
        })
        .ok_or_else(|| CommandError::UnknownTab(input.to_string()))
}

fn parse_row(input: &str) -> Result<usize, CommandError> {
    match input.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(CommandError::InvalidRow(input.to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match word.to_lowercase().as_str() {
            "menu" => Ok(Command::Menu),
            "add" => match args.as_slice() {
                [tab, row] => Ok(Command::Add {
                    category: parse_tab(tab)?,
                    row: parse_row(row)?,
                }),
                _ => Err(CommandError::Usage("add <appetizers|main|desserts> <row>")),
            },
            "remove" => match args.as_slice() {
                [row] => Ok(Command::Remove { row: parse_row(row)? }),
                _ => Err(CommandError::Usage("remove <row>")),
            },
            "clear" => Ok(Command::Clear),
            "name" => Ok(Command::Name(rest.to_string())),
            "contact" => Ok(Command::Contact(rest.to_string())),
            "checkout" => Ok(Command::Checkout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accepts_tab_prefixes() {
        assert_eq!(
            "add appetizers 2".parse::<Command>().unwrap(),
            Command::Add { category: Category::Appetizer, row: 2 }
        );
        assert_eq!(
            "ADD m 1".parse::<Command>().unwrap(),
            Command::Add { category: Category::MainCourse, row: 1 }
        );
        assert_eq!(parse_tab("dessert").unwrap(), Category::Dessert);
        assert_eq!(parse_tab("Desserts").unwrap(), Category::Dessert);
    }

    #[test]
    fn test_fields_keep_inner_spaces() {
        assert_eq!(
            "name   Asha Rao  ".parse::<Command>().unwrap(),
            Command::Name("Asha Rao".to_string())
        );
        assert_eq!("contact".parse::<Command>().unwrap(), Command::Contact(String::new()));
    }

    #[test]
    fn test_malformed_selections_are_rejected() {
        assert_eq!("add soups 1".parse::<Command>(), Err(CommandError::UnknownTab("soups".to_string())));
        assert_eq!("remove 0".parse::<Command>(), Err(CommandError::InvalidRow("0".to_string())));
        assert_eq!("remove two".parse::<Command>(), Err(CommandError::InvalidRow("two".to_string())));
        assert!(matches!("add main".parse::<Command>(), Err(CommandError::Usage(_))));
        assert_eq!("order pizza".parse::<Command>(), Err(CommandError::Unknown("order".to_string())));
    }
}
