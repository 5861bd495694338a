use std::fmt;

use serde::{Deserialize, Serialize};

use crate::policy::Money;

/// Customer category used for tax and discount selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum CustomerType {
    Student,
    Staff,
    Visitor,
    Unknown,
}

impl CustomerType {
    pub const fn label(self) -> &'static str {
        match self {
            CustomerType::Student => "STUDENT",
            CustomerType::Staff => "STAFF",
            CustomerType::Visitor => "VISITOR",
            CustomerType::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => CustomerType::Student,
            "STAFF" => CustomerType::Staff,
            "VISITOR" => CustomerType::Visitor,
            _ => CustomerType::Unknown,
        }
    }
}

impl From<String> for CustomerType {
    fn from(raw: String) -> Self {
        CustomerType::parse(&raw)
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub qty: u32,
}

/// Menu kept in insertion order; re-adding an id replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn add(&mut self, item: MenuItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl FromIterator<MenuItem> for Menu {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        let mut menu = Menu::default();
        for item in iter {
            menu.add(item);
        }
        menu
    }
}
