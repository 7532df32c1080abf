//! Category Model
//!
//! The fixed set of closet categories and the pure grouping function
//! feeding the checklist.

use crate::models::Item;

/// Fixed closet categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Accessories,
    Coats,
    Shoes,
}

impl Category {
    /// All categories, in the order tiles and checklist sections render
    pub const ALL: [Category; 5] = [
        Category::Tops,
        Category::Bottoms,
        Category::Accessories,
        Category::Coats,
        Category::Shoes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Accessories => "Accessories",
            Category::Coats => "Coats",
            Category::Shoes => "Shoes",
        }
    }

    /// Parse a stored category string. Unknown values yield `None`; the
    /// matching is exact, like the original documents.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Tops" => Some(Category::Tops),
            "Bottoms" => Some(Category::Bottoms),
            "Accessories" => Some(Category::Accessories),
            "Coats" => Some(Category::Coats),
            "Shoes" => Some(Category::Shoes),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group items under the fixed categories, preserving fetch order.
///
/// Every category is present in the output even when empty. Items whose
/// category string matches no fixed category are dropped.
pub fn group_by_category(items: &[Item]) -> Vec<(Category, Vec<Item>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let group = items
                .iter()
                .filter(|item| item.category == category.as_str())
                .cloned()
                .collect();
            (category, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> Item {
        Item {
            id: id.to_string(),
            owner_id: "u1".to_string(),
            title: format!("item {id}"),
            description: String::new(),
            category: category.to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn groups_partition_items_by_category() {
        let items = vec![
            item("1", "Tops"),
            item("2", "Shoes"),
            item("3", "Tops"),
            item("4", "Bottoms"),
        ];

        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 5);

        let grouped_total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(grouped_total, 4);

        let tops = &groups[0];
        assert_eq!(tops.0, Category::Tops);
        assert_eq!(tops.1.len(), 2);
    }

    #[test]
    fn groups_preserve_fetch_order() {
        let items = vec![item("b", "Coats"), item("a", "Coats"), item("c", "Coats")];
        let groups = group_by_category(&items);
        let coats = groups
            .iter()
            .find(|(c, _)| *c == Category::Coats)
            .map(|(_, g)| g)
            .unwrap();
        let ids: Vec<&str> = coats.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn unrecognized_category_is_excluded_from_every_group() {
        let items = vec![item("1", "Hats"), item("2", "tops")];
        let groups = group_by_category(&items);
        assert!(groups.iter().all(|(_, g)| g.is_empty()));
    }

    #[test]
    fn empty_input_yields_five_empty_groups() {
        let groups = group_by_category(&[]);
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|(_, g)| g.is_empty()));
        let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order.as_slice(), Category::ALL.as_slice());
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("Socks"), None);
    }
}
