//! Категории страниц панели.
//!
//! Корневой элемент страницы несёт `id` вида `{view}--{category}` и
//! `data-page-category` с одной из констант ниже.

/// Table of rows returned by `getAll`.
pub const PAGE_CAT_LIST: &str = "list";

/// Single row opened from the list (edit, custom actions).
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// `{view}--{category}` with both parts non-empty
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((view, category)) => !view.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// BEM class of the page root for a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("get_view--list"));
        assert!(!is_valid_page_id("get_view"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("get_view--"));
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(!is_known_category("dashboard"));
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
    }
}
