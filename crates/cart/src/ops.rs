//! Pure cart transformations.
//!
//! Each function takes the current lines and returns the next ones; nothing
//! here touches shared state or storage. `None` means "no change": the caller
//! must neither publish nor persist.
//!
//! Lines are matched by `id`. The cart never holds two lines with the same
//! id, but a hand-edited stored document can, so every matching line is
//! rewritten rather than just the first.

use desafio_core::{CartItem, NewCartItem, ProductId};

/// Add one unit of `item`.
///
/// An existing line for the same id takes the *incoming* title, image and
/// price and keeps its own quantity plus one. A new id is appended with a
/// quantity of 1.
#[must_use]
pub fn add_to_cart(items: &[CartItem], item: NewCartItem) -> Vec<CartItem> {
    if !items.iter().any(|line| line.id == item.id) {
        let mut next = Vec::with_capacity(items.len() + 1);
        next.extend_from_slice(items);
        next.push(item.with_quantity(1));
        return next;
    }

    items
        .iter()
        .map(|line| {
            if line.id == item.id {
                item.clone().with_quantity(line.quantity.saturating_add(1))
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Add one unit to the line for `id`. Unknown ids are a no-op.
#[must_use]
pub fn increment(items: &[CartItem], id: &ProductId) -> Option<Vec<CartItem>> {
    let found = items.iter().find(|line| &line.id == id)?;
    Some(replace_matching(
        items,
        id,
        found.quantity.saturating_add(1),
        found,
    ))
}

/// Remove one unit from the line for `id`.
///
/// Unknown ids and lines already at zero are a no-op; a line at zero stays
/// in the cart.
#[must_use]
pub fn decrement(items: &[CartItem], id: &ProductId) -> Option<Vec<CartItem>> {
    let found = items.iter().find(|line| &line.id == id)?;
    let quantity = found.quantity.checked_sub(1)?;
    Some(replace_matching(items, id, quantity, found))
}

fn replace_matching(
    items: &[CartItem],
    id: &ProductId,
    quantity: u32,
    found: &CartItem,
) -> Vec<CartItem> {
    items
        .iter()
        .map(|line| {
            if &line.id == id {
                CartItem {
                    quantity,
                    ..found.clone()
                }
            } else {
                line.clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use desafio_core::Price;
    use proptest::prelude::*;

    use super::*;

    fn item(id: &str, quantity: u32) -> CartItem {
        NewCartItem::new(id, format!("Title {id}"), format!("https://img/{id}"), 10)
            .with_quantity(quantity)
    }

    #[test]
    fn test_add_fresh_id_appends_with_quantity_one() {
        let items = vec![item("a", 3)];
        let next = add_to_cart(&items, NewCartItem::new("b", "B", "u", 5));

        assert_eq!(next.len(), items.len() + 1);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].id, "b");
        assert_eq!(next[1].quantity, 1);
    }

    #[test]
    fn test_add_to_empty_cart() {
        let next = add_to_cart(&[], NewCartItem::new("a", "T", "u", 10));
        assert_eq!(
            next,
            vec![CartItem {
                id: ProductId::new("a"),
                title: "T".to_string(),
                image_url: "u".to_string(),
                price: Price::from(10),
                quantity: 1,
            }]
        );
    }

    #[test]
    fn test_add_existing_id_bumps_quantity_and_takes_new_fields() {
        let items = vec![item("a", 2), item("b", 1)];
        let next = add_to_cart(&items, NewCartItem::new("a", "Renamed", "new-url", 99));

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].quantity, 3);
        assert_eq!(next[0].title, "Renamed");
        assert_eq!(next[0].image_url, "new-url");
        assert_eq!(next[0].price, Price::from(99));
        assert_eq!(next[1], items[1]);
    }

    #[test]
    fn test_add_keeps_line_order() {
        let items = vec![item("a", 1), item("b", 1), item("c", 1)];
        let next = add_to_cart(&items, NewCartItem::new("b", "B", "", 1));
        let ids: Vec<_> = next.iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_add_accepts_empty_id() {
        let next = add_to_cart(&[], NewCartItem::new("", "", "", 0));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "");
    }

    #[test]
    fn test_increment() {
        let next = increment(&[item("a", 1)], &ProductId::new("a")).unwrap();
        assert_eq!(next, vec![item("a", 2)]);
    }

    #[test]
    fn test_increment_unknown_id_is_noop() {
        assert_eq!(increment(&[item("a", 1)], &ProductId::new("z")), None);
        assert_eq!(increment(&[], &ProductId::new("a")), None);
    }

    #[test]
    fn test_increment_saturates() {
        let next = increment(&[item("a", u32::MAX)], &ProductId::new("a")).unwrap();
        assert_eq!(next[0].quantity, u32::MAX);
    }

    #[test]
    fn test_decrement() {
        let next = decrement(&[item("a", 1), item("b", 4)], &ProductId::new("a")).unwrap();
        assert_eq!(next, vec![item("a", 0), item("b", 4)]);
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        assert_eq!(decrement(&[item("a", 0)], &ProductId::new("a")), None);
    }

    #[test]
    fn test_decrement_unknown_id_is_noop() {
        assert_eq!(decrement(&[item("a", 2)], &ProductId::new("b")), None);
    }

    #[test]
    fn test_duplicate_lines_follow_first_match() {
        let mut second = item("a", 7);
        second.title = "Second".to_string();
        let items = vec![item("a", 2), second];

        let next = increment(&items, &ProductId::new("a")).unwrap();
        assert_eq!(next, vec![item("a", 3), item("a", 3)]);
    }

    proptest! {
        #[test]
        fn test_ids_stay_unique_under_any_sequence(
            steps in prop::collection::vec((0_u8..3, 0_usize..3), 1..200)
        ) {
            let ids = ["a", "b", "c"];
            let mut items: Vec<CartItem> = Vec::new();

            for (op, which) in steps {
                let id = ids[which];
                let known = items.iter().any(|line| line.id == id);
                let before = items.len();
                items = match op {
                    0 => add_to_cart(&items, NewCartItem::new(id, id, "", 1)),
                    1 => increment(&items, &ProductId::new(id)).unwrap_or(items),
                    _ => decrement(&items, &ProductId::new(id)).unwrap_or(items),
                };

                if op == 0 {
                    let expected = if known { before } else { before + 1 };
                    prop_assert_eq!(items.len(), expected);
                } else {
                    prop_assert_eq!(items.len(), before);
                }

                let mut seen: Vec<_> = items.iter().map(|line| line.id.clone()).collect();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), items.len());
            }
        }
    }
}
