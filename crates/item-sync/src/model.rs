//! Item Model
//!
//! Data structures matching the item service payloads.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = u32;

/// Item as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

/// Body of a create request. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

impl Item {
    /// Secondary line shown under the item name
    pub fn price_label(&self) -> String {
        format!("Price: {}", display_number(self.price))
    }
}

/// Shortest form of a number, switching to exponent notation outside
/// [1e-7, 1e21) the way browsers print numbers. Zero has no sign.
fn display_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-7..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_integer_price() {
        let item: Item = serde_json::from_str(r#"{"id":3,"name":"Plum","price":5}"#).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.price, 5.0);
    }

    #[test]
    fn test_new_item_has_no_id() {
        let body = serde_json::to_value(NewItem { name: "Pear".to_string(), price: 2.25 }).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Pear", "price": 2.25 }));
    }

    #[test]
    fn test_price_label_uses_shortest_form() {
        let whole = Item { id: 1, name: "A".to_string(), price: 5.0 };
        let frac = Item { id: 2, name: "B".to_string(), price: 1.5 };
        assert_eq!(whole.price_label(), "Price: 5");
        assert_eq!(frac.price_label(), "Price: 1.5");
    }

    #[test]
    fn test_display_number_extremes() {
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(1.5e21), "1.5e+21");
        assert_eq!(display_number(-2e22), "-2e+22");
        assert_eq!(display_number(1e-7), "0.0000001");
        assert_eq!(display_number(1.5e-8), "1.5e-8");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(123456.0), "123456");
    }
}
