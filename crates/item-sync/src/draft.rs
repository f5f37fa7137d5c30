//! Item Draft
//!
//! Raw form input and its validation into a create request.

use crate::error::ValidationError;
use crate::model::NewItem;

/// Unvalidated contents of the add-item form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Check the draft and build the request body.
    ///
    /// The name is taken as typed and only has to be non-empty.
    /// The price is read from its longest leading decimal literal, so
    /// `"2.25abc"` is 2.25; it must exist and be finite.
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price = numeric_prefix(&self.price)
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .filter(|p| p.is_finite())
            .ok_or_else(|| ValidationError::InvalidPrice(self.price.clone()))?;

        Ok(NewItem {
            name: self.name.clone(),
            price,
        })
    }
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]` after leading whitespace.
///
/// A dangling exponent marker is left out, so `"1e"` yields `"1"`.
fn numeric_prefix(input: &str) -> Option<&str> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let item = ItemDraft::new("Pear", "2.25").validate().unwrap();
        assert_eq!(item.name, "Pear");
        assert_eq!(item.price, 2.25);
    }

    #[test]
    fn test_price_is_trimmed() {
        let item = ItemDraft::new("Fig", " 3 ").validate().unwrap();
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(ItemDraft::new("", "5").validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_empty_name_checked_before_price() {
        assert_eq!(ItemDraft::new("", "abc").validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        for price in ["abc", "", "  ", ".", "-", "$5", "NaN", "inf", "Infinity", "-infinity", "1e999"] {
            let result = ItemDraft::new("Pear", price).validate();
            assert_eq!(result, Err(ValidationError::InvalidPrice(price.to_string())), "price {:?}", price);
        }
    }

    #[test]
    fn test_leading_number_accepted() {
        let cases = [
            ("2.25abc", 2.25),
            ("1.2.3", 1.2),
            ("12 USD", 12.0),
            ("3,50", 3.0),
            (".5", 0.5),
            ("5.", 5.0),
            ("1e3x", 1000.0),
            ("2e", 2.0),
            ("-1.5e-1kg", -0.15),
        ];
        for (price, expected) in cases {
            let item = ItemDraft::new("Pear", price).validate().unwrap();
            assert_eq!(item.price, expected, "price {:?}", price);
        }
    }

    #[test]
    fn test_whitespace_name_kept_as_typed() {
        let item = ItemDraft::new("  ", "1").validate().unwrap();
        assert_eq!(item.name, "  ");
    }

    #[test]
    fn test_negative_and_zero_prices_accepted() {
        assert_eq!(ItemDraft::new("Gift", "0").validate().unwrap().price, 0.0);
        assert_eq!(ItemDraft::new("Refund", "-4.5").validate().unwrap().price, -4.5);
    }
}
