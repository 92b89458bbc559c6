use crate::domain::model::RoastRequest;

/// Roasts that quote the caller's own numbers back at them.
///
/// Pure and total: empty strings or zero/negative amounts give awkward but
/// valid sentences.
pub fn contextual_roasts(request: &RoastRequest) -> [String; 3] {
    let price = display_amount(request.purchase_price);
    let regret = floored_amount(request.regret_value);
    let item = &request.item;
    let crypto = &request.crypto;

    [
        format!("Your ${price} {item} is now worth ${regret}. Think about that."),
        format!("That {item} just cost you ${regret} in {crypto}."),
        format!("{item}? Really? That's ${regret} you'll never see again."),
    ]
}

/// `45000.9` -> `45,000`, `-1234.5` -> `-1,235`. Saturates outside the `i64` range.
pub fn floored_amount(value: f64) -> String {
    let floored = if value.is_finite() { value.floor() as i64 } else { 0 };
    let digits = group_digits(&floored.unsigned_abs().to_string());
    if floored < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Thousands-grouped with up to three fraction digits, e.g. `1234.5` -> `1,234.5`.
pub fn grouped_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = group_digits(int_part);
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }

    // -0.0001 之類四捨五入成 0 的值不帶負號
    if value < 0.0 && result != "0" {
        result.insert(0, '-');
    }
    result
}

/// Shortest plain rendering of a number: `5.0` -> `5`, `4.5` -> `4.5`.
pub fn display_amount(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    value.to_string()
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Intensity;

    #[test]
    fn test_contextual_roasts_embed_context() {
        let request = RoastRequest::new("coffee", 45000.75, "BTC", 5.0, Intensity::Savage);
        let roasts = contextual_roasts(&request);

        assert_eq!(
            roasts[0],
            "Your $5 coffee is now worth $45,000. Think about that."
        );
        assert_eq!(roasts[1], "That coffee just cost you $45,000 in BTC.");
        assert_eq!(
            roasts[2],
            "coffee? Really? That's $45,000 you'll never see again."
        );
    }

    #[test]
    fn test_contextual_roasts_with_empty_item() {
        let request = RoastRequest::new("", 0.0, "", 0.0, Intensity::Medium);
        let roasts = contextual_roasts(&request);

        assert_eq!(roasts[1], "That  just cost you $0 in .");
        assert!(roasts.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn test_floored_amount() {
        assert_eq!(floored_amount(0.0), "0");
        assert_eq!(floored_amount(999.99), "999");
        assert_eq!(floored_amount(1000.0), "1,000");
        assert_eq!(floored_amount(1234567.89), "1,234,567");
        assert_eq!(floored_amount(-1234.5), "-1,235");
        assert_eq!(floored_amount(-0.5), "-1");
        assert_eq!(floored_amount(f64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn test_grouped_amount() {
        assert_eq!(grouped_amount(45000.0), "45,000");
        assert_eq!(grouped_amount(1234.5), "1,234.5");
        assert_eq!(grouped_amount(0.12345), "0.123");
        assert_eq!(grouped_amount(-9876543.21), "-9,876,543.21");
        assert_eq!(grouped_amount(-0.0001), "0");
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(display_amount(5.0), "5");
        assert_eq!(display_amount(4.5), "4.5");
        assert_eq!(display_amount(-0.0), "0");
        assert_eq!(display_amount(-20.0), "-20");
    }
}
