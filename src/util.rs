// Inline style value helpers

/// `translateX` for a row dragged `offset_px` to the left.
pub fn translate_left(offset_px: f64) -> String {
    if offset_px <= 0.0 {
        "translateX(0)".to_string()
    } else {
        format!("translateX(-{}px)", trim_px(offset_px))
    }
}

pub fn px(value: f64) -> String {
    format!("{}px", trim_px(value))
}

/// Whole pixels print without a fraction; `-0` prints as `0`.
fn trim_px(value: f64) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Number input values print like the page would write them: `3`, `2.5`.
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_and_offsets() {
        assert_eq!(translate_left(0.0), "translateX(0)");
        assert_eq!(translate_left(100.0), "translateX(-100px)");
        assert_eq!(translate_left(42.5), "translateX(-42.5px)");
        assert_eq!(px(-50.0), "-50px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(-12.5), "-12.5px");
        assert_eq!(px(3.001), "3px");
    }

    #[test]
    fn quantities() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.5");
    }
}
