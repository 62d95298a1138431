/// English ordinal suffix for `number`.
///
/// The number is floored first. Remainders truncate toward zero and keep the
/// sign of the dividend, so negative input always yields `"th"`, as does
/// non-finite input.
///
/// Usage:
/// ```
/// assert_eq!(lodex::ordinal(142.0), "nd");
/// assert_eq!(lodex::ordinal(113.0), "th");
/// ```
pub fn ordinal(number: f64) -> &'static str {
    let number = number.floor();
    let hundred_rem = number % 100.0;
    let ten_rem = number % 10.0;

    if hundred_rem - ten_rem == 10.0 {
        return "th";
    }

    suffix_for_last_digit(ten_rem as i64)
}

/// `number` followed by its suffix, e.g. `"21st"`.
///
/// Works on the integer directly, so values past 2^53 keep their last digits.
pub fn with_ordinal(number: i64) -> String {
    let hundred_rem = number % 100;
    let ten_rem = number % 10;

    let suffix = if hundred_rem - ten_rem == 10 {
        "th"
    } else {
        suffix_for_last_digit(ten_rem)
    };

    format!("{}{}", number, suffix)
}

fn suffix_for_last_digit(digit: i64) -> &'static str {
    match digit {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
