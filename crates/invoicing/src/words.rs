//! Amount-in-words rendering for the invoice footer.
//!
//! Indian numbering: ones, tens, hundreds, then thousand / lakh / crore
//! groups. Output reads "<rupees> Rupees[ and <paise> Paise] Only".

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell a positive integer in Indian-English words.
fn spell(n: u64) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            if n % 10 == 0 {
                tens.to_string()
            } else {
                format!("{} {}", tens, ONES[(n % 10) as usize])
            }
        }
        100..=999 => group(n, 100, "Hundred"),
        1_000..=99_999 => group(n, 1_000, "Thousand"),
        100_000..=9_999_999 => group(n, 100_000, "Lakh"),
        _ => group(n, 10_000_000, "Crore"),
    }
}

fn group(n: u64, divisor: u64, label: &str) -> String {
    let head = spell(n / divisor);
    let rest = n % divisor;
    if rest == 0 {
        format!("{head} {label}")
    } else {
        format!("{head} {label} {}", spell(rest))
    }
}

/// Render a currency amount as Indian-English words for invoice printing.
///
/// Paise are the fractional part rounded to the nearest hundredth; a
/// rounded value of a full hundred paise carries into the rupee part.
/// Supported input is non-negative and finite; negative amounts are a
/// form-layer rejection, asserted here in debug builds.
pub fn amount_to_words(amount: f64) -> String {
    debug_assert!(amount.is_finite() && amount >= 0.0);

    let mut rupees = amount.trunc() as u64;
    let mut paise = ((amount - amount.trunc()) * 100.0).round() as u64;
    if paise == 100 {
        rupees += 1;
        paise = 0;
    }

    let mut words = if rupees == 0 {
        "Zero Rupees".to_string()
    } else {
        format!("{} Rupees", spell(rupees))
    };
    if paise > 0 {
        words.push_str(" and ");
        words.push_str(&spell(paise));
        words.push_str(" Paise");
    }
    words.push_str(" Only");
    words
}
