use mandi_core::Money;

const UNITS: [&str; 10] = [
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

/// Render a rupee amount as the English words printed on invoice documents,
/// grouped by the Indian numbering system (crore, lakh, thousand, hundred).
///
/// A zero integer part renders as "Zero Rupees"; a non-zero paise part is
/// appended as "and ... Paise". Amounts reaching the converter have already
/// passed validation, so negative input is clamped to zero.
pub fn amount_in_words(amount: Money) -> String {
    let total_paise = amount.paise().max(0) as u64;
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    let mut parts: Vec<&'static str> = Vec::new();
    if rupees == 0 {
        parts.push("Zero");
    } else {
        push_rupee_words(rupees, &mut parts);
    }
    parts.push("Rupees");

    if paise > 0 {
        parts.push("and");
        push_two_digits(paise, &mut parts);
        parts.push("Paise");
    }

    parts.join(" ")
}

fn push_rupee_words(n: u64, parts: &mut Vec<&'static str>) {
    if n == 0 {
        return;
    }
    if n >= 1_00_00_000 {
        push_rupee_words(n / 1_00_00_000, parts);
        parts.push("Crore");
        push_rupee_words(n % 1_00_00_000, parts);
        return;
    }

    let lakh = n / 1_00_000;
    let thousand = (n % 1_00_000) / 1_000;
    let hundred = (n % 1_000) / 100;
    let rest = n % 100;

    if lakh > 0 {
        push_two_digits(lakh, parts);
        parts.push("Lakh");
    }
    if thousand > 0 {
        push_two_digits(thousand, parts);
        parts.push("Thousand");
    }
    if hundred > 0 {
        parts.push(UNITS[hundred as usize]);
        parts.push("Hundred");
    }
    push_two_digits(rest, parts);
}

fn push_two_digits(n: u64, parts: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=9 => parts.push(UNITS[n as usize]),
        10..=19 => parts.push(TEENS[(n - 10) as usize]),
        _ => {
            parts.push(TENS[(n / 10) as usize]);
            if n % 10 != 0 {
                parts.push(UNITS[(n % 10) as usize]);
            }
        }
    }
}
