#![allow(dead_code)]

use rand::Rng;
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 6] = [
    "currency_code",
    "units",
    "nanos",
    "credit_card_number",
    "credit_card_expiration_month",
    "credit_card_expiration_year",
];

/// Digit that makes `partial` followed by it pass the Luhn check.
pub fn luhn_check_digit(partial: &str) -> u32 {
    let sum: u32 = partial
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            let digit = c.to_digit(10).expect("partial must be digits");
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    (10 - sum % 10) % 10
}

/// A random Luhn-valid number of `length` digits starting with `prefix`.
pub fn generate_card_number<R: Rng>(rng: &mut R, prefix: &str, length: usize) -> String {
    let mut number = prefix.to_string();
    while number.len() < length - 1 {
        number.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    let check = luhn_check_digit(&number);
    number.push(char::from_digit(check, 10).unwrap());
    number
}

/// Same number with the check digit altered, so the checksum fails.
pub fn corrupt_check_digit(number: &str) -> String {
    let (body, last) = number.split_at(number.len() - 1);
    let digit = last.parse::<u32>().unwrap();
    format!("{body}{}", (digit + 1) % 10)
}

/// Groups digits in fours separated by hyphens.
pub fn hyphenate(number: &str) -> String {
    number
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn charges_csv(rows: &[[&str; 6]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(HEADER).unwrap();
        for row in rows {
            wtr.write_record(row).unwrap();
        }
        wtr.flush().unwrap();
    }
    file.flush().unwrap();
    file
}
