//! Field-level samplers shared by the entity generation routines.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

const AREA_CODES: [u32; 5] = [555, 666, 777, 888, 999];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
];

const STREET_NAMES: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Elm St",
    "Maple Dr",
    "Pine St",
    "Cedar Ave",
    "Washington St",
    "Park Ave",
];

const CITIES: &[&str] = &[
    "Springfield",
    "Riverside",
    "Franklin",
    "Georgetown",
    "Madison",
    "Clinton",
    "Greenville",
    "Troy",
];

const STATES: &[&str] = &["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];

/// Uniform pick from a fixed, non-empty vocabulary.
pub(crate) fn pick<'a>(values: &[&'a str], rng: &mut ChaCha8Rng) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// US phone number in the fixture shape `(555) 234-5678`. Area codes are
/// restricted to obviously fake ranges.
pub(crate) fn phone_number(rng: &mut ChaCha8Rng) -> String {
    let area = AREA_CODES[rng.random_range(0..AREA_CODES.len())];
    let exchange = rng.random_range(200..=999);
    let number = rng.random_range(1000..=9999);
    format!("({area}) {exchange}-{number}")
}

pub(crate) fn email(first_name: &str, last_name: &str, rng: &mut ChaCha8Rng) -> String {
    let domain = pick(EMAIL_DOMAINS, rng);
    format!(
        "{}.{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        domain
    )
}

/// Date of birth for an adult patient aged 18 to 95 at the anchor date.
pub(crate) fn date_of_birth(anchor: NaiveDateTime, rng: &mut ChaCha8Rng) -> String {
    let age = rng.random_range(18..=95);
    let days = (f64::from(age) * 365.25) as i64;
    format_date(anchor.date() - Duration::days(days))
}

pub(crate) fn street_address(rng: &mut ChaCha8Rng) -> String {
    let number = rng.random_range(1..=9999);
    let zip = rng.random_range(10000..=99999);
    format!(
        "{} {}, {}, {} {}",
        number,
        pick(STREET_NAMES, rng),
        pick(CITIES, rng),
        pick(STATES, rng),
        zip
    )
}

/// Vital signs summary, e.g. `BP: 120/80, HR: 72, Temp: 37°C`.
pub(crate) fn vital_signs(rng: &mut ChaCha8Rng) -> String {
    format!(
        "BP: {}/{}, HR: {}, Temp: {}°C",
        rng.random_range(110..=180),
        rng.random_range(70..=120),
        rng.random_range(60..=100),
        rng.random_range(36..=38)
    )
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Seconds-precision ISO-8601 timestamp without a zone suffix, the format
/// the original fixture files carry.
pub(crate) fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;

    use super::*;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn phone_numbers_use_fake_area_codes() {
        let mut rng = rng(1);
        for _ in 0..100 {
            let phone = phone_number(&mut rng);
            let area: u32 = phone[1..4].parse().unwrap();
            assert!(AREA_CODES.contains(&area), "unexpected area code in {phone}");
            assert_eq!(&phone[0..1], "(");
            assert_eq!(&phone[4..6], ") ");
            assert_eq!(&phone[9..10], "-");
            assert_eq!(phone.len(), 14);
        }
    }

    #[test]
    fn emails_are_lowercased_names_at_known_domains() {
        let mut rng = rng(2);
        let email = email("Mary", "Smith", &mut rng);
        let (local, domain) = email.split_once('@').unwrap();
        assert_eq!(local, "mary.smith");
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn dates_of_birth_fall_in_the_adult_age_band() {
        let mut rng = rng(3);
        for _ in 0..100 {
            let dob = NaiveDate::parse_from_str(&date_of_birth(anchor(), &mut rng), "%Y-%m-%d")
                .unwrap();
            let age_days = (anchor().date() - dob).num_days();
            assert!(age_days >= (18.0 * 365.25) as i64);
            assert!(age_days <= (95.0 * 365.25) as i64);
        }
    }

    #[test]
    fn addresses_have_street_city_state_zip_segments() {
        let mut rng = rng(4);
        let address = street_address(&mut rng);
        let segments: Vec<&str> = address.split(", ").collect();
        assert_eq!(segments.len(), 3);
        assert!(CITIES.contains(&segments[1]));
        let (state, zip) = segments[2].split_once(' ').unwrap();
        assert!(STATES.contains(&state));
        assert_eq!(zip.len(), 5);
    }

    #[test]
    fn vital_signs_stay_in_range() {
        let mut rng = rng(5);
        let vitals = vital_signs(&mut rng);
        assert!(vitals.starts_with("BP: "));
        assert!(vitals.contains(", HR: "));
        assert!(vitals.ends_with("°C"));
    }

    #[test]
    fn timestamps_use_second_precision_iso_format() {
        assert_eq!(format_timestamp(anchor()), "2024-06-01T12:00:00");
        assert_eq!(format_date(anchor().date()), "2024-06-01");
    }
}
