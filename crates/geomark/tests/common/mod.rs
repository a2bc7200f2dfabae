use rand::{SeedableRng, rngs::SmallRng};

pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(0x6765_6f6d_6172_6b)
}

/// Checks `DD°MM′SS″` with exactly `degree_digits` degree digits.
fn is_dms(s: &str, degree_digits: usize) -> bool {
    let Some((degrees, rest)) = s.split_once('°') else {
        return false;
    };
    let Some((minutes, rest)) = rest.split_once('′') else {
        return false;
    };
    let Some(seconds) = rest.strip_suffix('″') else {
        return false;
    };

    [(degrees, degree_digits), (minutes, 2), (seconds, 2)]
        .iter()
        .all(|(part, len)| part.len() == *len && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Matches `lat: \d{2}°\d{2}′\d{2}″, lng: \d{3}°\d{2}′\d{2}″`.
pub fn matches_dms_pattern(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("lat: ") else {
        return false;
    };
    let Some((lat, lng)) = rest.split_once(", lng: ") else {
        return false;
    };
    is_dms(lat, 2) && is_dms(lng, 3)
}
