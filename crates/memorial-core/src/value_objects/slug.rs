//! Memorial slugs - URL-friendly unique names for memorial pages
//!
//! A slug is made of lowercase ASCII letters, digits, CJK unified ideographs
//! (U+4E00..=U+9FA5) and `-`.

use rand::Rng;

/// Maximum slug length in characters
pub const MAX_SLUG_CHARS: usize = 100;

/// Length of the random base36 suffix appended to generated slugs
const SUFFIX_LEN: usize = 4;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[inline]
fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Generate a slug from a pet's name and optional breed
///
/// A random 4-character suffix keeps slugs for pets with the same name apart.
pub fn generate_slug(pet_name: &str, pet_breed: Option<&str>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();

    generate_slug_with_suffix(pet_name, pet_breed, &suffix)
}

/// Deterministic variant of [`generate_slug`]
pub fn generate_slug_with_suffix(pet_name: &str, pet_breed: Option<&str>, suffix: &str) -> String {
    let mut base = pet_name.to_string();
    if let Some(breed) = pet_breed.filter(|b| !b.is_empty()) {
        base.push('-');
        base.push_str(breed);
    }
    base.push('-');
    base.push_str(suffix);

    let mut slug = String::with_capacity(base.len());
    let mut pending_dash = false;
    for c in base.to_lowercase().chars() {
        if is_slug_char(c) {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    let slug: String = slug.chars().take(MAX_SLUG_CHARS).collect();
    let slug = slug.trim_end_matches('-').to_string();

    if slug.is_empty() {
        format!("memorial-{suffix}")
    } else {
        slug
    }
}

/// Check that a user-supplied slug only uses allowed characters
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.chars().count() <= MAX_SLUG_CHARS
        && slug.chars().all(|c| is_slug_char(c) || c == '-')
}
