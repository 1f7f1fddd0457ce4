/// Allergens offered as checkboxes on the allergy page.
pub const COMMON_ALLERGENS: [&str; 12] = [
    "egg",
    "milk",
    "peanut",
    "tree nut",
    "wheat",
    "soy",
    "fish",
    "shrimp",
    "crab",
    "shellfish",
    "sesame",
    "buckwheat",
];

/// Case-insensitive allergen comparison, Unicode-aware.
pub fn same_allergen(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Trims entries, drops empty ones and removes case-insensitive duplicates,
/// keeping the first spelling seen.
pub fn normalize_allergies<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            continue;
        }
        if out.iter().any(|seen| same_allergen(seen, entry)) {
            continue;
        }
        out.push(entry.to_string());
    }
    out
}

/// Ingredients of a recipe that contain one of the user's allergies.
/// Blank allergy entries never match.
pub fn flagged_ingredients<'a>(ingredients: &'a [String], allergies: &[String]) -> Vec<&'a str> {
    let allergies: Vec<String> = allergies
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    ingredients
        .iter()
        .map(String::as_str)
        .filter(|ingredient| {
            let lower = ingredient.to_lowercase();
            allergies.iter().any(|allergy| lower.contains(allergy.as_str()))
        })
        .collect()
}
