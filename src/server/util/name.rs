/// Joins first name and both surnames with single spaces, skipping blank parts.
///
/// # Returns
/// - `Some(String)` - At least one non-blank part
/// - `None` - Every part is blank or missing
pub fn full_name(person: &entity::person::Model) -> Option<String> {
    let parts: Vec<&str> = [
        Some(person.first_name.as_str()),
        person.paternal_surname.as_deref(),
        person.maternal_surname.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect();

    (!parts.is_empty()).then(|| parts.join(" "))
}
