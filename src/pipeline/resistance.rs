/// Classify a single resistance call.
///
/// A cell is resistant iff it is present, not exactly `"-"`, and not
/// case-insensitively `"false"`. Any other present value counts as resistant,
/// including `"0"` — upstream encodings never use `0` for susceptible, and
/// callers that do must pre-normalize.
#[must_use]
pub fn is_resistant(cell: Option<&str>) -> bool {
    match cell {
        None => false,
        Some(value) => value != "-" && !value.eq_ignore_ascii_case("false"),
    }
}
