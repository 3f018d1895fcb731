use chrono::Datelike;

/// Whether two dates fall on the same calendar day. Two missing dates count
/// as the same; one missing date never matches a present one.
pub fn is_same_date<A, B>(a: Option<&A>, b: Option<&B>) -> bool
where
    A: Datelike,
    B: Datelike,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a.year(), a.month(), a.day()) == (b.year(), b.month(), b.day()),
        _ => false,
    }
}
