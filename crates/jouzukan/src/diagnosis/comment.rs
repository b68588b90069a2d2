use super::dimension::Dimension;
use super::domain::Profile;

/// Highest scoring dimension; the earliest dimension wins ties.
pub fn dominant_dimension(profile: &Profile) -> Dimension {
    let mut best = Dimension::ALL[0];
    let mut best_value = f64::NEG_INFINITY;
    for (dimension, value) in profile.iter() {
        if value > best_value {
            best = dimension;
            best_value = value;
        }
    }
    best
}

/// Templated comment built around the dominant dimension.
pub fn generate_comment(profile: &Profile) -> String {
    let dimension = dominant_dimension(profile);
    format!(
        "ふむ…… いまのあなたは、『{}』のちからが、じょじょに出てきとるようじゃ。{}",
        dimension.label(),
        dimension.affirmation()
    )
}

/// The `count` strongest dimensions, descending, ties in enumeration order.
pub fn top_strengths(profile: &Profile, count: usize) -> Vec<Dimension> {
    let mut ranked: Vec<(Dimension, f64)> = profile.iter().collect();
    // stable sort keeps enumeration order among equal scores
    ranked.sort_by(|left, right| right.1.total_cmp(&left.1));
    ranked
        .into_iter()
        .take(count)
        .map(|(dimension, _)| dimension)
        .collect()
}
