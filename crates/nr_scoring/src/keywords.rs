use std::collections::HashMap;

/// Sum of exact token counts of each keyword in `text`.
///
/// Both sides are lowercased and `text` is split on whitespace, so a keyword
/// containing a space never matches.
pub fn score<S: AsRef<str>>(text: &str, keywords: &[S]) -> u64 {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for token in lowered.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }

    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref().to_lowercase();
            counts.get(keyword.as_str()).copied().unwrap_or(0)
        })
        .sum()
}
