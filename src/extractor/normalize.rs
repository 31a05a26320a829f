/// Folds the accented letters and typographic apostrophe found in the
/// French labels to their plain ASCII counterparts.
fn fold_char(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'à' | 'â' | 'ä' => 'a',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        '’' => '\'',
        other => other,
    }
}

/// Canonicalizes a label for dictionary lookup.
///
/// Lower-cases and trims the text, folds accents, drops colons and collapses
/// whitespace runs to a single space, so `"Région:"`, `"region"` and
/// `"RÉGION :"` all become `"region"`. The transform is idempotent.
pub fn normalize_label(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ':')
        .map(fold_char)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
