//! Fixed transliteration table, word tokenization and slug generation.

/// Latin spelling for a Cyrillic letter, German umlaut or `ß`.
///
/// Returns `None` for every character the table does not cover.
pub fn transliterate_char(c: char) -> Option<&'static str> {
    let latin = match c {
        // Cyrillic, lowercase
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        'є' => "ye",
        'ґ' => "g",
        'ї' => "yi",

        // Cyrillic, uppercase
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' => "E",
        'Ё' => "E",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "H",
        'Ц' => "C",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Sch",
        'Ъ' => "",
        'Ы' => "Y",
        'Ь' => "",
        'Э' => "E",
        'Ю' => "Yu",
        'Я' => "Ya",
        'Є' => "Ye",
        'Ґ' => "G",
        'Ї' => "Yi",

        // German
        'ä' => "ae",
        'ö' => "oe",
        'ü' => "ue",
        'Ä' => "Ae",
        'Ö' => "Oe",
        'Ü' => "Ue",
        'ß' => "ss",

        _ => return None,
    };
    Some(latin)
}

/// Whether `c` belongs to a word: ASCII letters and digits plus every glyph
/// the transliteration table covers.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || transliterate_char(c).is_some()
}

/// Maximal runs of word characters, in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}

/// Replace every covered glyph with its Latin spelling. Anything else passes
/// through unchanged.
pub fn transliterate(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for c in text.chars() {
        match transliterate_char(c) {
            Some(latin) => res.push_str(latin),
            None => res.push(c),
        }
    }
    res
}

/// Transliterate, then join the words with `replacement`.
pub fn slugify(text: &str, replacement: &str) -> String {
    let latin = transliterate(text);
    words(&latin).collect::<Vec<_>>().join(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_letters_count_as_word_characters() {
        assert!(is_word_char('ж'));
        assert!(is_word_char('Ї'));
        assert!(is_word_char('ß'));
        assert!(!is_word_char('é'));
        assert!(!is_word_char('_'));
    }

    #[test]
    fn words_split_on_separators() {
        let found: Vec<_> = words("  hello, мир_ok!").collect();
        assert_eq!(found, vec!["hello", "мир", "ok"]);
    }

    #[test]
    fn words_of_separator_only_input_is_empty() {
        assert_eq!(words("--- !!").count(), 0);
        assert_eq!(words("").count(), 0);
    }

    #[test]
    fn transliterate_uses_digraphs() {
        assert_eq!(transliterate("Щука"), "Schuka");
        assert_eq!(transliterate("Grüße"), "Gruesse");
        assert_eq!(transliterate("объём"), "obem");
    }

    #[test]
    fn transliterate_passes_unknown_glyphs_through() {
        assert_eq!(transliterate("café ☕"), "café ☕");
    }

    #[test]
    fn slugify_with_default_replacement() {
        assert_eq!(slugify("Hello World", "-"), "Hello-World");
        assert_eq!(slugify("  Привет, мир!  ", "-"), "Privet-mir");
    }

    #[test]
    fn slugify_with_custom_replacement() {
        assert_eq!(slugify("Über die Brücke", "_"), "Ueber_die_Bruecke");
        assert_eq!(slugify("a b c", ""), "abc");
    }

    #[test]
    fn slugify_empty_input() {
        assert_eq!(slugify("", "-"), "");
        assert_eq!(slugify("!!!", "-"), "");
    }
}
