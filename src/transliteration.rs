//! Russian Cyrillic to Latin transliteration for file names.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Characters that are not allowed in file names on common file systems
pub const FORBIDDEN_FILE_NAME_PATTERN: &str = r#"[<>:"/\\|?*\x00-\x1F]"#;

lazy_static! {
    static ref TRANSLIT_MAP: HashMap<char, &'static str> = [
        ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"),
        ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "y"), ('к', "k"),
        ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
        ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "ts"),
        ('ч', "ch"), ('ш', "sh"), ('щ', "sch"), ('ъ', ""), ('ы', "y"), ('ь', ""),
        ('э', "e"), ('ю', "yu"), ('я', "ya"),
        ('А', "A"), ('Б', "B"), ('В', "V"), ('Г', "G"), ('Д', "D"), ('Е', "E"),
        ('Ё', "Yo"), ('Ж', "Zh"), ('З', "Z"), ('И', "I"), ('Й', "Y"), ('К', "K"),
        ('Л', "L"), ('М', "M"), ('Н', "N"), ('О', "O"), ('П', "P"), ('Р', "R"),
        ('С', "S"), ('Т', "T"), ('У', "U"), ('Ф', "F"), ('Х', "H"), ('Ц', "Ts"),
        ('Ч', "Ch"), ('Ш', "Sh"), ('Щ', "Sch"), ('Ъ', ""), ('Ы', "Y"), ('Ь', ""),
        ('Э', "E"), ('Ю', "Yu"), ('Я', "Ya"),
    ]
    .into_iter()
    .collect();
    static ref FORBIDDEN_REGEX: Regex = Regex::new(FORBIDDEN_FILE_NAME_PATTERN)
        .expect("Forbidden file name pattern should be valid");
}

/// Transliterate Cyrillic letters; every other character passes through
pub fn transliterate(name: &str) -> String {
    name.chars()
        .fold(String::with_capacity(name.len()), |mut out, c| {
            match TRANSLIT_MAP.get(&c) {
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
            out
        })
}

/// Replace characters that cannot appear in a file name with `_`
pub fn sanitize_file_stem(name: &str) -> String {
    FORBIDDEN_REGEX.replace_all(name, "_").into_owned()
}

/// File name stem derived from a folder name
pub fn folder_stem(folder_name: &str) -> String {
    sanitize_file_stem(&transliterate(folder_name))
}
