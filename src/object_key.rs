//! Unique object-key generation from user-supplied filenames.
//!
//! Keys must be URL- and filesystem-safe no matter what the original upload
//! was called, so the stem is transliterated to Latin, stripped down to
//! `[a-zA-Z0-9]`, capped at 10 characters and suffixed with a fresh random
//! identifier. Collisions are not expected and are not checked for.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};
use uuid::Uuid;

/// Maximum length the sanitized stem contributes to the key.
const MAX_STEM_LEN: usize = 10;

/// Generate a unique object key for `original_filename`.
///
/// The key has the shape `{stem}_{id}{extension}` where `stem` is the
/// sanitized, transliterated, length-capped filename stem and `id` is a
/// 32-char dash-free random hex identifier. The extension is sanitized the
/// same way as the stem (the key goes into a signed URL path verbatim, so a
/// raw extension with a space or non-ASCII character would be re-encoded on
/// the wire and break the signature) and keeps its dot only if anything
/// survives. A stem that sanitizes away entirely is valid; the key degrades
/// to `_{id}{extension}`.
pub fn generate(original_filename: &str) -> String {
    let (stem, extension) = split_extension(original_filename);

    let stem = sanitize(stem, MAX_STEM_LEN);
    let extension = sanitize(extension, usize::MAX);

    let id = Uuid::new_v4().simple();
    if extension.is_empty() {
        format!("{stem}_{id}")
    } else {
        format!("{stem}_{id}.{extension}")
    }
}

/// Transliterate, keep only `[a-zA-Z0-9]` and cap the length.
fn sanitize(input: &str, max_len: usize) -> String {
    transliterate(input)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(max_len)
        .collect()
}

/// Split `name` into stem and extension, the extension keeping its dot.
///
/// A trailing dot yields an empty extension; a name whose only dot leads
/// (`.gitignore`) is all extension with an empty stem.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => (&name[..idx], &name[idx..]),
        Some(idx) => (&name[..idx], ""),
        None => (name, ""),
    }
}

/// Approximate non-Latin text with Latin-safe characters by decomposing to
/// NFD, dropping combining (diacritic) marks and recomposing to NFC.
fn transliterate(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split a generated key back into (stem, id, extension) for assertions.
    fn parts(key: &str) -> (&str, &str, &str) {
        let (stem, rest) = key.split_once('_').expect("key has an underscore");
        let (id, extension) = rest.split_at(32);
        (stem, id, extension)
    }

    #[test]
    fn latin_stem_survives_unchanged() {
        assert_eq!(transliterate("product01"), "product01");
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(transliterate("résumé"), "resume");
        assert_eq!(transliterate("naïve façade"), "naive facade");
    }

    #[test]
    fn key_shape_for_accented_filename() {
        let key = generate("résumé.pdf");
        let (stem, id, extension) = parts(&key);

        assert_eq!(stem, "resume");
        assert!(id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        assert_eq!(extension, ".pdf");
    }

    #[test]
    fn stem_is_capped_at_ten_characters() {
        let key = generate("averylongproductphotoname.jpeg");
        let (stem, _, extension) = parts(&key);
        assert_eq!(stem, "averylongp");
        assert_eq!(extension, ".jpeg");
    }

    #[test]
    fn same_filename_yields_distinct_keys() {
        assert_ne!(generate("photo.png"), generate("photo.png"));
    }

    #[test]
    fn fully_stripped_stem_degrades_gracefully() {
        let key = generate("фото товара.png");
        let (stem, id, extension) = parts(&key);
        assert_eq!(stem, "");
        assert_eq!(id.len(), 32);
        assert_eq!(extension, ".png");
    }

    #[test]
    fn no_extension() {
        let key = generate("README");
        let (stem, _, extension) = parts(&key);
        assert_eq!(stem, "README");
        assert_eq!(extension, "");
    }

    #[test]
    fn extension_splitting_edge_cases() {
        assert_eq!(split_extension("photo.png"), ("photo", ".png"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("trailing."), ("trailing", ""));
        assert_eq!(split_extension(".gitignore"), ("", ".gitignore"));
        assert_eq!(split_extension("plain"), ("plain", ""));
    }

    #[test]
    fn extension_is_sanitized_for_url_safety() {
        let key = generate("report.final doc");
        let (stem, _, extension) = parts(&key);
        assert_eq!(stem, "report");
        assert_eq!(extension, ".finaldoc");
        assert!(
            key.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        );
    }

    #[test]
    fn accented_extension_is_transliterated() {
        let key = generate("notes.tèxt");
        let (_, _, extension) = parts(&key);
        assert_eq!(extension, ".text");
    }

    #[test]
    fn punctuation_is_removed_from_stem() {
        let key = generate("my photo (1).jpg");
        let (stem, _, _) = parts(&key);
        assert_eq!(stem, "myphoto1");
    }
}
