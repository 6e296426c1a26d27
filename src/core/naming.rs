/// Output file names are lower-cased so regenerating from identical input is
/// reproducible regardless of how the language codes were passed.
pub fn page_file_name(source: &str, target: &str, label: &str) -> String {
    format!("dictionary-{}-{}-{}.html", source, target, label).to_lowercase()
}

pub fn opf_file_name(source: &str, target: &str) -> String {
    format!("dictionary-{}-{}.opf", source, target).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name("en", "fr", "097-098"), "dictionary-en-fr-097-098.html");
    }

    #[test]
    fn test_names_are_lowercased() {
        assert_eq!(page_file_name("EN", "FR", "097-"), "dictionary-en-fr-097-.html");
        assert_eq!(opf_file_name("EN", "FR"), "dictionary-en-fr.opf");
    }
}
