use crate::core::naming::page_file_name;
use uuid::Uuid;

const OPF_FOOTER: &str = r#"
<guide>
    <reference type="search" title="Dictionary Search" onclick= "index_search()"/>
</guide>

</package>
"#;

/// Render the OPF package document: dictionary metadata, one manifest item
/// per page in label order and a spine in the same order. The markup is the
/// fixed contract expected by the Kindle compiler.
pub fn render_opf(
    title: &str,
    source: &str,
    target: &str,
    labels: &[String],
    identifier: &str,
) -> String {
    let mut opf = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>

<package version="2.0" xmlns="http://www.idpf.org/2007/opf" unique-identifier="uid">

<metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:identifier id="uid">{identifier}</dc:identifier>
    <dc:title>{title}</dc:title>
    <dc:language>{source}</dc:language>
    <x-metadata>
        <DictionaryInLanguage>{source}</DictionaryInLanguage>
        <DictionaryOutLanguage>{target}</DictionaryOutLanguage>
    </x-metadata>
</metadata>

<manifest>"#
    );

    for label in labels {
        opf.push_str(&format!(
            "\n    <item id=\"dictionary{label}\" href=\"{href}\" media-type=\"application/xhtml+xml\"/>",
            href = page_file_name(source, target, label)
        ));
    }

    opf.push_str("\n</manifest>\n\n<spine>");
    for label in labels {
        opf.push_str(&format!("\n    <itemref idref=\"dictionary{label}\"/>"));
    }
    opf.push_str("\n</spine>\n");

    opf.push_str(OPF_FOOTER);
    opf
}

/// Identifiers are freshly generated per run and need not be stable.
pub fn new_identifier() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_metadata_fields_embedded() {
        let opf = render_opf("My Dictionary", "fr", "en", &labels(&["097-"]), "test-uid");
        assert!(opf.contains("<dc:identifier id=\"uid\">test-uid</dc:identifier>"));
        assert!(opf.contains("<dc:title>My Dictionary</dc:title>"));
        assert!(opf.contains("<dc:language>fr</dc:language>"));
        assert!(opf.contains("<DictionaryInLanguage>fr</DictionaryInLanguage>"));
        assert!(opf.contains("<DictionaryOutLanguage>en</DictionaryOutLanguage>"));
    }

    #[test]
    fn test_items_and_spine_follow_label_order() {
        let opf = render_opf(
            "Dict",
            "en",
            "en",
            &labels(&["097-098", "098-"]),
            "test-uid",
        );
        let first_item = opf.find("dictionary-en-en-097-098.html").unwrap();
        let second_item = opf.find("dictionary-en-en-098-.html").unwrap();
        assert!(first_item < second_item);

        let first_ref = opf.find("<itemref idref=\"dictionary097-098\"/>").unwrap();
        let second_ref = opf.find("<itemref idref=\"dictionary098-\"/>").unwrap();
        assert!(first_ref < second_ref);
    }

    #[test]
    fn test_empty_labels_give_empty_manifest_and_spine() {
        let opf = render_opf("Dict", "en", "en", &[], "test-uid");
        assert!(opf.contains("<manifest>\n</manifest>"));
        assert!(opf.contains("<spine>\n</spine>"));
    }

    #[test]
    fn test_guide_reference_present() {
        let opf = render_opf("Dict", "en", "en", &[], "test-uid");
        assert!(opf.contains(
            "<reference type=\"search\" title=\"Dictionary Search\" onclick= \"index_search()\"/>"
        ));
        assert!(opf.trim_end().ends_with("</package>"));
    }

    #[test]
    fn test_new_identifier_is_random() {
        assert_ne!(new_identifier(), new_identifier());
    }
}
