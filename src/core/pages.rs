use crate::domain::model::{Entry, KeyedEntries};

/// Fixed frameset wrapper expected by the Kindle dictionary compiler. The
/// markup, attribute names and namespace URIs are a compatibility contract
/// and must not be reformatted. The onclick anchor draws a kindlegen
/// warning but is required for lookup to work.
const PAGE_HEADER: &str = r#"<html xmlns:mbp="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf"
      xmlns:idx="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf">

<head>
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
</head>

<body>
    <mbp:pagebreak/>
    <mbp:frameset>
        <mbp:slave-frame display="bottom" device="all" breadth="auto" leftmargin="0" rightmargin="0" bottommargin="0" topmargin="0">
            <div align="center" bgcolor="yellow">
                <a onclick="index_search()">Dictionary Search</a>
            </div>
        </mbp:slave-frame>
        <mbp:pagebreak/>
"#;

const PAGE_FOOTER: &str = r#"
    </mbp:frameset>
</body>
</html>
"#;

/// Builds one lookup page. The header is written on construction and the
/// footer only by `finish`, so a page cannot reach storage half-wrapped.
pub struct PageBuilder {
    buf: String,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            buf: PAGE_HEADER.to_string(),
        }
    }

    /// Emit the lookup blocks for one key: entries sorted, contiguous runs
    /// of the same term merged into one block with `; `-joined definitions.
    pub fn write_key(&mut self, key: &str, entries: &[Entry]) {
        let sorted = sort_entries(entries);

        let mut start = 0;
        while start < sorted.len() {
            let term = sorted[start].term.as_str();
            let mut end = start + 1;
            while end < sorted.len() && sorted[end].term == term {
                end += 1;
            }

            let definitions: Vec<&str> = sorted[start..end]
                .iter()
                .map(|e| e.definition.as_str())
                .collect();

            self.buf.push_str(&format!(
                "\n        <idx:entry name=\"word\" scriptable=\"yes\">\n            <idx:orth value=\"{key}\"><div id=\"{term}\"><strong>{term}</strong></div></idx:orth>\n            "
            ));
            self.buf.push_str(&definitions.join("; "));
            self.buf.push_str("        </idx:entry>\n");

            start = end;
        }
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str(PAGE_FOOTER);
        self.buf
    }
}

/// Render one partition: every key with its entries, header to footer.
pub fn render_page(keys: &[String], entries: &KeyedEntries) -> String {
    let mut page = PageBuilder::new();
    for key in keys {
        if let Some(list) = entries.get(key) {
            page.write_key(key, list);
        }
    }
    page.finish()
}

/// Exact matches rank as length zero and come first; the rest order by the
/// character length of their term, ties broken alphabetically.
fn sort_entries(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| sort_rank(a).cmp(&sort_rank(b)));
    sorted
}

fn sort_rank(entry: &Entry) -> (usize, &str) {
    let length = if entry.exact_match {
        0
    } else {
        entry.term.chars().count()
    };
    (length, entry.term.as_str())
}
