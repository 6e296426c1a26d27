use crate::config::customize::Customization;
use crate::domain::model::{Entry, KeyedEntries};
use crate::utils::error::{DictError, Result};

/// Sanitize text for use inside idx:orth markup: double quotes would break
/// the value attribute, angle brackets the surrounding tags.
fn sanitize(text: &str) -> String {
    let replaced = text
        .replace('"', "'")
        .replace('<', "\\<")
        .replace('>', "\\>");
    replaced.trim().to_string()
}

/// Keep non-empty lines whose first non-whitespace character is not `#`.
fn is_entry_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Parse one `term<TAB>definition` line into its lookup key and entry.
fn read_line(line: &str, custom: &Customization) -> Result<(String, Entry)> {
    let (term, definition) = line.split_once('\t').ok_or_else(|| DictError::BadLine {
        line: line.to_string(),
    })?;

    let term = term.trim().to_string();
    let definition = custom.getdef(definition);

    // The mapping runs before key derivation, so getkey sees mapped text.
    let normalized = custom.normalize(&term);
    let key = sanitize(&custom.getkey(&normalized));
    let nkey = sanitize(&normalized);

    if key.is_empty() {
        return Err(DictError::MissingKey { term });
    }
    if definition.is_empty() {
        return Err(DictError::MissingDefinition { term });
    }

    let exact_match = key == nkey;
    Ok((
        key,
        Entry {
            term,
            definition,
            exact_match,
        },
    ))
}

/// Build the key -> entries map from the raw input text. Blank lines and
/// comment lines are skipped; entries keep input order under their key.
/// Any malformed line aborts the whole read.
pub fn read_entries(input: &str, custom: &Customization) -> Result<KeyedEntries> {
    let mut entries = KeyedEntries::new();
    for line in input.lines().filter(|l| is_entry_line(l)) {
        let (key, entry) = read_line(line, custom)?;
        tracing::debug!("{} : {}", key, entry.term);
        entries.entry(key).or_default().push(entry);
    }
    Ok(entries)
}
