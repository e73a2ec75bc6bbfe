//! Anki deck formatting
//!
//! Turns stored words into the tab-separated import document Anki consumes.
//! The three directive lines and the field order are an external contract
//! and must not change: tab separator, HTML-capable fields, tag in the third
//! column.

use crate::domain::models::WordWithBook;

/// Fixed directive lines prefixed to every export document
pub const DECK_HEADER: &str = "#separator:tab\n#html:true\n#tags column:3";

/// Wrap a field in quotes, doubling any embedded quote characters.
pub fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Inverse of [`escape_field`]: strip the wrapping quotes and undouble
/// embedded quotes. Returns `None` if the input is not a wrapped field.
pub fn unescape_field(field: &str) -> Option<String> {
    let inner = field.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\"\"", "\""))
}

fn format_row(row: &WordWithBook) -> String {
    let front = format!("<b>{}</b><br><i>{}</i>", row.word.lemma, row.word.example);
    let back = format!("{}<br><br>{}", row.word.translation, row.word.explanation);

    format!(
        "{}\t{}\t{}",
        escape_field(&front),
        escape_field(&back),
        escape_field(&row.book_tag)
    )
}

/// Render the full import document: header lines, then one row per word.
/// Zero words renders the header alone.
pub fn render_deck(rows: &[WordWithBook]) -> String {
    let mut document = String::from(DECK_HEADER);
    for row in rows {
        document.push('\n');
        document.push_str(&format_row(row));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Word, WordEntry, WordWithBook};

    fn row(lemma: &str, tag: &str) -> WordWithBook {
        WordWithBook {
            word: Word::new(
                1,
                lemma.to_lowercase(),
                WordEntry {
                    lemma: lemma.to_string(),
                    translation: "to read".to_string(),
                    example: "Διαβάζω ένα βιβλίο κάθε βράδυ πριν κοιμηθώ.".to_string(),
                    explanation: "Common verb.".to_string(),
                },
            ),
            book_title: "Βίος".to_string(),
            book_tag: tag.to_string(),
        }
    }

    #[test]
    fn test_escape_round_trip() {
        for original in ["plain", "with \"quotes\"", "\"\"", "", "τέλος \" μέσης"] {
            let escaped = escape_field(original);
            assert_eq!(unescape_field(&escaped).unwrap(), original);
        }
    }

    #[test]
    fn test_unescape_rejects_unwrapped_input() {
        assert!(unescape_field("bare").is_none());
        assert!(unescape_field("\"open").is_none());
    }

    #[test]
    fn test_empty_deck_is_header_only() {
        let document = render_deck(&[]);
        assert_eq!(document, DECK_HEADER);
        assert_eq!(document.lines().count(), 3);
    }

    #[test]
    fn test_deck_layout() {
        let document = render_deck(&[row("διαβάζω", "bios")]);
        let lines: Vec<_> = document.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "#separator:tab");
        assert_eq!(lines[1], "#html:true");
        assert_eq!(lines[2], "#tags column:3");

        let fields: Vec<_> = lines[3].split('\t').collect();
        assert_eq!(fields.len(), 3);
        assert!(fields[0].starts_with("\"<b>διαβάζω</b><br><i>"));
        assert!(fields[1].contains("<br><br>"));
        assert_eq!(fields[2], "\"bios\"");
    }

    #[test]
    fn test_quotes_in_fields_are_doubled() {
        let mut r = row("λέω", "tag");
        r.word.example = "Του είπα \"γεια\" χωρίς δεύτερη σκέψη.".to_string();
        let document = render_deck(&[r]);
        assert!(document.contains("\"\"γεια\"\""));
    }
}
