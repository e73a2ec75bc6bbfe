//! Export operation

use crate::app::App;
use crate::error::Result;
use crate::export::render_deck;
use crate::ports::storage::StoragePort;

const EXPORT_FILENAME: &str = "lexis-export.txt";
const EXPORT_MIME_TYPE: &str = "text/plain; charset=utf-8";

/// A rendered export, plus what the embedding layer needs to serve it as a
/// download
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub filename: String,
    pub mime_type: String,
    pub body: String,
}

/// Export stored words as an Anki import document, optionally scoped to one
/// book.
///
/// The book filter is an equality filter over the full joined set; zero
/// matching words still produces a valid document (header only).
pub async fn export_deck(
    app: &App,
    authorization: Option<&str>,
    book_id: Option<i64>,
) -> Result<ExportDocument> {
    app.auth.require(authorization)?;

    let mut rows = app.storage.list_words_with_books().await?;
    if let Some(book_id) = book_id {
        rows.retain(|row| row.word.book_id == book_id);
    }

    log::info!("Exporting {} words", rows.len());

    Ok(ExportDocument {
        filename: EXPORT_FILENAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        body: render_deck(&rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::books::{create_book, CreateBookRequest};
    use crate::app::test_support::{auth_header, harness, TestHarness};
    use crate::app::words::{save_word, SaveWordRequest};
    use crate::error::AppError;

    async fn add_book(harness: &TestHarness, title: &str, tag: &str) -> i64 {
        create_book(
            &harness.app,
            auth_header(),
            CreateBookRequest {
                title: title.to_string(),
                author: "Α".to_string(),
                tag: tag.to_string(),
            },
        )
        .await
        .unwrap()
        .id
        .unwrap()
    }

    async fn add_word(harness: &TestHarness, book_id: i64, lemma: &str) {
        save_word(
            &harness.app,
            auth_header(),
            SaveWordRequest {
                book_id,
                original: lemma.to_lowercase(),
                lemma: lemma.to_string(),
                translation: "to read".to_string(),
                example: "Διαβάζω ένα βιβλίο κάθε βράδυ πριν κοιμηθώ.".to_string(),
                explanation: "Common verb.".to_string(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_empty_store_exports_header_only() {
        let harness = harness();
        let document = export_deck(&harness.app, auth_header(), None).await.unwrap();
        assert_eq!(document.body.lines().count(), 3);
        assert_eq!(document.filename, "lexis-export.txt");
        assert_eq!(document.mime_type, "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn test_book_filter_is_strict_subset_by_tag() {
        let harness = harness();
        let bios = add_book(&harness, "Βίος", "bios").await;
        let allo = add_book(&harness, "Άλλο", "allo").await;

        add_word(&harness, bios, "διαβάζω").await;
        add_word(&harness, bios, "γράφω").await;
        add_word(&harness, allo, "τρέχω").await;

        let full = export_deck(&harness.app, auth_header(), None).await.unwrap();
        let filtered = export_deck(&harness.app, auth_header(), Some(bios))
            .await
            .unwrap();

        let full_rows: Vec<_> = full.body.lines().skip(3).collect();
        let filtered_rows: Vec<_> = filtered.body.lines().skip(3).collect();

        assert_eq!(full_rows.len(), 3);
        assert_eq!(filtered_rows.len(), 2);
        for row in &filtered_rows {
            assert!(full_rows.contains(row));
            assert!(row.ends_with("\t\"bios\""));
        }
    }

    #[tokio::test]
    async fn test_filter_on_unknown_book_yields_header_only() {
        let harness = harness();
        let bios = add_book(&harness, "Βίος", "bios").await;
        add_word(&harness, bios, "διαβάζω").await;

        let document = export_deck(&harness.app, auth_header(), Some(999))
            .await
            .unwrap();
        assert_eq!(document.body.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_export_requires_auth() {
        let harness = harness();
        let result = export_deck(&harness.app, None, None).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
