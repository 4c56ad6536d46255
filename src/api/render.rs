use crate::{
    models::{BookSummary, Catalog, FetchState},
    services::SessionSnapshot,
};

const LOADING_TEXT: &str = "Loading recommendations...";
const STYLE: &str = "body{background:#181c24;color:#f5f6fa;font-family:sans-serif}\
main{max-width:1200px;margin:0 auto;padding:40px 0}\
h2{text-align:center;font-size:44px}\
.row{display:flex;gap:32px;overflow-x:auto;padding-bottom:10px}\
.card{background:#23283a;border-radius:18px;padding:32px;min-width:320px;border:3px solid transparent;color:inherit;text-align:left}\
.card.selected{border-color:#00b894}\
.loading{text-align:center;color:#00b894;font-size:22px}\
.error{text-align:center;color:#e17055;font-size:20px}\
h3 span{color:#00b894}";

/// Renders the whole page for the current session
pub fn page(catalog: &Catalog, snapshot: &SessionSnapshot) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    if snapshot.state.is_loading() {
        // Poll until the background fetch settles
        html.push_str("<meta http-equiv=\"refresh\" content=\"1\">");
    }
    html.push_str(&format!("<title>Book Recommendations</title><style>{STYLE}</style>"));
    html.push_str("</head><body><main><h2>Book Recommendations</h2>");

    html.push_str("<section class=\"row seeds\">");
    for book in catalog.books() {
        let selected = snapshot
            .selected
            .as_ref()
            .is_some_and(|s| s.isbn == book.isbn);
        seed_card(&mut html, book, selected);
    }
    html.push_str("</section>");

    html.push_str(&state_section(snapshot));
    html.push_str("</main></body></html>");
    html
}

fn seed_card(html: &mut String, book: &BookSummary, selected: bool) {
    let class = if selected { "card selected" } else { "card" };
    html.push_str(&format!(
        "<form method=\"post\" action=\"/books/{}/select\">\
         <button type=\"submit\" class=\"{class}\">\
         <div class=\"title\">{}</div>\
         <div>Author: <span>{}</span></div>\
         <div>Year: <span>{}</span></div>\
         <div>Publisher: <span>{}</span></div>\
         </button></form>",
        escape(&book.isbn),
        escape(&book.title),
        escape(&book.author),
        escape(&book.year),
        escape(&book.publisher),
    ));
}

/// Loading indicator, message, heading and recommendation cards
fn state_section(snapshot: &SessionSnapshot) -> String {
    let mut html = String::new();

    if snapshot.state.is_loading() {
        html.push_str(&format!("<div class=\"loading\">{LOADING_TEXT}</div>"));
    }

    if let Some(message) = snapshot.state.message() {
        html.push_str(&format!("<div class=\"error\">{}</div>", escape(message)));
    }

    if let Some(book) = &snapshot.selected {
        html.push_str(&format!(
            "<h3>Recommendations for: <span>{}</span></h3>",
            escape(&book.title)
        ));
    }

    if let FetchState::Success { records } = &snapshot.state {
        html.push_str("<section class=\"row recommendations\">");
        for (index, (record, card)) in records.iter().zip(&snapshot.cards).enumerate() {
            html.push_str(&format!(
                "<div class=\"card recommendation\" data-key=\"{}\">\
                 <div class=\"title\">{}</div>\
                 <div>Author: <span>{}</span></div>\
                 <div>Year: <span>{}</span></div>\
                 <div>Publisher: <span>{}</span></div>\
                 </div>",
                escape(&record.render_key(index)),
                escape(&card.title),
                escape(&card.author),
                escape(&card.year),
                escape(&card.publisher),
            ));
        }
        html.push_str("</section>");
    }

    html
}

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FETCH_ERROR_MESSAGE, RecommendationRecord};
    use chrono::Utc;
    use serde_json::json;

    fn snapshot(selected: Option<&str>, state: FetchState) -> SessionSnapshot {
        SessionSnapshot {
            selected: selected.and_then(|isbn| Catalog::sample().find(isbn).cloned()),
            generation: 1,
            cards: state.cards(),
            state,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_idle_page_lists_catalog_only() {
        let html = page(&Catalog::sample(), &snapshot(None, FetchState::Idle));
        assert_eq!(html.matches("action=\"/books/").count(), 4);
        assert!(html.contains("Into the Wild"));
        assert!(!html.contains(LOADING_TEXT));
        assert!(!html.contains("Recommendations for:"));
        assert!(!html.contains("card selected"));
    }

    #[test]
    fn test_loading_page() {
        let html = page(
            &Catalog::sample(),
            &snapshot(Some("0061009059"), FetchState::Loading),
        );
        assert!(html.contains(LOADING_TEXT));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert_eq!(html.matches("card selected").count(), 1);
        assert!(html.contains("Recommendations for: <span>One for the Money"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_success_page_renders_one_card_per_record() {
        let records: Vec<RecommendationRecord> = serde_json::from_value(json!([
            { "ISBN": "0446310786", "BookName": "To Kill a Mockingbird" },
            { "book_name": "Sea Glass", "author": "Anita Shreve" },
            {}
        ]))
        .unwrap();
        let html = page(
            &Catalog::sample(),
            &snapshot(Some("0061009059"), FetchState::success(records)),
        );

        assert_eq!(html.matches("card recommendation").count(), 3);
        assert!(html.contains("data-key=\"0446310786\""));
        assert!(html.contains("data-key=\"2\""));
        assert!(html.contains("Unknown Publisher"));
        assert!(!html.contains(LOADING_TEXT));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_server_message_is_rendered_as_text() {
        let html = page(
            &Catalog::sample(),
            &snapshot(Some("0316776963"), FetchState::empty("<script>x</script>")),
        );
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_failure_page() {
        let html = page(
            &Catalog::sample(),
            &snapshot(Some("0316776963"), FetchState::transport_failure()),
        );
        assert!(html.contains(FETCH_ERROR_MESSAGE));
        assert!(!html.contains("card recommendation"));
    }
}
