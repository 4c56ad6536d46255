use serde::{Deserialize, Serialize};

/// A sample book the user can pick to request recommendations for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "BookName")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
}

impl BookSummary {
    pub fn new(isbn: &str, title: &str, author: &str, year: &str, publisher: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            publisher: publisher.to_string(),
        }
    }
}

/// Fixed catalog of seeds shown on the page
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BookSummary>,
}

impl Catalog {
    pub fn new(books: Vec<BookSummary>) -> Self {
        Self { books }
    }

    /// The four sample books the UI ships with
    pub fn sample() -> Self {
        Self::new(vec![
            BookSummary::new(
                "0061009059",
                "One for the Money (Stephanie Plum Novels (Pape...)",
                "Janet Evanovich",
                "1995",
                "HarperTorch",
            ),
            BookSummary::new(
                "0316776963",
                "Me Talk Pretty One Day",
                "David Sedaris",
                "2001",
                "Back Bay Books",
            ),
            BookSummary::new(
                "0679731148",
                "A Year in Provence",
                "Peter Mayle",
                "1991",
                "Vintage Books USA",
            ),
            BookSummary::new(
                "0385486804",
                "Into the Wild",
                "Jon Krakauer",
                "1997",
                "Anchor",
            ),
        ])
    }

    pub fn books(&self) -> &[BookSummary] {
        &self.books
    }

    /// Looks up a seed by its ISBN
    pub fn find(&self, isbn: &str) -> Option<&BookSummary> {
        self.books.iter().find(|book| book.isbn == isbn)
    }
}
