use lazy_static::lazy_static;
use nr_core::PageText;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref PARAGRAPH: Selector = Selector::parse("p").expect("valid selector");
    static ref BODY: Selector = Selector::parse("body").expect("valid selector");
    static ref HEADER: Selector = Selector::parse("header").expect("valid selector");
}

fn markup_without_newlines(element: ElementRef<'_>) -> String {
    element.html().replace('\n', "")
}

/// Splits an HTML document into the regions used for scoring.
pub fn extract_page(html: &str) -> PageText {
    let document = Html::parse_document(html);

    let paragraphs = document
        .select(&PARAGRAPH)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    let body = document
        .select(&BODY)
        .next()
        .map(markup_without_newlines)
        .unwrap_or_default();
    let header = document.select(&HEADER).next().map(markup_without_newlines);

    PageText {
        paragraphs,
        body,
        header,
    }
}
