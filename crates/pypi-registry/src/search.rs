//! Extraction of search results from the PyPI search page.
//!
//! PyPI has no search API, so results are scraped from the HTML page. Each
//! result is a `.package-snippet` block with name, version and description
//! children. The markup is not versioned: if any snippet lacks one of its
//! children the whole page is rejected rather than returning partial results.

use crate::error::{PypiError, Result};
use crate::types::SearchResult;
use scraper::{ElementRef, Html, Selector};

const SNIPPET: &str = ".package-snippet";
const SNIPPET_NAME: &str = ".package-snippet__name";
const SNIPPET_VERSION: &str = ".package-snippet__version";
const SNIPPET_DESCRIPTION: &str = ".package-snippet__description";

/// Browser identity sent with search requests. The search page degrades or
/// rejects requests without one.
pub const SEARCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// `Accept` header sent with search requests.
pub const SEARCH_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

/// Extracts search results from a PyPI search page in document order.
///
/// # Errors
///
/// Returns [`PypiError::Parse`] if a snippet is missing its name, version or
/// description element.
///
/// # Examples
///
/// ```
/// use pypi_registry::search::parse_search_results;
///
/// let html = r#"
///     <a class="package-snippet" href="/project/flask/">
///       <span class="package-snippet__name">flask</span>
///       <span class="package-snippet__version">3.0.0</span>
///       <p class="package-snippet__description">A simple framework</p>
///     </a>
/// "#;
///
/// let results = parse_search_results(html).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "flask");
/// ```
pub fn parse_search_results(html: &str) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let snippet = selector(SNIPPET)?;
    let name = selector(SNIPPET_NAME)?;
    let version = selector(SNIPPET_VERSION)?;
    let description = selector(SNIPPET_DESCRIPTION)?;

    document
        .select(&snippet)
        .enumerate()
        .map(|(index, element)| {
            Ok(SearchResult {
                name: child_text(element, &name, SNIPPET_NAME, index)?,
                version: child_text(element, &version, SNIPPET_VERSION, index)?,
                description: child_text(element, &description, SNIPPET_DESCRIPTION, index)?,
            })
        })
        .collect()
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| PypiError::parse_error(format!("invalid selector '{}': {}", css, e)))
}

fn child_text(
    element: ElementRef<'_>,
    selector: &Selector,
    css: &str,
    index: usize,
) -> Result<String> {
    element
        .select(selector)
        .next()
        .map(|child| child.text().collect::<String>().trim().to_string())
        .ok_or_else(|| {
            PypiError::parse_error(format!(
                "search result #{} is missing '{}' element",
                index + 1,
                css
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(name: &str, version: &str, description: &str) -> String {
        format!(
            r#"<a class="package-snippet" href="/project/{name}/">
                 <h3 class="package-snippet__title">
                   <span class="package-snippet__name">{name}</span>
                   <span class="package-snippet__version">{version}</span>
                   <span class="package-snippet__created"><time>Jan 1, 2024</time></span>
                 </h3>
                 <p class="package-snippet__description">{description}</p>
               </a>"#
        )
    }

    fn page(snippets: &[String]) -> String {
        format!(
            r#"<!DOCTYPE html><html><body><ul aria-label="Search results">{}</ul></body></html>"#,
            snippets
                .iter()
                .map(|s| format!("<li>{}</li>", s))
                .collect::<String>()
        )
    }

    #[test]
    fn test_parse_results_in_document_order() {
        let html = page(&[
            snippet("flask", "3.0.0", "A simple framework for building complex web applications."),
            snippet("django", "5.0.1", "A high-level Python web framework."),
            snippet("fastapi", "0.109.0", "FastAPI framework, high performance."),
        ]);

        let results = parse_search_results(&html).unwrap();

        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["flask", "django", "fastapi"]);
        assert_eq!(results[1].version, "5.0.1");
        assert_eq!(results[2].description, "FastAPI framework, high performance.");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let html = page(&[snippet("\n   requests  \n", "  2.31.0\t", "\n  HTTP for Humans.  ")]);

        let results = parse_search_results(&html).unwrap();

        assert_eq!(
            results,
            vec![SearchResult {
                name: "requests".into(),
                version: "2.31.0".into(),
                description: "HTTP for Humans.".into(),
            }]
        );
    }

    #[test]
    fn test_parse_nested_text_is_concatenated() {
        let html = page(&[snippet("pkg", "1.0", "Uses <em>fast</em> parsing")]);

        let results = parse_search_results(&html).unwrap();

        assert_eq!(results[0].description, "Uses fast parsing");
    }

    #[test]
    fn test_parse_no_snippets() {
        let html = page(&[]);
        let results = parse_search_results(&html).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_missing_version_fails_whole_page() {
        let broken = r#"<a class="package-snippet">
                          <span class="package-snippet__name">broken</span>
                          <p class="package-snippet__description">No version here</p>
                        </a>"#
            .to_string();
        let html = page(&[snippet("flask", "3.0.0", "ok"), broken]);

        let result = parse_search_results(&html);

        match result {
            Err(PypiError::Parse { reason }) => {
                assert!(reason.contains("#2"));
                assert!(reason.contains("package-snippet__version"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_description_is_allowed() {
        let html = page(&[snippet("empty-desc", "0.1.0", "")]);

        let results = parse_search_results(&html).unwrap();

        assert_eq!(results[0].description, "");
    }
}
