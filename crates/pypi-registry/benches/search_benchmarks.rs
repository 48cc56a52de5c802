//! Benchmarks for search page extraction.
//!
//! PyPI returns 20 results per page; the large case covers a hand-saved page
//! with surrounding navigation markup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pypi_registry::search::parse_search_results;
use std::hint::black_box;

fn generate_page(results: usize) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html><html lang="en"><head><title>Search results · PyPI</title></head>
<body><nav class="horizontal-menu"><a href="/help/">Help</a><a href="/sponsors/">Sponsors</a></nav>
<main><form action="/search/"><input name="q" value="web framework"></form>
<ul class="unstyled" aria-label="Search results">"#,
    );

    for i in 0..results {
        html.push_str(&format!(
            r#"<li><a class="package-snippet" href="/project/package-{i}/">
  <h3 class="package-snippet__title">
    <span class="package-snippet__name">package-{i}</span>
    <span class="package-snippet__version">{major}.{minor}.0</span>
    <span class="package-snippet__created"><time datetime="2024-01-01T00:00:00+0000">Jan 1, 2024</time></span>
  </h3>
  <p class="package-snippet__description">Description for package number {i}, a web framework.</p>
</a></li>"#,
            i = i,
            major = i % 10,
            minor = i % 20,
        ));
    }

    html.push_str("</ul></main></body></html>");
    html
}

fn bench_search_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_extraction");

    for results in [0, 20, 100] {
        let page = generate_page(results);
        group.bench_with_input(BenchmarkId::from_parameter(results), &page, |b, page| {
            b.iter(|| parse_search_results(black_box(page)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search_extraction);
criterion_main!(benches);
