//! Performance benchmarks for rs-readability.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Scoring every element of a small synthetic article
//! - Link density and phrasing checks over the same tree

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rs_readability::dom::Document;
use rs_readability::nodes::{self, ScoreBoard};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <nav class="menu">
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <div id="main-content" class="article">
        <h1>Sample Article Title</h1>
        <p class="byline">By John Doe</p>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should score well against the <a href="/nav">navigation</a>.</p>
        <p>Here is a second paragraph with more content, <em>inline markup</em>
        and a trailing sentence.</p>
        <table>
            <tr><td colspan="2">Header</td></tr>
            <tr><td>A</td><td>B</td></tr>
        </table>
    </div>
    <div class="sidebar">
        <h3>Related Articles</h3>
        <ul>
            <li><a href="/1">Related article 1</a></li>
            <li><a href="/2">Related article 2</a></li>
        </ul>
    </div>
</body>
</html>
"#;

fn bench_initialize_scores(c: &mut Criterion) {
    let doc = Document::from(SAMPLE_HTML);
    let elements = doc.select("body *");

    c.bench_function("initialize_scores", |b| {
        b.iter(|| {
            let mut board = ScoreBoard::new();
            for node in elements.nodes() {
                black_box(board.initialize_score(node, true));
            }
        });
    });
}

fn bench_link_density(c: &mut Criterion) {
    let doc = Document::from(SAMPLE_HTML);
    let elements = doc.select("div, p, ul");

    c.bench_function("link_density", |b| {
        b.iter(|| {
            for node in elements.nodes() {
                black_box(nodes::link_density(node));
            }
        });
    });
}

fn bench_classification(c: &mut Criterion) {
    let doc = Document::from(SAMPLE_HTML);
    let elements = doc.select("body *");

    c.bench_function("classification", |b| {
        b.iter(|| {
            for node in elements.nodes() {
                black_box(nodes::is_phrasing_content(node));
                black_box(nodes::has_single_child_block_element(node));
                black_box(nodes::is_element_without_content(node));
                black_box(nodes::is_probably_visible(node));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_initialize_scores,
    bench_link_density,
    bench_classification
);
criterion_main!(benches);
