//! Conversion benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docs2md::{discover_related_links, extract_single, Options, Page, SiteVariant};
use url::Url;

const DOCS_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Quickstart | Project documentation</title>
    <meta name="description" content="Install the package and run a first model.">
</head>
<body>
    <div class="wy-nav-side">
        <a href="index.html">Home</a>
        <a href="quickstart.html">Quickstart</a>
        <a href="api.html">API</a>
        <a href="faq.html#top">FAQ</a>
    </div>
    <div role="main" class="document">
        <h1>Quickstart<a class="headerlink" href="#quickstart">¶</a></h1>
        <p>Install the package with <code>pip</code> and import it.</p>
        <div class="highlight-bash notranslate"><div class="highlight"><pre>pip install project</pre></div></div>
        <h2>First steps</h2>
        <ol>
            <li>Create a config <a href="/config.html">file</a>.</li>
            <li>Load it:
                <pre><code class="language-python">import project
cfg = project.load("cfg.toml")</code></pre>
            </li>
            <li>Run it.<ul><li>locally</li><li>on a cluster</li></ul></li>
        </ol>
        <blockquote><p>Note: GPU support needs drivers.</p></blockquote>
        <img src="_images/arch.png" alt="Architecture">
    </div>
    <footer><p>Copyright 2025</p></footer>
    <script>analytics()</script>
</body>
</html>
"#;

const BLOG_POST: &str = r#"
<html>
<head><title>Faster serving | LMSYS Org</title></head>
<body>
    <article>
        <p>by: The Team, Jan 5, 2025</p>
        <p>We release a new version with <strong>faster</strong> decoding.</p>
        <img src="/images/blog/bench.png" alt="benchmark">
        <pre><code class="language-bash">python -m server --port 30000</code></pre>
    </article>
</body>
</html>
"#;

fn bench_docs_page(c: &mut Criterion) {
    let url = Url::parse("https://docs.example.org/en/latest/quickstart.html").expect("valid url");
    let options = Options::default();
    c.bench_function("docs_page", |b| {
        b.iter(|| extract_single(black_box(DOCS_PAGE), &url, &options));
    });
}

fn bench_blog_post(c: &mut Criterion) {
    let url = Url::parse("https://lmsys.org/blog/2025-01-05-faster/").expect("valid url");
    let options = Options::for_variant(SiteVariant::Blog);
    c.bench_function("blog_post", |b| {
        b.iter(|| extract_single(black_box(BLOG_POST), &url, &options));
    });
}

fn bench_link_discovery(c: &mut Criterion) {
    let url = Url::parse("https://docs.example.org/en/latest/quickstart.html").expect("valid url");
    c.bench_function("related_links", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(DOCS_PAGE), url.clone());
            discover_related_links(&page)
        });
    });
}

/// Repeated sections to see how conversion scales with page size.
fn bench_scaling(c: &mut Criterion) {
    let url = Url::parse("https://docs.example.org/big.html").expect("valid url");
    let options = Options::default();
    let section = r#"<h2>Section</h2><p>Text with <a href="/x">a link</a>.</p>
        <ul><li>one</li><li>two<ol><li>nested</li></ol></li></ul>
        <pre><code class="language-rust">fn main() {}</code></pre>"#;

    let mut group = c.benchmark_group("scaling");
    for sections in [10usize, 100, 500] {
        let html = format!("<html><body><article>{}</article></body></html>", section.repeat(sections));
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &html, |b, html| {
            b.iter(|| extract_single(black_box(html), &url, &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_docs_page, bench_blog_post, bench_link_discovery, bench_scaling);
criterion_main!(benches);
