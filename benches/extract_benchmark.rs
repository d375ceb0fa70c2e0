//! Benchmarks for unfold extraction and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic pages with a fixed mix of block types.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unfold::{OutputFormat, TextCleaner};

/// Creates a synthetic page with the given number of sections.
fn create_test_page(section_count: usize) -> String {
    let mut page = String::from(
        "<!DOCTYPE html><html><head><title>Benchmark article - AMBOSS</title></head><body>",
    );

    for i in 0..section_count {
        page.push_str(&format!(
            r#"<div data-e2e-test-id="section-with-header">
                 <div data-e2e-test-id="particle-header"><h3>Section title {i}</h3></div>
                 <div data-e2e-test-id="section-content-is-shown"><div class="baseStyles_x">
                   <h3>Subsection {i}</h3>
                   <p>Paragraph text for section {i} with a citation marker.[1][2]</p>
                   <ul><li>First item<ul><li>Nested item<ul><li>Deep item</li></ul></li></ul></li><li>Second item</li></ul>
                   <div class="table-wrapper"><table>
                     <thead><tr><th>Column A</th><th>Column B</th></tr></thead>
                     <tbody>
                       <tr><td>Plain | cell</td><td><ul><li>x<ul><li>y</li></ul></li></ul></td></tr>
                       <tr><td>Another</td><td>Value</td></tr>
                     </tbody>
                   </table></div>
                   <div class="merke">Remember this for section {i}.</div>
                   <div class="paragraph"><span class="thumbnail__image"><img src="/img/{i}.png" title="Figure {i}"></span></div>
                 </div></div>
               </div>"#
        ));
    }

    page.push_str("</body></html>");
    page
}

/// Benchmark text cleaning.
fn bench_text_cleaning(c: &mut Criterion) {
    let cleaner = TextCleaner::default();
    let text = "  Iron   deficiency[1][2] is the most\n common cause Maximize table of anemia.[3] ".repeat(20);

    c.bench_function("clean_text", |b| {
        b.iter(|| cleaner.clean(black_box(&text)));
    });
}

/// Benchmark extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for section_count in [1, 10, 50].iter() {
        let page = create_test_page(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unfold::parse_html(black_box(&page)));
        });
    }

    group.finish();
}

/// Benchmark each renderer on a mid-sized document.
fn bench_rendering(c: &mut Criterion) {
    let doc = unfold::parse_html(&create_test_page(10))
        .into_document()
        .expect("benchmark page has sections");
    let mut group = c.benchmark_group("rendering");

    for format in OutputFormat::ALL {
        group.bench_function(format.name(), |b| {
            b.iter(|| unfold::render(black_box(&doc), format));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_cleaning, bench_extraction, bench_rendering);
criterion_main!(benches);
