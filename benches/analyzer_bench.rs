//! Benchmarks for page analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use webpage_report::parser::WebPageAnalyzer;
use webpage_report::report::assemble_report;
use webpage_report::url_parser::{extract_hostname, is_internal};

// Page with `links` anchors split between relative, same-host and foreign targets
fn build_page(links: usize) -> String {
    let mut page = String::from(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\">\n<html><head><title>Bench</title></head><body>\n",
    );
    for i in 0..links {
        match i % 3 {
            0 => page.push_str(&format!("<a href=\"/page/{i}\">rel</a>\n")),
            1 => page.push_str(&format!("<a href=\"https://bench.example.com/p/{i}\">own</a>\n")),
            _ => page.push_str(&format!("<a href=\"https://other{i}.example.org/\">ext</a>\n")),
        }
        if i % 10 == 0 {
            page.push_str(&format!("<h{}>Heading {i}</h{}>\n", i % 6 + 1, i % 6 + 1));
        }
    }
    page.push_str("<form><input type=\"email\"><input type=\"password\"></form></body></html>");
    page
}

fn bench_hostname(c: &mut Criterion) {
    let mut group = c.benchmark_group("hostname");
    group.bench_function("extract_hostname", |b| {
        b.iter(|| extract_hostname(black_box("https://www.example.com:8443/a/b?q=1#top")))
    });
    group.bench_function("is_internal", |b| {
        b.iter(|| {
            is_internal(
                black_box("https://www.example.com/index.html"),
                black_box("http://www.example.com/about"),
            )
        })
    });
    group.finish();
}

fn bench_assemble_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_report");

    for links in [10, 100, 1000] {
        let page = build_page(links);
        let mut analyzer = WebPageAnalyzer::new();
        analyzer.from_string(&page, "https://bench.example.com/");

        group.throughput(Throughput::Elements(links as u64));
        group.bench_with_input(BenchmarkId::from_parameter(links), &analyzer, |b, analyzer| {
            b.iter(|| assemble_report(black_box(analyzer)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hostname, bench_assemble_report);
criterion_main!(benches);
