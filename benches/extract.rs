// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use catalog_scrape::config::options::ScrapeOptions;
use catalog_scrape::scrape::{collect_batch, RunOutput};
use catalog_scrape::specs::{schedule, sessions, time::TimeNormalizer};

const SLOT: &str = "Reserve seat Mon, Nov 26, 10:30 AM - 11:30 AM. Venetian, Level 2, Murano 3306, 3307";

/// A page of `n` rows; every tenth row has no slot.
fn synthetic_page(n: usize) -> String {
    let mut html = String::from("<html><body><div id=\"results\">");
    for i in 0..n {
        let slot = if i % 10 == 9 { "Session full" } else { SLOT };
        html.push_str(&format!(
            r##"<div class="sessionRow" id="session_{i}">
                 <span class="abbreviation">DEV - 3{:02}</span>
                 <span class="title">Talk {i} <i class="fa fa-headphones"></i></span>
                 <small class="type">Session</small>
                 <span class="abstract">Abstract for {i}.
Second line. <a href="#">View More</a></span>
                 <small class="speakers">Ann Lee, AWS<br/>Bo Kim, Acme<br/></small>
                 <ul class="availableSessions"><li>{slot}</li></ul>
               </div>"##,
            i % 100
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_schedule(c: &mut Criterion) {
    c.bench_function("schedule_parse", |b| {
        b.iter(|| schedule::parse(black_box(SLOT)))
    });
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(400);

    c.bench_function("locate_extract_400", |b| {
        b.iter(|| {
            let doc = sessions::locate(black_box(&page));
            let n = doc
                .nodes()
                .into_iter()
                .filter_map(|node| sessions::extract(node).ok())
                .count();
            black_box(n)
        })
    });

    let opts = ScrapeOptions::default();
    let normalizer = TimeNormalizer::from_options(&opts).expect("default options build a normalizer");
    c.bench_function("collect_batch_400", |b| {
        b.iter(|| {
            let mut out = RunOutput::default();
            let batch = collect_batch(black_box(&page), "Venetian", "Mon", &opts, &normalizer, &mut out);
            black_box(batch.map(|b| b.kept()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_schedule, bench_extract);
criterion_main!(benches);
