// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use seg_compare::compare::compare;
use seg_compare::specs::extract_html;

/// Synthetic activity page: `n` segment rows plus a small stats panel.
fn synthetic_page(id: u32, n: usize, slow_by: u64) -> String {
    let mut rows = String::new();
    for i in 0..n {
        let secs = 60 + (i as u64 * 7) % 600 + slow_by;
        let speed = 20.0 + (i % 15) as f64 * 0.7;
        rows.push_str(&format!(
            r#"<tr data-segment-effort-id="{id}{i}"><td class="name"><a href="/segments/{i}">Segment {i}</a></td><td class="time">{}:{:02}</td><td><span class="speed">{speed:.1} km/h</span></td><td class="distance">{:.2} km</td></tr>"#,
            secs / 60,
            secs % 60,
            0.5 + i as f64 * 0.1,
        ));
    }
    format!(
        r#"<html><head><meta property="og:url" content="https://www.strava.com/activities/{id}"></head><body>
             <a class="minimal" href="/athletes/1">Bench Rider</a>
             <div class="section more-stats">
               <table><tr><td>Distance</td><td>56.78 km</td></tr><tr><td>4:26:05</td><td>Moving Time</td></tr></table>
               <ul><li>Avg Power: 210 W</li><li>SSW Wind Direction</li></ul>
             </div>
             <table class="segments"><tbody>{rows}</tbody></table>
           </body></html>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let page_a = synthetic_page(1, 200, 0);
    let page_b = synthetic_page(2, 200, 5);

    c.bench_function("extract_200_rows", |b| {
        b.iter(|| {
            let ds = extract_html(black_box(&page_a), None).map(|d| d.segments.len());
            black_box(ds)
        })
    });

    let (Ok(a), Ok(b)) = (extract_html(&page_a, None), extract_html(&page_b, None)) else {
        return;
    };
    c.bench_function("compare_200_segments", |bch| {
        bch.iter(|| black_box(compare(black_box(&a), black_box(&b)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
