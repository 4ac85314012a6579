// benches/layout_bench.rs
//! Benchmarks for pagination, rendering and export.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expose_layout::{
    export_html, paginate, render_blocks, resolve, Binding, Block, BlockKind, ExportShell,
    LayoutMemo, Property, PropertyId, RenderContext, ThemeKey, PAGE_CONTENT_HEIGHT,
};
use serde_json::json;

/// Mixed block list cycling through the insertable kinds.
fn create_sample_blocks(count: usize) -> Vec<Block> {
    (0..count)
        .map(|i| {
            let kind = BlockKind::INSERTABLE[i % BlockKind::INSERTABLE.len()];
            Block::from_json(&json!({
                "id": format!("block-{}", i),
                "type": kind.as_str(),
                "title": "{{property.title}} in {{property.city}}",
                "content": "<p>{{property.description}}</p><ul><li>Balkon</li></ul>",
            }))
        })
        .collect()
}

fn sample_binding() -> Binding {
    let mut property = Property::new(PropertyId::parse("prop_bench").unwrap());
    property.title = Some("Stadtvilla".to_string());
    property.city = Some("Potsdam".to_string());
    property.sale_price = Some(1_250_000.0);
    property.living_area = Some(212.0);
    property.description = Some("Großzügige Villa mit Garten.".to_string());
    Binding::preview(property, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");

    for size in [10, 100, 1000] {
        let blocks = create_sample_blocks(size);

        group.bench_with_input(BenchmarkId::new("paginate", size), &blocks, |b, blocks| {
            b.iter(|| paginate(black_box(blocks), PAGE_CONTENT_HEIGHT).len())
        });

        let memo = LayoutMemo::default();
        group.bench_with_input(BenchmarkId::new("memo_hit", size), &blocks, |b, blocks| {
            b.iter(|| memo.paginate(black_box(blocks), ThemeKey::Default, PAGE_CONTENT_HEIGHT).len())
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let blocks = create_sample_blocks(100);
    let binding = sample_binding();

    group.bench_function("chips", |b| {
        let ctx = RenderContext::new(ThemeKey::Modern);
        b.iter(|| render_blocks(black_box(&blocks), &ctx))
    });

    group.bench_function("live", |b| {
        let ctx = RenderContext::new(ThemeKey::Modern).with_binding(Some(&binding));
        b.iter(|| render_blocks(black_box(&blocks), &ctx))
    });

    group.bench_function("resolve", |b| {
        b.iter(|| {
            resolve(
                black_box("{{property.title}} – {{property.price}}, {{property.area}} ({{date.today}})"),
                Some(&binding),
            )
        })
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let blocks = create_sample_blocks(60);
    let binding = sample_binding();
    let shell = ExportShell::builtin().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    c.bench_function("export_html", |b| {
        let ctx = RenderContext::new(ThemeKey::Elegant).with_binding(Some(&binding));
        b.iter(|| {
            let pages = paginate(&blocks, PAGE_CONTENT_HEIGHT);
            export_html(&shell, "Bench", &pages, &ctx, today).unwrap().len()
        })
    });
}

criterion_group!(benches, bench_pagination, bench_rendering, bench_export);
criterion_main!(benches);
