use criterion::{criterion_group, criterion_main, Criterion};
use steam_webapi::response::{NewsItem, OwnedGame};

fn criterion_benchmark(c: &mut Criterion) {
    let owned_games_bytes = include_bytes!("fixtures/owned_games.json");
    let news_bytes = include_bytes!("fixtures/news.json");
    
    c.bench_function("deserializes owned games", |b| b.iter(|| {
        serde_json::from_slice::<Vec<OwnedGame>>(owned_games_bytes).ok();
    }));
    
    c.bench_function("strips news contents", |b| {
        let news = serde_json::from_slice::<Vec<NewsItem>>(news_bytes).unwrap();
        
        b.iter(|| {
            news
                .iter()
                .map(|item| item.short_description())
                .count()
        })
    });
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
