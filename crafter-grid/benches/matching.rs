use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crafter_grid::{equivalent, rotate, trim, CatalogPattern, Grid, RecipeIndex};

fn grid(cells: [&str; 9]) -> Grid {
    Grid::single_layer(3, 3, "middle", cells).unwrap()
}

fn matching(c: &mut Criterion) {
    let pattern = grid([" ", " ", "stick", " ", " ", "stick", " ", " ", "stick"]);
    let observed = grid([" ", " ", " ", "stick", "stick", "stick", " ", " ", " "]);

    c.bench_function("trim 3x3", |b| b.iter(|| trim(black_box(&observed))));
    c.bench_function("rotate 3x3", |b| b.iter(|| rotate(black_box(&observed))));
    c.bench_function("equivalent: rotated stick", |b| {
        b.iter(|| equivalent(black_box(&observed), black_box(&pattern), false))
    });

    let index = RecipeIndex::build((0..256).map(|i| CatalogPattern {
        grid: grid([
            "plank", "plank", " ", " ", " ", " ", " ", " ", if i % 2 == 0 { "stick" } else { " " },
        ]),
        exact_match: false,
        result: i,
    }));
    c.bench_function("index lookup: no match in full bucket", |b| {
        b.iter(|| index.find(black_box(&observed)))
    });
}

criterion_group!(benches, matching);
criterion_main!(benches);
