use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feedforward::Network;

fn forward(net: &mut Network, inputs: &[Vec<f64>]) {
    for input in inputs {
        assert!(net.evaluate(input).is_ok());
    }
}

fn bench_forward(c: &mut Criterion) {
    let mut small = Network::new(2, &[2, 10, 10, 2]).unwrap();
    small.randomize_weights();

    let mut medium = Network::new(3, &[2, 20, 20, 20, 2]).unwrap();
    medium.randomize_weights();

    let inputs_small = vec![vec![0.0; 2]; 10];
    let inputs_medium = vec![vec![0.0; 2]; 1_000];

    c.bench_function("forward small 10 inputs", |b| {
        b.iter(|| forward(black_box(&mut small), black_box(&inputs_small)))
    });
    c.bench_function("forward small 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&mut small), black_box(&inputs_medium)))
    });

    c.bench_function("forward medium 10 inputs", |b| {
        b.iter(|| forward(black_box(&mut medium), black_box(&inputs_small)))
    });
    c.bench_function("forward medium 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&mut medium), black_box(&inputs_medium)))
    });
}

criterion_group!(benches, bench_forward);
criterion_main!(benches);
