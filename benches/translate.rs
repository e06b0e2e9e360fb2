use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use irc2as::Translator;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn read_input() -> Vec<String> {
  include_str!("data.txt")
    .lines()
    .map(String::from)
    .collect::<Vec<_>>()
}

fn translate(c: &mut Criterion) {
  let input = read_input();
  c.bench_with_input(
    BenchmarkId::new("translate", "data.txt"),
    &input,
    |b, lines| {
      b.iter_with_setup(
        || Translator::builder("irc.example.org").build(),
        |mut translator| {
          for line in lines {
            black_box(translator.input(line));
          }
          black_box(translator.take_emissions());
        },
      );
    },
  );
}

criterion_group!(benches, translate);
criterion_main!(benches);
