use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mbz_core::Email;
use mbz_similarity::{largest_group, matches_of, score, string_similarity};
use rand::seq::SliceRandom;
use rand::Rng;

const SUBJECTS: &[&str] = &[
    "Weekly deployment summary",
    "Payment confirmation",
    "Your order has been shipped",
    "Service alert: downtime detected",
    "This week in tech news",
    "Monthly billing statement",
];

const SENDERS: &[&str] = &[
    "notifications@github.com",
    "support@stripe.com",
    "noreply@amazon.com",
    "alerts@uptime.com",
    "newsletter@techcrunch.com",
    "billing@digitalocean.com",
];

fn random_inbox(n: usize) -> Vec<Email> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            let subject = SUBJECTS.choose(&mut rng).copied().unwrap_or_default();
            let sender = SENDERS.choose(&mut rng).copied().unwrap_or_default();
            Email::new(format!("email-{i}"), format!("{subject} #{}", rng.gen_range(0..100)))
                .with_sender(sender)
                .with_preview(format!("{subject} preview text for message {i}"))
        })
        .collect()
}

fn bench_string_similarity(c: &mut Criterion) {
    let a = "Your monthly statement is now available for review.";
    let b = "Your weekly statement is ready, please review it.";
    c.bench_function("string_similarity_sentence", |bench| {
        bench.iter(|| black_box(string_similarity(black_box(a), black_box(b))))
    });

    let long_a = "hello world ".repeat(50);
    let long_b = "hello there ".repeat(50);
    c.bench_function("string_similarity_600_chars", |bench| {
        bench.iter(|| black_box(string_similarity(black_box(&long_a), black_box(&long_b))))
    });
}

fn bench_score(c: &mut Criterion) {
    let inbox = random_inbox(2);
    c.bench_function("score_pair", |b| {
        b.iter(|| black_box(score(black_box(&inbox[0]), black_box(&inbox[1]))))
    });
}

fn bench_grouping(c: &mut Criterion) {
    let inbox_100 = random_inbox(100);
    let inbox_500 = random_inbox(500);

    c.bench_function("largest_group_100", |b| {
        b.iter(|| black_box(largest_group(black_box(&inbox_100), 0.75)))
    });
    c.bench_function("largest_group_500", |b| {
        b.iter(|| black_box(largest_group(black_box(&inbox_500), 0.75)))
    });
    c.bench_function("matches_of_500", |b| {
        b.iter(|| black_box(matches_of(&inbox_500[0], black_box(&inbox_500), 0.75)))
    });
}

criterion_group!(benches, bench_string_similarity, bench_score, bench_grouping);
criterion_main!(benches);
