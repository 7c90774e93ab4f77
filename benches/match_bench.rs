// Criterion benchmark suite for pattern compilation and matching.
//
// Run: cargo bench
// Specific group: cargo bench -- compile
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pregex::cache::PatternCache;
use pregex::pattern::Pattern;
use pregex::posix::compile_posix;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn compile(pattern: &str) -> Pattern {
    Pattern::new(pattern).expect("compile failed")
}

fn first_match(pattern: &Pattern, text: &[u8]) -> Option<usize> {
    let mut m = pattern.matcher(text);
    match m.find() {
        Ok(true) => m.start(),
        _ => None,
    }
}

fn count_matches(pattern: &Pattern, text: &[u8]) -> usize {
    let mut m = pattern.matcher(text);
    let mut n = 0;
    while let Ok(true) = m.find() {
        n += 1;
    }
    n
}

fn bench_cases(c: &mut Criterion, group_name: &str, text: &[u8], cases: &[(&str, &str)]) {
    let mut group = c.benchmark_group(group_name);
    for (name, pat) in cases {
        let reg = compile(pat);
        assert!(first_match(&reg, text).is_some(), "{group_name}/{name}: no match");
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| black_box(first_match(&reg, black_box(text))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 1. compile -- measure compilation time
// ---------------------------------------------------------------------------

fn bench_compile(c: &mut Criterion) {
    let patterns: &[(&str, &str)] = &[
        ("literal", "/hello world/"),
        ("dot_star", "/foo.*bar/s"),
        ("alternation", "/alpha|beta|gamma|delta/"),
        ("char_class", "/[a-zA-Z0-9_]+/"),
        ("quantifier", "/a{2,5}b+c?d*/"),
        ("group", "/(abc)+(def)*/"),
        ("backref", r"/(\w+)\s+\1/"),
        ("lookbehind", r"/(?<=@)\w+/"),
        ("named_capture", r"/(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})/"),
        ("extended", "/ a  # letter\n  b+ # run\n /x"),
    ];

    let mut group = c.benchmark_group("compile");
    for (name, pat) in patterns {
        group.bench_with_input(BenchmarkId::from_parameter(name), pat, |b, pat| {
            b.iter(|| black_box(compile(black_box(pat))));
        });
    }
    group.bench_function("posix", |b| {
        b.iter(|| black_box(compile_posix(black_box(b"^[[:alpha:]]{2,3}\\.x$"), false)));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. cache -- memoized compilation
// ---------------------------------------------------------------------------

fn bench_cache(c: &mut Criterion) {
    let cache = PatternCache::new();
    let pat = r"/(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})/";
    cache.get_or_compile(pat).expect("compile failed");

    let mut group = c.benchmark_group("cache");
    group.bench_function("hit", |b| {
        b.iter(|| black_box(cache.get_or_compile(black_box(pat))));
    });
    group.bench_function("miss", |b| {
        let small = PatternCache::with_capacity(1);
        let mut i = 0usize;
        b.iter(|| {
            i += 1;
            black_box(small.get_or_compile(format!("/a{}b/", i % 64)))
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. literal_match -- memchr fast paths
// ---------------------------------------------------------------------------

fn bench_literal_match(c: &mut Criterion) {
    bench_cases(
        c,
        "literal_match",
        b"The quick brown fox jumps over the lazy dog near the riverbank",
        &[
            ("exact", "/lazy dog/"),
            ("anchored_start", "/^The quick/"),
            ("anchored_end", "/riverbank$/"),
            ("word_boundary", r"/\bfox\b/"),
        ],
    );
}

// ---------------------------------------------------------------------------
// 4. quantifiers
// ---------------------------------------------------------------------------

fn bench_quantifiers(c: &mut Criterion) {
    bench_cases(
        c,
        "quantifiers",
        b"aaaaabbbbbccccc12345",
        &[
            ("greedy", "/a+b+c+/"),
            ("lazy", "/a+?b+?c+?/"),
            ("possessive", "/a++b++/"),
            ("nested", "/(a+b+)+/"),
            ("ungreedy_flag", "/a+b+c+/U"),
        ],
    );
}

// ---------------------------------------------------------------------------
// 5. alternation
// ---------------------------------------------------------------------------

fn bench_alternation(c: &mut Criterion) {
    bench_cases(
        c,
        "alternation",
        b"The wolverine dashed across the frozen tundra at midnight",
        &[
            ("two", "/wolf|wolverine/"),
            ("five", "/cat|dog|fox|bear|wolverine/"),
            ("ten", "/alpha|beta|gamma|delta|epsilon|zeta|eta|theta|iota|wolverine/"),
            ("nested", "/(cat|dog)|(fox|wolverine)/"),
        ],
    );
}

// ---------------------------------------------------------------------------
// 6. backreferences and lookaround
// ---------------------------------------------------------------------------

fn bench_backreferences(c: &mut Criterion) {
    bench_cases(
        c,
        "backreferences",
        b"the the quick brown fox fox jumped over",
        &[
            ("simple", r"/(\w+) \1/"),
            ("nested", r"/((\w+) \2)/"),
            ("named", r"/(?<word>\w+) \k<word>/"),
            ("caseless", r"/(\w+) \1/i"),
        ],
    );
}

fn bench_lookaround(c: &mut Criterion) {
    bench_cases(
        c,
        "lookaround",
        b"price: $42.99 and cost: $10.00 for item",
        &[
            ("pos_lookahead", r"/\$\d+(?=\.)/"),
            ("neg_lookahead", r"/\$\d+(?!\d)/"),
            ("pos_lookbehind", r"/(?<=\$)\d+/"),
            ("neg_lookbehind", r"/(?<!\$)\d+/"),
            ("combined", r"/(?<=\$)\d+(?=\.)/"),
        ],
    );
}

// ---------------------------------------------------------------------------
// 7. unicode
// ---------------------------------------------------------------------------

fn bench_unicode(c: &mut Criterion) {
    bench_cases(
        c,
        "unicode",
        "Hello Κόσμε Привет 世界 café résumé naïve".as_bytes(),
        &[
            ("upper", r"/\p{Lu}+/u"),
            ("letter", r"/\p{L}+/u"),
            ("greek", r"/\p{Greek}+/u"),
            ("dot", "/é./u"),
            ("caseless", "/CAFÉ/iu"),
        ],
    );
}

// ---------------------------------------------------------------------------
// 8. recursion -- balanced groups
// ---------------------------------------------------------------------------

fn bench_recursion(c: &mut Criterion) {
    let text = format!("call{}end", "(a(b)(c(d(e))))".repeat(8));
    bench_cases(
        c,
        "recursion",
        text.as_bytes(),
        &[
            ("balanced", r"/\((?:[^()]++|(?R))*\)/"),
            ("conditional", r"/(\()?[a-z]+(?(1)\))/"),
        ],
    );
}

// ---------------------------------------------------------------------------
// 9. large_text -- realistic log scanning
// ---------------------------------------------------------------------------

fn make_log_line(i: usize) -> String {
    format!(
        "2025-06-{:02} {:02}:{:02}:{:02} INFO server[{}] request path=/api/v1/users/{} status=200 duration={}ms\n",
        (i % 28) + 1,
        i % 24,
        i % 60,
        (i * 7) % 60,
        1000 + (i % 50),
        i * 3,
        (i * 13) % 500,
    )
}

fn make_log_text(num_lines: usize) -> Vec<u8> {
    let mut text = String::new();
    for i in 0..num_lines {
        text.push_str(&make_log_line(i));
    }
    text.into_bytes()
}

fn bench_large_text(c: &mut Criterion) {
    let text_10k = make_log_text(100); // ~10KB
    let text_50k = make_log_text(500); // ~50KB

    let cases: &[(&str, &str)] = &[
        ("literal_INFO", "/INFO/"),
        ("timestamp", r"/\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}/"),
        ("field_extract", r"/duration=(\d+)ms/"),
        ("line_anchor", r"/^\S+ \S+ INFO/m"),
        ("no_match", "/CRITICAL_ERROR/"),
    ];

    let mut group = c.benchmark_group("large_text");
    for (name, pat) in cases {
        let reg = compile(pat);
        for (size, text) in [("10k", &text_10k), ("50k", &text_50k)] {
            let label = format!("{}_{}", name, size);
            group.bench_with_input(BenchmarkId::from_parameter(&label), text, |b, text| {
                b.iter(|| black_box(count_matches(&reg, black_box(text))));
            });
        }
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 10. exec_at_offset -- single search from a known offset
// ---------------------------------------------------------------------------

fn bench_exec_at_offset(c: &mut Criterion) {
    let text = b"xxxx1234abcd";
    let reg = compile(r"/\d+/");

    let mut m = reg.matcher(text);
    assert_eq!(m.exec(4).ok().flatten(), Some(4));

    let mut group = c.benchmark_group("exec_at_offset");
    group.bench_function("digits", |b| {
        b.iter(|| {
            let mut m = reg.matcher(black_box(text));
            black_box(m.exec(4).ok().flatten())
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_compile,
    bench_cache,
    bench_literal_match,
    bench_quantifiers,
    bench_alternation,
    bench_backreferences,
    bench_lookaround,
    bench_unicode,
    bench_recursion,
    bench_large_text,
    bench_exec_at_offset,
);
criterion_main!(benches);
