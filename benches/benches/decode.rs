use criterion::{black_box, criterion_group, criterion_main, Criterion};
use complexflag::{decode_generic, unmarshal, Format};

struct DecodeBench {
    name: &'static str,
    format: Format,
    text: &'static str,
}

// Arrays pay for the mapping-first pass before the list decode.
const DECODE_BENCHES: &[DecodeBench] = &[
    DecodeBench {
        name: "json_object",
        format: Format::Json,
        text: r#"{"name":"John","surname":"Doe","age":23,"tags":["a","b","c"]}"#,
    },
    DecodeBench {
        name: "json_array",
        format: Format::Json,
        text: r#"["one","two","three",{"nested":[1,2,3]}]"#,
    },
    DecodeBench {
        name: "yaml_object",
        format: Format::Yaml,
        text: "---\nname: John\nsurname: Doe\nage: 23\ntags: [a, b, c]\n",
    },
    DecodeBench {
        name: "yaml_array",
        format: Format::Yaml,
        text: "---\n- one\n- two\n- three\n- nested: [1, 2, 3]\n",
    },
];

fn bench_decode(c: &mut Criterion) {
    for bench in DECODE_BENCHES {
        c.bench_function(bench.name, |b| {
            b.iter(|| decode_generic(black_box(bench.text.as_bytes()), bench.format))
        });
    }
}

fn bench_unmarshal_inline(c: &mut Criterion) {
    let text = format!("  [{}]  ", vec!["\"item\""; 256].join(","));
    c.bench_function("unmarshal_inline_json_array", |b| {
        b.iter(|| unmarshal(black_box(&text)))
    });
}

criterion_group!(benches, bench_decode, bench_unmarshal_inline);
criterion_main!(benches);
