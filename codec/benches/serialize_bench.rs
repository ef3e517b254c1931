use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codec::{deserialize, serialize, CodecLimits};
use schema::{Scalar, ScalarKind, Schema, TypeShape, Value};

#[derive(Debug, Default, Clone)]
struct Telemetry {
    node: String,
    samples: Vec<f64>,
    labels: Vec<String>,
    flags: u64,
}

fn telemetry_schema() -> Schema<Telemetry> {
    Schema::<Telemetry>::builder()
        .field(
            "node",
            TypeShape::text(),
            |t| Value::Text(t.node.clone()),
            |t, v| {
                t.node = v.into_text()?;
                Ok(())
            },
        )
        .field(
            "samples",
            TypeShape::list(TypeShape::scalar(ScalarKind::F64)),
            |t| {
                Value::ScalarList(
                    ScalarKind::F64,
                    t.samples.iter().map(|s| Scalar::F64(*s)).collect(),
                )
            },
            |t, v| {
                t.samples = v
                    .into_scalars()?
                    .into_iter()
                    .map(f64::try_from)
                    .collect::<Result<_, _>>()?;
                Ok(())
            },
        )
        .field(
            "labels",
            TypeShape::list(TypeShape::text()),
            |t| Value::TextList(t.labels.clone()),
            |t, v| {
                t.labels = v.into_text_list()?;
                Ok(())
            },
        )
        .field(
            "flags",
            TypeShape::scalar(ScalarKind::U64),
            |t| Value::Scalar(Scalar::U64(t.flags)),
            |t, v| {
                t.flags = v.into_scalar()?.try_into()?;
                Ok(())
            },
        )
        .build()
        .unwrap()
}

fn sample_telemetry() -> Telemetry {
    Telemetry {
        node: "edge-7".to_owned(),
        samples: (0..256).map(|i| f64::from(i) * 0.25).collect(),
        labels: (0..16).map(|i| format!("label-{i}")).collect(),
        flags: 0xF00D,
    }
}

fn bench_serialize(c: &mut Criterion) {
    let schema = telemetry_schema();
    let value = sample_telemetry();

    c.bench_function("serialize_telemetry", |b| {
        b.iter(|| serialize(black_box(&value), &schema).unwrap());
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let schema = telemetry_schema();
    let bytes = serialize(&sample_telemetry(), &schema).unwrap();
    let limits = CodecLimits::default();

    c.bench_function("deserialize_telemetry", |b| {
        b.iter(|| {
            deserialize(
                black_box(&bytes),
                &schema,
                Telemetry::default,
                &limits,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
