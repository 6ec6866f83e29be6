//! Integration tests for column encodings
//!
//! These tests verify that every encoding reproduces its input, that the
//! structural invariants of run-length and sparse storage hold, and that
//! columns keep names attached to failures.

use pretty_assertions::assert_eq;
use prism_types::storage::encoding::Run;
use prism_types::*;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn all_null() -> Vec<Value> {
    vec![Value::Null; 6]
}

fn all_equal() -> Vec<Value> {
    vec![Value::varchar("same"); 6]
}

fn no_duplicates() -> Vec<Value> {
    (0..6).map(Value::Int64).collect()
}

fn mixed() -> Vec<Value> {
    vec![
        Value::Int64(4),
        Value::Int64(4),
        Value::Null,
        Value::Int64(4),
        Value::Int64(9),
        Value::Null,
        Value::Null,
        Value::Int64(9),
    ]
}

fn payload_encodings(values: &[Value]) -> Vec<Encoding> {
    vec![
        DictionaryEncoding::encode(values).unwrap().into(),
        RunLengthEncoding::encode(values).into(),
        SparseEncoding::encode(values).into(),
        auto_encode(values).unwrap(),
    ]
}

fn uniform_encodings(value: &Value, len: usize) -> Vec<Encoding> {
    let generated = value.clone();
    vec![
        ConstantEncoding::new(value.clone(), len).into(),
        FunctionEncoding::new(
            Arc::new(move || -> SchemaResult<Value> { Ok(generated.clone()) }),
            len,
        )
        .into(),
    ]
}

fn assert_reproduces(encoding: &Encoding, values: &[Value]) {
    assert_eq!(encoding.len(), values.len());
    assert_eq!(
        encoding.materialize().unwrap(),
        values,
        "{} encoding",
        encoding.encoding_type().name()
    );
    for (index, expected) in values.iter().enumerate() {
        assert_eq!(encoding.value_at(index).unwrap().as_ref(), Some(expected));
    }
    assert_eq!(encoding.value_at(values.len()).unwrap(), None);
}

#[test]
fn test_every_encoding_reproduces_its_input() {
    init_tracing();
    for values in [all_null(), all_equal(), no_duplicates(), mixed(), Vec::new()] {
        for encoding in payload_encodings(&values) {
            assert_reproduces(&encoding, &values);
        }
    }
}

#[test]
fn test_uniform_encodings_reproduce_uniform_input() {
    for values in [all_null(), all_equal()] {
        for encoding in uniform_encodings(&values[0], values.len()) {
            assert_reproduces(&encoding, &values);
        }
    }
    for encoding in uniform_encodings(&Value::Int64(1), 0) {
        assert_reproduces(&encoding, &[]);
    }
}

#[test]
fn test_run_length_invariants() {
    let encoding = RunLengthEncoding::encode(&mixed());
    let runs = encoding.runs();
    assert!(runs.iter().all(|run| run.length > 0));
    assert!(runs.windows(2).all(|pair| pair[0].value != pair[1].value));
    assert_eq!(runs.iter().map(|run| run.length).sum::<usize>(), mixed().len());
    assert_eq!(encoding.lengths(), vec![2, 1, 1, 1, 2, 1]);

    let all_equal = RunLengthEncoding::encode(&all_equal());
    assert_eq!(all_equal.runs().len(), 1);

    let err = RunLengthEncoding::from_parts(
        vec![Run::new(Value::Int64(1), 2), Run::new(Value::Int64(1), 3)],
        5,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstructionError);
}

#[test]
fn test_sparse_invariants() {
    let encoding = SparseEncoding::encode(&mixed());
    assert_eq!(encoding.indices(), &[0, 1, 3, 4, 7]);
    assert!(encoding.indices().windows(2).all(|pair| pair[0] < pair[1]));
    assert!(encoding.values().iter().all(|value| !value.is_null()));
    assert_eq!(encoding.len(), 8);

    let all_null = SparseEncoding::encode(&all_null());
    assert!(all_null.values().is_empty());
    assert_eq!(all_null.materialize().unwrap(), vec![Value::Null; 6]);

    let err = SparseEncoding::from_parts(vec![Value::Int64(1)], vec![8], 8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstructionError);
}

#[test]
fn test_dictionary_table_is_distinct() {
    let encoding = DictionaryEncoding::encode(&mixed()).unwrap();
    assert_eq!(
        encoding.table(),
        &[Value::Int64(4), Value::Null, Value::Int64(9)]
    );
    assert_eq!(encoding.indices(), &[0, 0, 1, 0, 2, 1, 1, 2]);
}

#[test]
fn test_selector_choices() {
    init_tracing();
    assert_eq!(
        auto_encode(&all_null()).unwrap().encoding_type(),
        EncodingType::Sparse
    );
    assert_eq!(
        auto_encode(&all_equal()).unwrap().encoding_type(),
        EncodingType::RunLength
    );
    assert_eq!(
        auto_encode(&no_duplicates()).unwrap().encoding_type(),
        EncodingType::Dictionary
    );

    let selector = EncodingSelector::with_settings(EncodingConfig::dictionary_only());
    assert_eq!(
        selector.encode(&all_null()).unwrap().encoding_type(),
        EncodingType::Dictionary
    );
}

#[test]
fn test_transforms_preserve_length() {
    let double = |v: &Value| -> SchemaResult<Value> { Ok(Value::Int64(v.try_as_i64()? * 2)) };
    let expected: Vec<Value> = mixed()
        .iter()
        .map(|v| match v {
            Value::Int64(n) => Value::Int64(n * 2),
            other => other.clone(),
        })
        .collect();

    for mut encoding in payload_encodings(&mixed()) {
        encoding.map_values(std::sync::Arc::new(double)).unwrap();
        assert_eq!(encoding.materialize().unwrap(), expected);
    }
}

#[test]
fn test_column_pipeline() {
    init_tracing();
    let raw = vec![
        Value::varchar("2024-06-16"),
        Value::Null,
        Value::Int64(1_718_530_754),
        Value::varchar("2024-06-16T09:39:14Z"),
    ];
    let column = Column::from_raw(
        "seen_at",
        parse_declaration("TIMESTAMP").unwrap().into_type(),
        &raw,
        &SchemaConfig::default(),
    )
    .unwrap();
    assert_eq!(column.name(), "seen_at");
    assert_eq!(column.len(), 4);

    let values = column.materialize().unwrap();
    assert!(values[1].is_null());
    assert_eq!(values[2], values[3]);
    assert_eq!(values[0].to_string(), "2024-06-16 00:00:00");
}

#[test]
fn test_column_errors_name_the_column() {
    let raw = vec![Value::varchar("12"), Value::varchar("twelve")];
    let err = Column::from_raw("qty", LogicalType::UInt8, &raw, &SchemaConfig::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueError);
    assert_eq!(err.column(), Some("qty"));
    assert_eq!(err.offending_value(), Some("twelve"));
    assert!(err.to_string().starts_with("Column 'qty': "));

    let mut generated = Column::function(
        "broken",
        LogicalType::Int64,
        || -> SchemaResult<Value> { Err(SchemaError::Construction("no source".to_string())) },
        2,
    );
    let err = generated.materialize().unwrap_err();
    assert_eq!(err.column(), Some("broken"));
    generated.set_length(0).unwrap();
    assert_eq!(generated.materialize().unwrap(), Vec::<Value>::new());
}
