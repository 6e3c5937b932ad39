use labelenc::columnar::{Column, ColumnData, ElementType, RowIndex, StringData, Table, Value};
use labelenc::{
    encode, encode_table, encode_with_options, EncodeError, EncodeOptions, EncodedLabels, ID,
    LABEL, LABEL_ID,
};
use pretty_assertions::assert_eq;

fn ids(res: &EncodedLabels) -> Vec<Value> {
    res.labels
        .as_ref()
        .and_then(|t| t.column_by_name(ID))
        .map(Column::to_values)
        .unwrap_or_default()
}

fn labels(res: &EncodedLabels) -> Vec<Value> {
    res.labels_column().map(Column::to_values).unwrap_or_default()
}

#[test]
fn integer_column_serial() {
    let col = Column::from_options([Some(5i32), None, Some(5), Some(7), None, Some(5)]);
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();

    assert_eq!(
        res.codes(),
        Some(vec![Some(0), None, Some(0), Some(1), None, Some(0)])
    );
    assert_eq!(ids(&res), vec![Value::Int(0), Value::Int(1)]);
    assert_eq!(labels(&res), vec![Value::Int(5), Value::Int(7)]);

    let encoded = res.encoded.as_ref().unwrap();
    assert_eq!(encoded.names(), &[LABEL_ID.to_string()]);
    assert_eq!(encoded.column(0).unwrap().element_type(), ElementType::Int32);
    assert_eq!(
        res.labels.as_ref().unwrap().names(),
        &[ID.to_string(), LABEL.to_string()]
    );
}

#[test]
fn every_integer_width_keeps_its_label_type() {
    let serial = EncodeOptions::serial();

    let res = encode_with_options(
        &Column::from_options([Some(-3i8), None, Some(4), Some(-3)]),
        &serial,
    )
    .unwrap();
    assert_eq!(res.labels_column().unwrap().element_type(), ElementType::Int8);
    assert_eq!(res.codes(), Some(vec![Some(0), None, Some(1), Some(0)]));
    // `i8::MIN` is the stored NA marker, not a label.
    assert_eq!(labels(&res), vec![Value::Int(-3), Value::Int(4)]);

    let res =
        encode_with_options(&Column::from_options([None, Some(300i16), Some(300)]), &serial)
            .unwrap();
    assert_eq!(res.labels_column().unwrap().element_type(), ElementType::Int16);
    assert_eq!(res.codes(), Some(vec![None, Some(0), Some(0)]));
    assert_eq!(labels(&res), vec![Value::Int(300)]);

    let raw = Column::from_primitive(vec![i16::MIN, 1, i16::MIN + 1]);
    let res = encode_with_options(&raw, &serial).unwrap();
    assert_eq!(res.codes(), Some(vec![None, Some(0), Some(1)]));
    assert_eq!(labels(&res), vec![Value::Int(1), Value::Int(i64::from(i16::MIN) + 1)]);

    let res = encode_with_options(
        &Column::from_options([Some(i64::MAX), Some(i64::MIN + 1), Some(i64::MAX)]),
        &serial,
    )
    .unwrap();
    assert_eq!(res.labels_column().unwrap().element_type(), ElementType::Int64);
    assert_eq!(
        labels(&res),
        vec![Value::Int(i64::MAX), Value::Int(i64::MIN + 1)]
    );
}

#[test]
fn boolean_column_shares_the_input() {
    let col = Column::from_bools([Some(true), None, Some(false)]);
    let res = encode(&col).unwrap();

    assert_eq!(res.codes(), Some(vec![Some(1), None, Some(0)]));
    assert_eq!(ids(&res), vec![Value::Int(0), Value::Int(1)]);
    assert_eq!(labels(&res), vec![Value::Bool(false), Value::Bool(true)]);

    let encoded = res.encoded.as_ref().unwrap().column_by_name(LABEL_ID).unwrap();
    assert!(encoded.shares_buffer_with(&col));
}

#[test]
fn boolean_labels_list_both_values_even_if_one_is_missing() {
    let col = Column::from_bools([Some(true), None, Some(true)]);
    let res = encode(&col).unwrap();
    assert_eq!(res.label_count(), 2);
    assert_eq!(labels(&res), vec![Value::Bool(false), Value::Bool(true)]);
    assert_eq!(res.codes(), Some(vec![Some(1), None, Some(1)]));
}

#[test]
fn boolean_all_na_through_rowindex_is_empty() {
    // The only non-NA value is hidden by the row index.
    let col = Column::from_bools([None, Some(true), None])
        .with_rowindex(RowIndex::from_rows([Some(0), None, Some(2)]), 3)
        .unwrap();
    assert!(encode(&col).unwrap().is_empty());

    assert!(encode(&Column::from_bools([None, None])).unwrap().is_empty());
    assert!(encode(&Column::from_bools(std::iter::empty())).unwrap().is_empty());
}

#[test]
fn all_na_float_column_is_empty() {
    let col = Column::from_options(std::iter::repeat(None::<f64>).take(10));
    let res = encode(&col).unwrap();
    assert!(res.is_empty());
    assert!(res.encoded.is_none());
    assert!(res.labels.is_none());
    assert_eq!(res.codes(), None);
    assert_eq!(res.decode().unwrap().map(|c| c.nrows()), None);
}

#[test]
fn string_column_serial() {
    let col = Column::from_strs([Some("a"), Some("b"), Some("a"), None]).unwrap();
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();

    assert_eq!(res.codes(), Some(vec![Some(0), Some(1), Some(0), None]));
    assert_eq!(ids(&res), vec![Value::Int(0), Value::Int(1)]);
    assert_eq!(labels(&res), vec![Value::from("a"), Value::from("b")]);
    assert_eq!(res.labels_column().unwrap().element_type(), ElementType::Str32);
}

#[test]
fn str64_labels_stay_str64() {
    let col = Column::from_strs_with::<u64, _>([Some("x"), None, Some("yy"), Some("x")]).unwrap();
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();
    assert_eq!(res.labels_column().unwrap().element_type(), ElementType::Str64);
    assert_eq!(labels(&res), vec![Value::from("x"), Value::from("yy")]);
    assert_eq!(res.codes(), Some(vec![Some(0), None, Some(1), Some(0)]));
}

#[test]
fn empty_strings_are_na_by_default() {
    let col = Column::from_strs([Some(""), Some("a"), Some("")]).unwrap();
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();
    assert_eq!(res.codes(), Some(vec![None, Some(0), None]));
    assert_eq!(labels(&res), vec![Value::from("a")]);

    // Only empty strings and NA: nothing is observed.
    let col = Column::from_strs([Some(""), None, Some("")]).unwrap();
    assert!(encode(&col).unwrap().is_empty());
}

#[test]
fn empty_string_can_be_kept_as_a_label() {
    let col = Column::from_strs([Some(""), None, Some("z"), Some("")]).unwrap();
    let options = EncodeOptions {
        empty_string_is_na: false,
        ..EncodeOptions::serial()
    };
    let res = encode_with_options(&col, &options).unwrap();
    assert_eq!(res.codes(), Some(vec![Some(0), None, Some(1), Some(0)]));
    assert_eq!(labels(&res), vec![Value::from(""), Value::from("z")]);
    assert_eq!(res.decode().unwrap().unwrap().to_values(), col.to_values());
}

#[test]
fn strings_are_read_from_their_own_span() {
    // Offsets built by hand: row 1 is NA, row 2 starts where row 0 ended.
    let offsets = vec![0u32, 3, 3 | (1 << 31), 6, 9];
    let data = StringData::from_parts(offsets, b"abcdefabc".to_vec()).unwrap();
    let col = Column::from_strings(data);

    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();
    assert_eq!(res.codes(), Some(vec![Some(0), None, Some(1), Some(0)]));
    assert_eq!(labels(&res), vec![Value::from("abc"), Value::from("def")]);
}

#[test]
fn float_labels_fold_signed_zero() {
    let col = Column::from_options([Some(-0.0f64), Some(1.25), Some(0.0), Some(f64::NAN)]);
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();
    assert_eq!(res.codes(), Some(vec![Some(0), Some(1), Some(0), None]));
    assert_eq!(res.label_count(), 2);

    let col = Column::from_options([Some(2.5f32), Some(f32::NAN), Some(2.5), None, Some(-1.0)]);
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();
    assert_eq!(res.labels_column().unwrap().element_type(), ElementType::Float32);
    assert_eq!(res.codes(), Some(vec![Some(0), None, Some(0), None, Some(1)]));
    assert_eq!(labels(&res), vec![Value::Float(2.5), Value::Float(-1.0)]);
}

#[test]
fn rowindex_controls_which_values_are_seen() {
    // Reversed slice: the last physical value is seen first.
    let col = Column::from_options([Some(1i64), Some(2), Some(3), Some(2)])
        .with_rowindex(RowIndex::slice(3, -1), 4)
        .unwrap();
    let res = encode_with_options(&col, &EncodeOptions::serial()).unwrap();
    assert_eq!(res.codes(), Some(vec![Some(0), Some(1), Some(0), Some(2)]));
    assert_eq!(
        labels(&res),
        vec![Value::Int(2), Value::Int(3), Value::Int(1)]
    );

    // Row-index NA wins over whatever the buffer holds at that slot.
    let col = Column::from_strs([Some("p"), Some("q")])
        .unwrap()
        .with_rowindex(RowIndex::from_rows([None, Some(1), Some(1), None]), 4)
        .unwrap();
    let res = encode(&col).unwrap();
    assert_eq!(res.codes(), Some(vec![None, Some(0), Some(0), None]));
    assert_eq!(labels(&res), vec![Value::from("q")]);
}

#[test]
fn unsupported_types_are_rejected() {
    let err = encode(&Column::void(3)).unwrap_err();
    assert_eq!(err, EncodeError::UnsupportedType(ElementType::Void));
    assert_eq!(err.to_string(), "column type `void` is not supported");

    let dates = Column::new(ColumnData::Date32(vec![1, 2, 3].into()));
    assert_eq!(
        encode(&dates).unwrap_err().to_string(),
        "column type `date32` is not supported"
    );
}

#[test]
fn decode_reconstructs_the_column() {
    let col = Column::from_strs([Some("k"), None, Some("m"), Some("k"), Some("")]).unwrap();
    let res = encode(&col).unwrap();
    let decoded = res.decode().unwrap().unwrap();
    // The empty string was encoded as NA and decodes as NA.
    assert_eq!(
        decoded.to_values(),
        vec![Value::from("k"), Value::Na, Value::from("m"), Value::from("k"), Value::Na]
    );
    assert!(decoded.shares_buffer_with(res.labels_column().unwrap()));

    let col = Column::from_bools([Some(false), None, Some(true)]);
    let decoded = encode(&col).unwrap().decode().unwrap().unwrap();
    assert_eq!(decoded.to_values(), col.to_values());
}

#[test]
fn table_columns_are_encoded_independently() {
    let table = Table::new(
        vec![
            Column::from_options([Some(1i32), Some(1), Some(2)]),
            Column::from_strs([None, None, None]).unwrap(),
            Column::from_bools([Some(false), Some(true), None]),
        ],
        vec!["n", "s", "b"],
    )
    .unwrap();

    let results = encode_table(&table, &EncodeOptions::serial()).unwrap();
    let names: Vec<&str> = results.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["n", "s", "b"]);
    assert_eq!(results[0].1.codes(), Some(vec![Some(0), Some(0), Some(1)]));
    assert!(results[1].1.is_empty());
    assert_eq!(results[2].1.label_count(), 2);

    let with_void = Table::new(vec![Column::void(1)], vec!["v"]).unwrap();
    assert_eq!(
        encode_table(&with_void, &EncodeOptions::default()).unwrap_err(),
        EncodeError::UnsupportedType(ElementType::Void)
    );
}

#[test]
fn options_deserialize_from_json_for_encoding() {
    let options: EncodeOptions =
        serde_json::from_str(r#"{"threads": 1, "emptyStringIsNa": false}"#).unwrap();
    let col = Column::from_strs([Some(""), Some("a")]).unwrap();
    let res = encode_with_options(&col, &options).unwrap();
    assert_eq!(res.codes(), Some(vec![Some(0), Some(1)]));
}
