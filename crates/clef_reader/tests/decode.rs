use clef_reader::{read_event_from_str, read_event_from_value, DecodeError};
use log_events::{
    Level, MessageTemplateToken, PropertyValue, ScalarValue, SpanId, TraceId, UNNAMED_PROPERTY,
};
use serde_json::json;
use time::macros::datetime;

#[test]
fn timestamp_only_document_uses_defaults() {
    let event = read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z"}"#).unwrap();

    assert_eq!(event.timestamp, datetime!(2024-03-09 16:10:02 UTC));
    assert_eq!(event.level, Level::Information);
    assert!(event.template.is_empty());
    assert_eq!(event.exception, None);
    assert!(event.properties.is_empty());
    assert!(event.trace_id.is_empty());
    assert!(event.span_id.is_empty());
}

#[test]
fn missing_timestamp_names_the_field() {
    let err = read_event_from_str(r#"{"Level":"Error"}"#).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingField {
            line: 1,
            field: "Timestamp"
        }
    ));
    let text = err.to_string();
    assert!(text.contains("Timestamp"), "got: {text}");
    assert!(text.contains("line 1"), "got: {text}");
}

#[test]
fn null_timestamp_is_missing() {
    let err = read_event_from_str(r#"{"Timestamp":null}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField { .. }));
}

#[test]
fn non_string_timestamp_is_unsupported() {
    let err = read_event_from_str(r#"{"Timestamp":1583432101}"#).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnsupportedFieldType {
            field: "Timestamp",
            ..
        }
    ));
}

#[test]
fn unparseable_timestamp_fails() {
    let err = read_event_from_str(r#"{"Timestamp":"around noon"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidTimestamp { line: 1, .. }));
}

#[test]
fn level_matches_case_insensitively_and_defaults() {
    let event =
        read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","Level":"warning"}"#).unwrap();
    assert_eq!(event.level, Level::Warning);

    let err =
        read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","Level":"loud"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidLevel { line: 1, .. }));
    assert!(err.to_string().contains("loud"));

    let err = read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","Level":3}"#).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnsupportedFieldType { field: "Level", .. }
    ));
}

#[test]
fn exception_text_is_carried_verbatim() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Exception":"boom\n   at Frobnicator.Run()"}"#,
    )
    .unwrap();
    assert_eq!(
        event.exception.as_deref(),
        Some("boom\n   at Frobnicator.Run()")
    );
}

#[test]
fn plain_message_becomes_an_all_literal_template() {
    let event =
        read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","@m":"look {braces}"}"#)
            .unwrap();
    assert_eq!(event.template.text(), "look {{braces}}");
    assert!(event.template.property_tokens().next().is_none());
}

#[test]
fn explicit_template_wins_over_plain_message() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":"{A}","@m":"plain","Properties":{"A":1}}"#,
    )
    .unwrap();
    let names: Vec<_> = event
        .template
        .property_tokens()
        .map(|token| token.property_name.as_str())
        .collect();
    assert_eq!(names, ["A"]);
}

#[test]
fn non_string_template_is_unsupported() {
    let err =
        read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":42}"#)
            .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnsupportedFieldType {
            field: "MessageTemplate",
            ..
        }
    ));
}

#[test]
fn trace_identifiers_parse_and_default_to_empty() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","@tr":"0af7651916cd43dd8448eb211c80319c","@sp":"b7ad6b7169203331"}"#,
    )
    .unwrap();
    assert_eq!(
        event.trace_id,
        TraceId::parse_hex("0af7651916cd43dd8448eb211c80319c").unwrap()
    );
    assert_eq!(
        event.span_id,
        SpanId::parse_hex("b7ad6b7169203331").unwrap()
    );

    let err = read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","@tr":"xyz"}"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::InvalidId { field: "@tr", .. }));
}

#[test]
fn properties_keep_bag_order() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":{"B":1,"A":2}}"#,
    )
    .unwrap();
    let names: Vec<_> = event
        .properties
        .iter()
        .map(|property| property.name.as_str())
        .collect();
    assert_eq!(names, ["B", "A"]);
}

#[test]
fn properties_must_be_an_object() {
    let err = read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":42}"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::PropertiesNotAnObject { line: 1 }));
    assert!(err.to_string().contains("not an object as expected"));
}

#[test]
fn structured_property_extracts_the_type_tag() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":{"P":{"$type":"Point","X":1,"Y":2}}}"#,
    )
    .unwrap();
    let Some(PropertyValue::Structured {
        type_tag,
        properties,
    }) = event.property("P")
    else {
        panic!("expected a structured value");
    };
    assert_eq!(type_tag.as_deref(), Some("Point"));
    let names: Vec<_> = properties
        .iter()
        .map(|property| property.name.as_str())
        .collect();
    assert_eq!(names, ["X", "Y"]);
    assert!(matches!(
        properties[0].value,
        PropertyValue::Scalar { .. }
    ));
}

#[test]
fn non_string_type_tag_is_stripped_but_not_a_tag() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":{"P":{"$type":3,"X":1}}}"#,
    )
    .unwrap();
    let Some(PropertyValue::Structured {
        type_tag,
        properties,
    }) = event.property("P")
    else {
        panic!("expected a structured value");
    };
    assert_eq!(type_tag, &None);
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "X");
}

#[test]
fn sequence_property_types_each_element() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":{"Xs":[1,"two",null]}}"#,
    )
    .unwrap();
    let Some(PropertyValue::Sequence { elements }) = event.property("Xs") else {
        panic!("expected a sequence");
    };
    assert_eq!(elements.len(), 3);
    assert_eq!(
        elements[2],
        PropertyValue::scalar(ScalarValue::Null)
    );
}

#[test]
fn event_id_integer_is_folded_into_properties() {
    let event =
        read_event_from_str(r#"{"Timestamp":"2024-03-09T16:10:02Z","@i":42}"#).unwrap();
    assert_eq!(event.properties.len(), 1);
    assert_eq!(event.properties[0].name, "@i");
    assert_eq!(
        event.properties[0].value,
        PropertyValue::scalar(ScalarValue::Uint(42))
    );
}

#[test]
fn event_id_follows_bag_properties() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":{"A":1},"@i":"evt-1"}"#,
    )
    .unwrap();
    let names: Vec<_> = event
        .properties
        .iter()
        .map(|property| property.name.as_str())
        .collect();
    assert_eq!(names, ["A", "@i"]);
    assert_eq!(
        event.properties[1].value,
        PropertyValue::scalar(ScalarValue::String("evt-1".to_string()))
    );
}

#[test]
fn event_id_rejects_other_json_types() {
    for document in [
        r#"{"Timestamp":"2024-03-09T16:10:02Z","@i":-4}"#,
        r#"{"Timestamp":"2024-03-09T16:10:02Z","@i":4.2}"#,
        r#"{"Timestamp":"2024-03-09T16:10:02Z","@i":true}"#,
    ] {
        let err = read_event_from_str(document).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnsupportedFieldType { field: "@i", .. }),
            "expected an unsupported-type error for {document}"
        );
    }
}

#[test]
fn invalid_property_name_is_substituted_not_dropped() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Properties":{"":1}}"#,
    )
    .unwrap();
    assert_eq!(event.properties.len(), 1);
    assert_eq!(event.properties[0].name, UNNAMED_PROPERTY);
    assert_eq!(
        event.properties[0].value,
        PropertyValue::scalar(ScalarValue::Int(1))
    );
}

#[test]
fn renderings_attach_to_the_referenced_property() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":"{Count} = {@Count}","Properties":{"Count":42}}"#,
    )
    .unwrap();
    let Some(PropertyValue::Scalar { value, renderings }) = event.property("Count") else {
        panic!("expected a scalar");
    };
    assert_eq!(*value, ScalarValue::Int(42));
    assert_eq!(renderings.len(), 2);
    assert_eq!(renderings[0].placeholder, "{Count}");
    assert_eq!(renderings[1].placeholder, "{@Count}");
    assert!(renderings.iter().all(|r| r.format.is_empty()));
    assert!(renderings.iter().all(|r| r.rendered == "42"));
}

#[test]
fn rendering_of_a_string_property_is_unquoted() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":"Hello {Name}","Properties":{"Name":"world"}}"#,
    )
    .unwrap();
    let Some(PropertyValue::Scalar { renderings, .. }) = event.property("Name") else {
        panic!("expected a scalar");
    };
    assert_eq!(renderings[0].rendered, "world");
}

#[test]
fn formatted_placeholder_alone_produces_no_rendering() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":"{Count:000}","Properties":{"Count":7}}"#,
    )
    .unwrap();
    let Some(PropertyValue::Scalar { renderings, .. }) = event.property("Count") else {
        panic!("expected a scalar");
    };
    assert!(renderings.is_empty());
}

#[test]
fn template_reference_missing_from_the_bag_fails() {
    let err = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":"{Missing}","Properties":{}}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingRenderedProperty { line: 1, ref name } if name == "Missing"
    ));
}

#[test]
fn template_references_without_a_bag_are_not_resolved() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","MessageTemplate":"{Missing}"}"#,
    )
    .unwrap();
    assert!(event.properties.is_empty());
}

#[test]
fn unrecognized_fields_are_ignored() {
    let event = read_event_from_str(
        r#"{"Timestamp":"2024-03-09T16:10:02Z","Widget":{"a":[1,2]},"@x":"?"}"#,
    )
    .unwrap();
    assert!(event.properties.is_empty());
}

#[test]
fn top_level_must_be_an_object() {
    let err = read_event_from_str("[1,2]").unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject { line: 1 }));
}

#[test]
fn malformed_json_reports_line_one() {
    let err = read_event_from_str("{nope").unwrap_err();
    assert!(matches!(err, DecodeError::Json { line: 1, .. }));
    assert_eq!(err.line(), Some(1));
}

#[test]
fn decodes_from_an_already_parsed_value() {
    let document = json!({
        "Timestamp": "2024-03-09T16:10:02Z",
        "MessageTemplate": "ready",
    });
    let event = read_event_from_value(&document).unwrap();
    assert_eq!(event.template.text(), "ready");
    let tokens = event.template.tokens();
    assert!(matches!(tokens, [MessageTemplateToken::Text(text)] if text == "ready"));
}
