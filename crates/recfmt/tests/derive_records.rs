// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generated serializer behavior: prefix composition, nesting, truncation,
//! field attributes, descriptor metadata.

mod common;

use common::{assert_same_text, terminated};
use recfmt::{to_text, FieldKind, PrimitiveKind, TextError, TextRecord};

#[derive(TextRecord)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(TextRecord)]
struct Line {
    start: Point,
    end: Point,
    label: String,
}

fn sample_line() -> Line {
    Line {
        start: Point { x: 10, y: 20 },
        end: Point { x: 30, y: 40 },
        label: "MainLine".to_string(),
    }
}

#[test]
fn test_point_with_prefix() {
    let point = Point { x: 10, y: 20 };
    let mut buffer = [0u8; 1024];
    let len = point
        .to_text(&mut buffer, "mypoint")
        .expect("Serialize should succeed");
    assert_eq!(len, 25);
    assert_same_text(terminated(&buffer), "mypoint.x=10 mypoint.y=20");
}

#[test]
fn test_point_empty_prefix_has_no_leading_dot() {
    let point = Point { x: 10, y: 20 };
    let mut buffer = [0u8; 64];
    let len = point
        .to_text(&mut buffer, "")
        .expect("Serialize should succeed");
    assert_eq!(len, 9);
    assert_same_text(terminated(&buffer), "x=10 y=20");
}

#[test]
fn test_line_nested_records() {
    let line = sample_line();
    let mut buffer = [0u8; 1024];
    let len = line
        .to_text(&mut buffer, "myline")
        .expect("Serialize should succeed");
    assert_eq!(len, 89);
    assert_same_text(
        terminated(&buffer),
        "myline.start.x=10 myline.start.y=20 myline.end.x=30 myline.end.y=40 \
         myline.label=MainLine",
    );
}

#[test]
fn test_line_empty_prefix() {
    let line = sample_line();
    let mut buffer = [0u8; 256];
    line.to_text(&mut buffer, "")
        .expect("Serialize should succeed");
    assert_same_text(
        terminated(&buffer),
        "start.x=10 start.y=20 end.x=30 end.y=40 label=MainLine",
    );
}

#[derive(TextRecord)]
struct Segment {
    line: Line,
    id: u32,
}

#[test]
fn test_prefix_threads_through_three_levels() {
    let segment = Segment {
        line: sample_line(),
        id: 7,
    };
    let mut buffer = [0u8; 256];
    segment
        .to_text(&mut buffer, "seg")
        .expect("Serialize should succeed");
    assert_same_text(
        terminated(&buffer),
        "seg.line.start.x=10 seg.line.start.y=20 seg.line.end.x=30 seg.line.end.y=40 \
         seg.line.label=MainLine seg.id=7",
    );
}

#[test]
fn test_none_record_renders_empty() {
    let mut buffer = [0xAAu8; 16];
    let len = to_text(None::<&Point>, &mut buffer, "mypoint").expect("None should succeed");
    assert_eq!(len, 0);
    assert_same_text(terminated(&buffer), "");

    // Prefix is irrelevant for an absent record
    let mut buffer = [0xAAu8; 16];
    let len = to_text(None::<&Line>, &mut buffer, "").expect("None should succeed");
    assert_eq!(len, 0);
}

#[test]
fn test_some_record_through_free_function() {
    let point = Point { x: 1, y: 2 };
    let mut buffer = [0u8; 64];
    let len = to_text(Some(&point), &mut buffer, "p").expect("Serialize should succeed");
    assert_eq!(len, 11);
    assert_same_text(terminated(&buffer), "p.x=1 p.y=2");
}

#[test]
fn test_output_is_deterministic() {
    let line = sample_line();
    let mut first = [0u8; 128];
    let mut second = [0u8; 128];
    let len_first = line
        .to_text(&mut first, "myline")
        .expect("Serialize should succeed");
    let len_second = line
        .to_text(&mut second, "myline")
        .expect("Serialize should succeed");
    assert_eq!(len_first, len_second);
    assert_eq!(first, second);
}

#[test]
fn test_truncation_aborts_on_last_fragment() {
    let point = Point { x: 10, y: 20 };

    // 26 bytes: 25 output + terminator. Exactly enough.
    let mut buffer = [0u8; 26];
    let len = point
        .to_text(&mut buffer, "mypoint")
        .expect("Serialize should succeed");
    assert_eq!(len, 25);

    // One byte short: the final fragment cannot fit. Everything up to and
    // including the separator survives, terminated; no partial field value.
    let mut buffer = [0xAAu8; 25];
    let err = point.to_text(&mut buffer, "mypoint").unwrap_err();
    let TextError::Truncated { offset, needed } = err;
    assert_eq!(offset, 13);
    assert_eq!(needed, 12);
    assert_same_text(terminated(&buffer), "mypoint.x=10 ");
}

#[test]
fn test_truncation_in_nested_record_propagates() {
    let line = sample_line();
    // Room for the first nested fragment but not the second
    let mut buffer = [0u8; 20];
    assert!(line.to_text(&mut buffer, "myline").is_err());
    assert_same_text(terminated(&buffer), "myline.start.x=10 ");
}

#[test]
fn test_zero_capacity_never_panics() {
    let point = Point { x: 1, y: 2 };
    let mut buffer = [0u8; 0];
    assert!(point.to_text(&mut buffer, "p").is_err());
    assert_eq!(to_text(None::<&Point>, &mut buffer, "p").unwrap(), 0);
}

#[derive(TextRecord)]
struct Register {
    #[text(format = "{:#x}")]
    mask: u32,
    #[text(escape)]
    label: String,
    enabled: bool,
}

#[test]
fn test_format_and_escape_attributes() {
    let register = Register {
        mask: 255,
        label: "say \"hi\"".to_string(),
        enabled: true,
    };
    let mut buffer = [0u8; 128];
    register
        .to_text(&mut buffer, "reg")
        .expect("Serialize should succeed");
    assert_same_text(
        terminated(&buffer),
        "reg.mask=0xff reg.label=\"say \\\"hi\\\"\" reg.enabled=true",
    );
}

#[test]
fn test_generated_path_does_not_escape_by_default() {
    let line = Line {
        start: Point { x: 0, y: 0 },
        end: Point { x: 0, y: 0 },
        label: "with \"quotes\"".to_string(),
    };
    let mut buffer = [0u8; 128];
    line.to_text(&mut buffer, "")
        .expect("Serialize should succeed");
    // Verbatim value, no quoting added
    assert!(terminated(&buffer).ends_with("label=with \"quotes\""));
}

#[derive(TextRecord)]
struct Tag {
    name: &'static str,
    weight: f64,
}

#[test]
fn test_borrowed_str_field() {
    let tag = Tag {
        name: "alpha",
        weight: 1.5,
    };
    let mut buffer = [0u8; 64];
    tag.to_text(&mut buffer, "tag")
        .expect("Serialize should succeed");
    assert_same_text(terminated(&buffer), "tag.name=alpha tag.weight=1.5");
}

#[test]
fn test_descriptor_metadata() {
    let point = Point::descriptor();
    assert_eq!(point.record_name, "Point");
    let names: Vec<_> = point.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["x", "y"]);
    assert!(point
        .fields
        .iter()
        .all(|f| f.kind == FieldKind::Primitive(PrimitiveKind::I32) && f.nested_type.is_none()));

    let line = Line::descriptor();
    assert_eq!(line.fields.len(), 3);
    assert_eq!(line.fields[0].kind, FieldKind::Struct);
    assert_eq!(line.fields[0].nested_type, Some("Point"));
    assert_eq!(line.fields[2].kind, FieldKind::Primitive(PrimitiveKind::Str));

    let register = Register::descriptor();
    assert_eq!(register.fields[0].format, Some("{:#x}"));
    assert_eq!(register.fields[1].format, None);
}
