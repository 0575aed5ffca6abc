//! Single record copies

mod common;

use field_copy::{
    AnyValue, Copier, CopyOptions, Error, MappingPolicy, Record, copy_fields,
};

#[derive(Record, Clone, Debug, Default, PartialEq)]
struct Stored {
    name:  String,
    age:   i64,
    email: String,
}

#[derive(Record, Clone, Debug, Default, PartialEq)]
struct Public {
    name: String,
    age:  i32,
}

#[test]
fn test_shared_names_with_same_type_are_copied() {
    common::init_tracing();
    let source = Stored {
        name:  "ada".to_string(),
        age:   36,
        email: "ada@example.com".to_string(),
    };
    let mut destination = Public {
        name: String::new(),
        age:  -1,
    };

    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.name, "ada");
    // i64 into i32 is a kind mismatch and leaves the destination alone
    assert_eq!(destination.age, -1);
}

#[test]
fn test_fields_absent_on_destination_are_ignored() {
    #[derive(Record, Clone, Default)]
    struct OnlyEmail {
        email: String,
    }

    let source = Stored {
        email: "x@example.com".to_string(),
        ..Stored::default()
    };
    let mut destination = OnlyEmail::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.email, "x@example.com");
}

#[test]
fn test_shared_destination_is_not_a_pointer() {
    let source = Public {
        name: "same".to_string(),
        age:  1,
    };
    let destination = Public::default();
    let result = copy_fields(&destination, &source);
    assert!(matches!(
        common::context(&result),
        Some(Error::NotAPointer { .. })
    ));
}

#[derive(Record, Clone, Default)]
struct Embedded {
    inner: String,
}

#[derive(Record, Clone, Default)]
struct Outer {
    #[record(flatten)]
    embedded: Embedded,
}

#[derive(Record, Clone, Default)]
struct Flat {
    inner: String,
}

#[test]
fn test_embedded_fields_are_flattened() {
    let source = Outer {
        embedded: Embedded {
            inner: "x".to_string(),
        },
    };
    let mut destination = Flat::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.inner, "x");
}

#[test]
fn test_destination_lookup_promotes_through_flattened_fields() {
    let source = Flat {
        inner: "promoted".to_string(),
    };
    let mut destination = Outer::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.embedded.inner, "promoted");
}

#[test]
fn test_shallower_source_field_wins() {
    #[derive(Record, Clone, Default)]
    struct Shadowing {
        #[record(flatten)]
        embedded: Embedded,
        inner:    String,
    }

    let source = Shadowing {
        embedded: Embedded {
            inner: "deep".to_string(),
        },
        inner:    "shallow".to_string(),
    };
    let mut destination = Flat::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.inner, "shallow");
}

#[test]
fn test_breadth_first_flattening() {
    #[derive(Record, Clone, Default)]
    struct Deeper {
        #[record(flatten)]
        outer: Outer,
    }

    #[derive(Record, Clone, Default)]
    struct Siblings {
        #[record(flatten)]
        deeper:   Deeper,
        #[record(flatten)]
        embedded: Embedded,
    }

    let source = Siblings {
        deeper:   Deeper {
            outer: Outer {
                embedded: Embedded {
                    inner: "deep".to_string(),
                },
            },
        },
        embedded: Embedded {
            inner: "shallow".to_string(),
        },
    };
    let mut destination = Flat::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.inner, "shallow");
}

#[test]
fn test_incompatible_shallow_match_shadows_deeper_fields() {
    #[derive(Record, Clone, Default)]
    struct Deep {
        name: String,
    }

    #[derive(Record, Clone, Default)]
    struct Shadow {
        name: i64,
        #[record(flatten)]
        deep: Deep,
    }

    #[derive(Record, Clone, Default)]
    struct Named {
        name: String,
    }

    let source = Shadow {
        name: 5,
        deep: Deep {
            name: "deep".to_string(),
        },
    };
    let mut destination = Named {
        name: "orig".to_string(),
    };
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.name, "orig");
}

#[test]
fn test_matched_embedded_field_of_other_kind_is_not_flattened() {
    #[derive(Record, Clone, Default)]
    struct Meta {
        inner: String,
    }

    #[derive(Record, Clone, Default)]
    struct WithMeta {
        #[record(flatten)]
        meta: Meta,
    }

    #[derive(Record, Clone, Default)]
    struct MetaText {
        meta:  String,
        inner: String,
    }

    let source = WithMeta {
        meta: Meta {
            inner: "x".to_string(),
        },
    };
    let mut destination = MetaText::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert!(destination.meta.is_empty());
    assert!(destination.inner.is_empty());
}

#[test]
fn test_embedded_field_matched_by_name_is_assigned_whole() {
    #[derive(Record, Clone, Default)]
    struct KeepsEmbedded {
        embedded: Embedded,
        inner:    String,
    }

    let source = Outer {
        embedded: Embedded {
            inner: "whole".to_string(),
        },
    };
    let mut destination = KeepsEmbedded::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.embedded.inner, "whole");
    assert!(destination.inner.is_empty());
}

#[test]
fn test_ambiguous_destination_field_is_skipped() {
    #[derive(Record, Clone, Default)]
    struct Other {
        inner: String,
    }

    #[derive(Record, Clone, Default)]
    struct Ambiguous {
        #[record(flatten)]
        left:  Embedded,
        #[record(flatten)]
        right: Other,
    }

    let source = Flat {
        inner: "where".to_string(),
    };
    let mut destination = Ambiguous::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert!(destination.left.inner.is_empty());
    assert!(destination.right.inner.is_empty());
}

#[test]
fn test_interface_sink_accepts_any_kind() {
    #[derive(Record, Clone, Default)]
    struct Sink {
        age:  AnyValue,
        name: AnyValue,
    }

    let source = Stored {
        name: "grace".to_string(),
        age: 85,
        ..Stored::default()
    };
    let mut destination = Sink::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.age.downcast_ref::<i64>(), Some(&85));
    assert_eq!(
        destination.name.downcast_ref::<String>().map(String::as_str),
        Some("grace")
    );
}

#[test]
fn test_collection_fields_with_different_element_types_are_skipped() {
    #[derive(Record, Clone, Default)]
    struct Tagged {
        tags:   Vec<String>,
        scores: Vec<u8>,
    }

    #[derive(Record, Clone, Default)]
    struct TaggedView {
        tags:   Vec<String>,
        scores: Vec<u32>,
    }

    let source = Tagged {
        tags:   vec!["a".to_string(), "b".to_string()],
        scores: vec![1, 2],
    };
    let mut destination = TaggedView {
        tags:   Vec::new(),
        scores: vec![9],
    };
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.tags, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(destination.scores, vec![9]);
}

#[test]
fn test_nested_record_fields_of_the_same_type_are_cloned() {
    #[derive(Record, Clone, Default)]
    struct Holder {
        public: Public,
        label:  Option<String>,
    }

    #[derive(Record, Clone, Default)]
    struct HolderView {
        public: Public,
        label:  Option<String>,
    }

    let source = Holder {
        public: Public {
            name: "nested".to_string(),
            age:  3,
        },
        label:  Some("l".to_string()),
    };
    let mut destination = HolderView::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.public, source.public);
    assert_eq!(destination.label.as_deref(), Some("l"));
}

#[test]
fn test_source_behind_pointers_is_dereferenced() {
    let source = Box::new(Some(Public {
        name: "boxed".to_string(),
        age:  4,
    }));
    let mut destination = Public::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.name, "boxed");
    assert_eq!(destination.age, 4);
}

#[test]
fn test_nil_source_is_not_a_struct() {
    let source: Option<Public> = None;
    let mut destination = Public::default();
    let result = copy_fields(&mut destination, &source);
    assert!(matches!(
        common::context(&result),
        Some(Error::NotAStruct { found, .. }) if found == "nil"
    ));
}

#[test]
fn test_nil_destination_is_not_allocated() {
    let source = Public {
        name: "never".to_string(),
        age:  1,
    };
    let mut destination: Option<Public> = None;
    let result = copy_fields(&mut destination, &source);
    assert!(matches!(
        common::context(&result),
        Some(Error::NotAStruct { .. })
    ));
    assert!(destination.is_none());
}

#[test]
fn test_renamed_and_skipped_fields() {
    #[derive(Record, Clone, Default)]
    #[record(rename_all = "camelCase")]
    struct Row {
        user_name: String,
        #[record(rename = "id")]
        row_id:    u64,
        #[record(skip)]
        secret:    String,
    }

    #[derive(Record, Clone, Default)]
    #[record(rename_all = "camelCase")]
    struct View {
        user_name: String,
        id:        u64,
        secret:    String,
    }

    let source = Row {
        user_name: "linus".to_string(),
        row_id:    42,
        secret:    "hunter2".to_string(),
    };
    let mut destination = View::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.user_name, "linus");
    assert_eq!(destination.id, 42);
    assert!(destination.secret.is_empty());
}

#[test]
fn test_error_on_mismatch_policy() {
    let copier = Copier::new(CopyOptions::default().with_mapping(MappingPolicy::ErrorOnMismatch));
    let source = Stored {
        name: "ada".to_string(),
        age: 36,
        ..Stored::default()
    };
    let mut destination = Public::default();
    let result = copier.copy(&mut destination, &source);
    assert!(matches!(
        common::context(&result),
        Some(Error::FieldMismatch { field, .. }) if field == "age"
    ));
    // fields before the mismatch were already written
    assert_eq!(destination.name, "ada");
}

#[test]
fn test_mismatch_report_names_the_source_field() {
    #[derive(Record, Clone, Default)]
    struct Row {
        #[record(rename = "age")]
        row_age: u8,
    }

    let copier = Copier::new(CopyOptions::default().with_mapping(MappingPolicy::ErrorOnMismatch));
    let mut destination = Public::default();
    let report = copier.copy(&mut destination, &Row { row_age: 3 }).err();
    let names_field = report.as_ref().is_some_and(|report| {
        report
            .frames()
            .filter_map(|frame| frame.downcast_ref::<String>())
            .any(|attachment| attachment.contains("row_age"))
    });
    assert!(names_field);
}

#[test]
fn test_field_index_uses_matching_names() {
    #[derive(Record, Clone, Default)]
    #[record(rename_all = "camelCase")]
    struct Row {
        user_name: String,
        #[record(skip)]
        cache:     String,
        row_id:    u64,
    }

    let row = Row::default();
    assert_eq!(row.field_index("userName"), Some(0));
    assert_eq!(row.field_index("rowId"), Some(1));
    assert_eq!(row.field_index("cache"), None);
    assert_eq!(row.fields()[1].ident(), "row_id");
}

#[test]
fn test_generic_records() {
    #[derive(Record, Clone, Default)]
    struct Envelope<T> {
        payload: T,
        version: u32,
    }

    #[derive(Record, Clone, Default)]
    struct Versioned {
        version: u32,
    }

    let source = Envelope {
        payload: "body".to_string(),
        version: 2,
    };
    let mut destination = Versioned::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.version, 2);

    let mut envelope = Envelope::<String>::default();
    assert!(copy_fields(&mut envelope, &source).is_ok());
    assert_eq!(envelope.payload, "body");
}

#[test]
fn test_copy_is_idempotent() {
    let source = Stored {
        name: "same".to_string(),
        age: 1,
        email: "same@example.com".to_string(),
    };
    let mut once = Public::default();
    assert!(copy_fields(&mut once, &source).is_ok());

    let mut twice = Public::default();
    assert!(copy_fields(&mut twice, &source).is_ok());
    assert!(copy_fields(&mut twice, &source).is_ok());
    assert_eq!(once, twice);
}

#[test]
fn test_source_is_never_mutated() {
    let source = Public {
        name: "kept".to_string(),
        age:  9,
    };
    let snapshot = source.clone();
    let mut destination = Public::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(source, snapshot);
    assert_eq!(destination, snapshot);
}
