use crate::flags::Flags;

#[test]
fn default_flags_encode_to_empty_string() {
    assert_eq!(Flags::default().encode(), "");
}

#[test]
fn individual_flags() {
    assert_eq!(
        Flags {
            global: true,
            ..Flags::default()
        }
        .encode(),
        "g"
    );
    assert_eq!(
        Flags {
            ignore_case: true,
            ..Flags::default()
        }
        .encode(),
        "i"
    );
    assert_eq!(
        Flags {
            multiline: true,
            ..Flags::default()
        }
        .encode(),
        "m"
    );
    assert_eq!(
        Flags {
            has_indices: true,
            ..Flags::default()
        }
        .encode(),
        "d"
    );
    assert_eq!(
        Flags {
            sticky: true,
            ..Flags::default()
        }
        .encode(),
        "y"
    );
}

#[test]
fn flags_emit_in_canonical_order() {
    let all = Flags {
        sticky: true,
        has_indices: true,
        multiline: true,
        ignore_case: true,
        global: true,
    };
    assert_eq!(all.encode(), "gimdy");

    let some = Flags {
        sticky: true,
        global: true,
        ..Flags::default()
    };
    assert_eq!(some.encode(), "gy");
}

#[test]
fn display_matches_encode() {
    let flags = Flags {
        ignore_case: true,
        multiline: true,
        ..Flags::default()
    };
    assert_eq!(flags.to_string(), "im");
}
