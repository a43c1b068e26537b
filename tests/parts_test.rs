// ABOUTME: Integration tests for the Style, Gearing, and Handlebar part enums
// ABOUTME: Covers string parsing, descriptive clauses, and serde representation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bicycle_core::errors::ModelError;
use bicycle_core::models::{Gearing, Handlebar, Style};

#[test]
fn test_style_parses_canonical_names() {
    for style in [Style::Road, Style::Touring, Style::Cruiser, Style::Hybrid] {
        let parsed: Style = style.name().parse().unwrap();
        assert_eq!(parsed, style);
    }
}

#[test]
fn test_unknown_style_is_rejected() {
    let err = "recumbent".parse::<Style>().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownStyle {
            value: "recumbent".to_owned()
        }
    );
}

#[test]
fn test_handlebar_parses_canonical_names() {
    for handlebar in [
        Handlebar::Riser,
        Handlebar::Cafe,
        Handlebar::Drop,
        Handlebar::Bullhorn,
    ] {
        let parsed: Handlebar = handlebar.name().parse().unwrap();
        assert_eq!(parsed, handlebar);
    }
}

#[test]
fn test_handlebar_accepts_accented_spelling() {
    let parsed: Handlebar = "café".parse().unwrap();
    assert_eq!(parsed, Handlebar::Cafe);
}

#[test]
fn test_unknown_handlebar_is_rejected() {
    let err = "aero".parse::<Handlebar>().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownHandlebar {
            value: "aero".to_owned()
        }
    );
}

#[test]
fn test_gearing_from_parts() {
    assert_eq!(Gearing::from_parts("fixed", None).unwrap(), Gearing::Fixed);
    assert_eq!(
        Gearing::from_parts("freewheel", Some(21)).unwrap(),
        Gearing::Freewheel { speeds: 21 }
    );
}

#[test]
fn test_gearing_from_parts_requires_speeds_for_freewheel() {
    let err = Gearing::from_parts("freewheel", None).unwrap_err();
    assert_eq!(err, ModelError::MissingSpeedCount);
}

#[test]
fn test_gearing_from_parts_rejects_unknown_name() {
    let err = Gearing::from_parts("belt", Some(3)).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownGearing {
            value: "belt".to_owned()
        }
    );
}

#[test]
fn test_style_descriptions_are_exhaustive() {
    assert_eq!(
        Style::Touring.description(),
        "A touring bike for long journeys"
    );
    assert_eq!(
        Style::Cruiser.description(),
        "A cruiser bike for casual trips around town"
    );
}

#[test]
fn test_handlebar_descriptions_are_exhaustive() {
    assert_eq!(
        Handlebar::Riser.description(),
        "and casual, riser handlebars"
    );
    assert_eq!(
        Handlebar::Bullhorn.description(),
        "and powerful bullhorn handlebars"
    );
}

#[test]
fn test_gearing_serializes_with_external_tag() {
    let fixed = serde_json::to_value(Gearing::Fixed).unwrap();
    assert_eq!(fixed, serde_json::json!("fixed"));

    let freewheel = serde_json::to_value(Gearing::Freewheel { speeds: 21 }).unwrap();
    assert_eq!(freewheel, serde_json::json!({ "freewheel": { "speeds": 21 } }));
}
