use super::*;

#[test]
fn wide_keywords_classify_wide() {
    for tag in ["wide", "landscape", "horizontal", "pano", "panorama"] {
        assert_eq!(classify(tag), AspectClass::Wide, "{tag}");
    }
}

#[test]
fn tall_keywords_classify_tall() {
    for tag in ["tall", "portrait", "vertical"] {
        assert_eq!(classify(tag), AspectClass::Tall, "{tag}");
    }
}

#[test]
fn unknown_and_empty_tags_default_to_square() {
    assert_eq!(classify(""), AspectClass::Square);
    assert_eq!(classify("square"), AspectClass::Square);
    assert_eq!(classify("golden-ratio"), AspectClass::Square);
}

#[test]
fn classify_is_case_insensitive() {
    assert_eq!(classify("WIDE"), AspectClass::Wide);
    assert_eq!(classify("Portrait"), AspectClass::Tall);
}

#[test]
fn wide_wins_when_both_keyword_sets_match() {
    // The wide check runs first, so a mixed tag resolves wide.
    assert_eq!(classify("Portrait-Wide"), AspectClass::Wide);
    assert_eq!(classify("vertical pano"), AspectClass::Wide);
}

#[test]
fn ratios_and_base_widths() {
    assert_eq!(AspectClass::Wide.ratio(), (3.0, 2.0));
    assert_eq!(AspectClass::Tall.ratio(), (4.0, 5.0));
    assert_eq!(AspectClass::Square.ratio(), (1.0, 1.0));
    assert_eq!(AspectClass::Wide.base_width(), 400.0);
    assert_eq!(AspectClass::Tall.base_width(), 240.0);
    assert_eq!(AspectClass::Square.base_width(), 300.0);
}

#[test]
fn default_treatment_is_auto() {
    assert_eq!(AspectTreatment::default(), AspectTreatment::Auto);
}
