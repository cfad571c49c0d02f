use super::*;

#[test]
fn linear_is_identity_inside_the_unit_interval() {
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(Ease::Linear.apply(t), t);
    }
}

#[test]
fn input_is_clamped() {
    for ease in [Ease::Linear, Ease::InQuad, Ease::InOutCubic] {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn curves_hit_both_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ] {
        assert!(ease.apply(0.0).abs() < 1e-12);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn in_quad_lags_and_out_quad_leads() {
    assert!(Ease::InQuad.apply(0.5) < 0.5);
    assert!(Ease::OutQuad.apply(0.5) > 0.5);
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
}
