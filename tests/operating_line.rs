//! 평형선/운전선 샘플링 회귀 테스트.
use absorption_column_toolbox::absorber::{
    sample_design_lines, sample_lines, ColumnDesignInput, OperatingLineInput, DEFAULT_SAMPLES,
};

fn reference_line_input() -> OperatingLineInput {
    OperatingLineInput {
        x_out: 0.01875,
        equilibrium_slope: 1.5,
        y_in: 0.05,
        gas_flow_kmol_per_h: 1500.0,
        liquid_flow_kmol_per_h: 800.0,
    }
}

#[test]
fn default_sample_count_and_ordering() {
    let samples = sample_lines(&reference_line_input(), DEFAULT_SAMPLES);
    assert_eq!(samples.len(), 100);
    assert_eq!(samples[0].x, 0.0);
    assert!((samples[99].x - 0.01875).abs() < 1e-15);
    for pair in samples.windows(2) {
        assert!(pair[1].x >= pair[0].x, "x must be non-decreasing");
    }
}

#[test]
fn operating_line_hits_y_out_at_x_out() {
    let samples = sample_lines(&reference_line_input(), DEFAULT_SAMPLES);
    let last = samples.last().expect("samples");
    // 물질수지에 의해 운전선 끝점은 y_out과 일치한다.
    assert!((last.y_operating - 0.04).abs() < 1e-12, "y_op={}", last.y_operating);
}

#[test]
fn operating_line_starts_at_y_in() {
    let samples = sample_lines(&reference_line_input(), DEFAULT_SAMPLES);
    assert!((samples[0].y_operating - 0.05).abs() < 1e-15);
    assert_eq!(samples[0].y_equilibrium, 0.0);
}

#[test]
fn equilibrium_line_follows_slope() {
    let input = reference_line_input();
    for s in sample_lines(&input, 25) {
        assert!((s.y_equilibrium - input.equilibrium_slope * s.x).abs() < 1e-15);
    }
}

#[test]
fn degenerate_sample_counts() {
    let input = reference_line_input();
    assert!(sample_lines(&input, 0).is_empty());

    let single = sample_lines(&input, 1);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].x, 0.0);
}

#[test]
fn design_lines_use_material_balance_result() {
    let design = ColumnDesignInput::default();
    let samples = sample_design_lines(&design, DEFAULT_SAMPLES).expect("sampling");
    let last = samples.last().expect("samples");
    assert!((last.x - 0.01875).abs() < 1e-15);
    assert!((last.y_operating - design.y_out).abs() < 1e-12);
}

#[test]
fn design_lines_reject_zero_liquid_flow() {
    let mut design = ColumnDesignInput::default();
    design.liquid_flow_kmol_per_h = 0.0;
    assert!(sample_design_lines(&design, DEFAULT_SAMPLES).is_err());
}
