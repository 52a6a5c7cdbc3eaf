//! 기준 시나리오와 타당성 게이트 회귀 테스트.
use absorption_column_toolbox::absorber::{
    design_column, ColumnDesignError, ColumnDesignInput, HydraulicsError, MaterialBalanceError,
    TransferUnitError,
};

#[test]
fn reference_scenario_values() {
    let input = ColumnDesignInput::default();
    let res = design_column(&input).expect("reference design should be feasible");

    assert!((res.x_out - 0.01875).abs() < 1e-12, "x_out={}", res.x_out);
    assert!((res.ntu - 7.187_938).abs() < 1e-4, "ntu={}", res.ntu);
    assert!(
        (res.packed_height_m - 8.625_526).abs() < 1e-4,
        "z={}",
        res.packed_height_m
    );
    assert!(
        (res.volumetric_flow_m3_per_s - 10.188_223).abs() < 1e-4,
        "q_g={}",
        res.volumetric_flow_m3_per_s
    );
    assert!(
        (res.column_area_m2 - 4.075_289).abs() < 1e-4,
        "a_col={}",
        res.column_area_m2
    );
    assert!(
        (res.column_diameter_m - 2.277_898).abs() < 1e-4,
        "d_col={}",
        res.column_diameter_m
    );
    assert!(
        (res.packed_volume_m3 - 35.151_512).abs() < 1e-3,
        "v={}",
        res.packed_volume_m3
    );
    assert!(
        (res.packing_mass_kg - 5272.727).abs() < 0.1,
        "mass={}",
        res.packing_mass_kg
    );
    assert!(
        (res.total_pressure_drop_pa - 258.766).abs() < 1e-2,
        "dp={}",
        res.total_pressure_drop_pa
    );
    assert!(
        (res.min_packing_diameter_m - 0.227_790).abs() < 1e-5,
        "d_min={}",
        res.min_packing_diameter_m
    );
}

#[test]
fn material_balance_closed_form() {
    let mut input = ColumnDesignInput::default();
    input.gas_flow_kmol_per_h = 2000.0;
    input.liquid_flow_kmol_per_h = 900.0;
    input.y_in = 0.08;
    input.y_out = 0.05;
    // 평형선을 낮춰 설계가 성립하게 한다.
    input.equilibrium_slope = 0.5;

    let res = design_column(&input).expect("design");
    let expected = 2000.0 * (0.08 - 0.05) / 900.0;
    assert!((res.x_out - expected).abs() < 1e-12);
}

#[test]
fn pipeline_is_deterministic() {
    let input = ColumnDesignInput::default();
    let first = design_column(&input).expect("first run");
    let second = design_column(&input).expect("second run");
    // 순수 계산이므로 비트 단위로 동일해야 한다.
    assert_eq!(first, second);
}

#[test]
fn infeasible_when_operating_line_crosses_equilibrium() {
    // 액체 유량을 줄이면 x_out이 커져 평형선이 운전선 위로 올라간다.
    let mut input = ColumnDesignInput::default();
    input.liquid_flow_kmol_per_h = 200.0;

    let err = design_column(&input).expect_err("design must be rejected");
    match err {
        ColumnDesignError::TransferUnits(TransferUnitError::OperatingLineCrossesEquilibrium) => {}
        other => panic!("expected operating-line error, got {other:?}"),
    }
}

#[test]
fn infeasible_when_slope_factor_is_zero() {
    // m·L/G = 1이 되도록 맞추면 기울기 인자가 정확히 0이 된다.
    let mut input = ColumnDesignInput::default();
    input.liquid_flow_kmol_per_h = 1000.0;

    let err = design_column(&input).expect_err("design must be rejected");
    match err {
        ColumnDesignError::TransferUnits(TransferUnitError::OperatingLineCrossesEquilibrium) => {}
        other => panic!("expected operating-line error, got {other:?}"),
    }
}

#[test]
fn zero_liquid_flow_is_rejected_before_arithmetic() {
    let mut input = ColumnDesignInput::default();
    input.liquid_flow_kmol_per_h = 0.0;

    let err = design_column(&input).expect_err("zero L must be rejected");
    match err {
        ColumnDesignError::MaterialBalance(MaterialBalanceError::InvalidInput(_)) => {}
        other => panic!("expected material-balance input error, got {other:?}"),
    }
}

#[test]
fn zero_gas_flow_is_rejected_before_arithmetic() {
    let mut input = ColumnDesignInput::default();
    input.gas_flow_kmol_per_h = 0.0;

    let err = design_column(&input).expect_err("zero G must be rejected");
    match err {
        ColumnDesignError::MaterialBalance(MaterialBalanceError::InvalidInput(_)) => {}
        other => panic!("expected material-balance input error, got {other:?}"),
    }
}

#[test]
fn zero_velocity_and_pressure_are_rejected() {
    let mut input = ColumnDesignInput::default();
    input.target_velocity_m_per_s = 0.0;
    let err = design_column(&input).expect_err("zero U_g must be rejected");
    match err {
        ColumnDesignError::Hydraulics(HydraulicsError::InvalidInput(_)) => {}
        other => panic!("expected hydraulics input error, got {other:?}"),
    }

    let mut input = ColumnDesignInput::default();
    input.pressure_pa = 0.0;
    let err = design_column(&input).expect_err("zero P must be rejected");
    match err {
        ColumnDesignError::Hydraulics(HydraulicsError::InvalidInput(_)) => {}
        other => panic!("expected hydraulics input error, got {other:?}"),
    }
}

#[test]
fn packing_diameter_uses_column_rule_for_small_elements() {
    // 기준 시나리오: 0.1·D(≈0.228 m)가 5·d_p(0.125 m)보다 크다.
    let input = ColumnDesignInput::default();
    let res = design_column(&input).expect("design");
    assert!(
        (res.min_packing_diameter_m - 0.1 * res.column_diameter_m).abs() < 1e-12,
        "expected wall-effect branch, got {}",
        res.min_packing_diameter_m
    );
}

#[test]
fn packing_diameter_uses_element_rule_for_large_elements() {
    let mut input = ColumnDesignInput::default();
    input.packing_element_size_m = 0.06;
    let res = design_column(&input).expect("design");
    assert!(
        (res.min_packing_diameter_m - 5.0 * 0.06).abs() < 1e-12,
        "expected element-size branch, got {}",
        res.min_packing_diameter_m
    );
}

#[test]
fn design_input_survives_toml_roundtrip() {
    let input = ColumnDesignInput::default();
    let text = toml::to_string(&input).expect("serialize");
    let back: ColumnDesignInput = toml::from_str(&text).expect("deserialize");
    assert_eq!(input, back);
}
