use crate::absorber::{ColumnDesignInput, ColumnDesignResult};
use crate::i18n::{keys, Translator};

/// 설계 입력/결과를 보고서 라인 목록으로 변환한다.
/// CLI와 GUI가 같은 본문을 공유하도록 출력 매체와 분리해 둔다.
pub fn report_lines(
    input: &ColumnDesignInput,
    result: &ColumnDesignResult,
    tr: &Translator,
) -> Vec<String> {
    vec![
        tr.t(keys::REPORT_HEADER).to_string(),
        format!(
            "{} {} kmol/h",
            tr.t(keys::REPORT_GAS_FLOW),
            input.gas_flow_kmol_per_h
        ),
        format!(
            "{} {} kmol/h",
            tr.t(keys::REPORT_LIQUID_FLOW),
            input.liquid_flow_kmol_per_h
        ),
        format!(
            "{} {:.2} m³/s",
            tr.t(keys::REPORT_VOLUMETRIC_FLOW),
            result.volumetric_flow_m3_per_s
        ),
        format!(
            "{} {:.2} m/s",
            tr.t(keys::REPORT_TARGET_VELOCITY),
            input.target_velocity_m_per_s
        ),
        format!(
            "{} {:.2} m²",
            tr.t(keys::REPORT_COLUMN_AREA),
            result.column_area_m2
        ),
        format!(
            "{} {:.2} m",
            tr.t(keys::REPORT_COLUMN_DIAMETER),
            result.column_diameter_m
        ),
        format!(
            "{} {:.2} m",
            tr.t(keys::REPORT_MIN_PACKING_DIAMETER),
            result.min_packing_diameter_m
        ),
        format!("{} {:.4}", tr.t(keys::REPORT_X_OUT), result.x_out),
        format!("{} {:.2}", tr.t(keys::REPORT_NTU), result.ntu),
        format!(
            "{} {:.2} m",
            tr.t(keys::REPORT_PACKED_HEIGHT),
            result.packed_height_m
        ),
        format!(
            "{} {:.2} m³",
            tr.t(keys::REPORT_PACKED_VOLUME),
            result.packed_volume_m3
        ),
        format!(
            "{} {:.2} kg",
            tr.t(keys::REPORT_PACKING_MASS),
            result.packing_mass_kg
        ),
        format!(
            "{} {:.1} Pa",
            tr.t(keys::REPORT_TOTAL_DP),
            result.total_pressure_drop_pa
        ),
        tr.t(keys::REPORT_FOOTER).to_string(),
    ]
}
