use serde::{Deserialize, Serialize};

use super::hydraulics::{self, ColumnHydraulicsInput, HydraulicsError};
use super::material_balance::{self, MaterialBalanceError, MaterialBalanceInput};
use super::operating_line::{self, LineSample, OperatingLineInput};
use super::packing::{self, PackingSizingInput};
use super::transfer_units::{self, TransferUnitError, TransferUnitInput};

/// 설계 파이프라인에서 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ColumnDesignError {
    /// 물질수지 오류
    MaterialBalance(MaterialBalanceError),
    /// 전달단위 계산 오류
    TransferUnits(TransferUnitError),
    /// 수력학 사이징 오류
    Hydraulics(HydraulicsError),
}

impl std::fmt::Display for ColumnDesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnDesignError::MaterialBalance(e) => write!(f, "물질수지 오류: {e}"),
            ColumnDesignError::TransferUnits(e) => write!(f, "전달단위 계산 오류: {e}"),
            ColumnDesignError::Hydraulics(e) => write!(f, "수력학 사이징 오류: {e}"),
        }
    }
}

impl std::error::Error for ColumnDesignError {}

impl From<MaterialBalanceError> for ColumnDesignError {
    fn from(value: MaterialBalanceError) -> Self {
        ColumnDesignError::MaterialBalance(value)
    }
}

impl From<TransferUnitError> for ColumnDesignError {
    fn from(value: TransferUnitError) -> Self {
        ColumnDesignError::TransferUnits(value)
    }
}

impl From<HydraulicsError> for ColumnDesignError {
    fn from(value: HydraulicsError) -> Self {
        ColumnDesignError::Hydraulics(value)
    }
}

/// 흡수탑 설계 입력값. 기본값은 기준 시나리오다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDesignInput {
    /// 가스 몰유량 G [kmol/h]
    pub gas_flow_kmol_per_h: f64,
    /// 액체 몰유량 L [kmol/h]
    pub liquid_flow_kmol_per_h: f64,
    /// 가스 입구 몰분율
    pub y_in: f64,
    /// 가스 출구 몰분율
    pub y_out: f64,
    /// 액상 입구 몰분율
    pub x_in: f64,
    /// 평형선 기울기 m (헨리 법칙, y* = m·x)
    pub equilibrium_slope: f64,
    /// 총괄 기상 전달단위 높이 HOG [m]
    pub hog_m: f64,
    /// 가스 온도 [K]
    pub temperature_k: f64,
    /// 가스 압력 [Pa]
    pub pressure_pa: f64,
    /// 이상기체 상수 [J/(kmol·K)]
    pub gas_constant_j_per_kmol_k: f64,
    /// 목표 공탑 가스 유속 [m/s]
    pub target_velocity_m_per_s: f64,
    /// 충전물 비표면적 [m²/m³]
    pub packing_surface_m2_per_m3: f64,
    /// 충전층 공극률
    pub packing_void_fraction: f64,
    /// 충전물 벌크 밀도 [kg/m³]
    pub packing_bulk_density_kg_per_m3: f64,
    /// 단위 높이당 압력손실 [Pa/m]
    pub packing_dp_pa_per_m: f64,
    /// 충전물 호칭 크기 d_p [m]
    pub packing_element_size_m: f64,
}

impl Default for ColumnDesignInput {
    fn default() -> Self {
        Self {
            gas_flow_kmol_per_h: 1500.0,
            liquid_flow_kmol_per_h: 800.0,
            y_in: 0.05,
            y_out: 0.04,
            x_in: 0.0,
            equilibrium_slope: 1.5,
            hog_m: 1.2,
            temperature_k: 298.0,
            pressure_pa: 101_325.0,
            gas_constant_j_per_kmol_k: 8314.0,
            target_velocity_m_per_s: 2.5,
            packing_surface_m2_per_m3: 250.0,
            packing_void_fraction: 0.97,
            packing_bulk_density_kg_per_m3: 150.0,
            packing_dp_pa_per_m: 30.0,
            packing_element_size_m: 0.025,
        }
    }
}

/// 설계 결과. 입력에서 한 번에 파생되며 이후 수정되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDesignResult {
    /// 액상 출구 몰분율
    pub x_out: f64,
    /// 전달단위 수 NTU
    pub ntu: f64,
    /// 충전층 높이 Z [m]
    pub packed_height_m: f64,
    /// 가스 체적유량 Q_G [m³/s]
    pub volumetric_flow_m3_per_s: f64,
    /// 탑 단면적 [m²]
    pub column_area_m2: f64,
    /// 탑 직경 [m]
    pub column_diameter_m: f64,
    /// 충전층 체적 [m³]
    pub packed_volume_m3: f64,
    /// 충전물 질량 [kg]
    pub packing_mass_kg: f64,
    /// 총 압력손실 [Pa]
    pub total_pressure_drop_pa: f64,
    /// 권장 최소 충전물 크기 [m]
    pub min_packing_diameter_m: f64,
}

/// 물질수지 → 전달단위 → 수력학 → 충전물 순서로 설계를 수행한다.
///
/// 타당성 검증에 실패하면 부분 결과 없이 즉시 중단한다. 동일 입력에 대해
/// 항상 동일한 결과를 반환한다.
pub fn design_column(input: &ColumnDesignInput) -> Result<ColumnDesignResult, ColumnDesignError> {
    let x_out = material_balance::liquid_outlet_fraction(MaterialBalanceInput {
        gas_flow_kmol_per_h: input.gas_flow_kmol_per_h,
        liquid_flow_kmol_per_h: input.liquid_flow_kmol_per_h,
        y_in: input.y_in,
        y_out: input.y_out,
    })?;

    let transfer = transfer_units::size_transfer_units(TransferUnitInput {
        gas_flow_kmol_per_h: input.gas_flow_kmol_per_h,
        liquid_flow_kmol_per_h: input.liquid_flow_kmol_per_h,
        y_in: input.y_in,
        y_out: input.y_out,
        x_in: input.x_in,
        x_out,
        equilibrium_slope: input.equilibrium_slope,
        hog_m: input.hog_m,
    })?;

    let hydro = hydraulics::size_column(ColumnHydraulicsInput {
        gas_flow_kmol_per_h: input.gas_flow_kmol_per_h,
        temperature_k: input.temperature_k,
        pressure_pa: input.pressure_pa,
        gas_constant_j_per_kmol_k: input.gas_constant_j_per_kmol_k,
        target_velocity_m_per_s: input.target_velocity_m_per_s,
    })?;

    let pack = packing::size_packing(PackingSizingInput {
        column_area_m2: hydro.column_area_m2,
        packed_height_m: transfer.packed_height_m,
        column_diameter_m: hydro.column_diameter_m,
        bulk_density_kg_per_m3: input.packing_bulk_density_kg_per_m3,
        pressure_drop_pa_per_m: input.packing_dp_pa_per_m,
        element_size_m: input.packing_element_size_m,
    });

    Ok(ColumnDesignResult {
        x_out,
        ntu: transfer.ntu,
        packed_height_m: transfer.packed_height_m,
        volumetric_flow_m3_per_s: hydro.volumetric_flow_m3_per_s,
        column_area_m2: hydro.column_area_m2,
        column_diameter_m: hydro.column_diameter_m,
        packed_volume_m3: pack.packed_volume_m3,
        packing_mass_kg: pack.packing_mass_kg,
        total_pressure_drop_pa: pack.total_pressure_drop_pa,
        min_packing_diameter_m: pack.min_packing_diameter_m,
    })
}

/// 설계 입력으로부터 진단용 평형선/운전선 샘플을 생성한다.
///
/// 물질수지만 선행 수행하므로 타당성 검증과 무관하게 선도를 그려볼 수 있다.
pub fn sample_design_lines(
    input: &ColumnDesignInput,
    samples: usize,
) -> Result<Vec<LineSample>, ColumnDesignError> {
    let x_out = material_balance::liquid_outlet_fraction(MaterialBalanceInput {
        gas_flow_kmol_per_h: input.gas_flow_kmol_per_h,
        liquid_flow_kmol_per_h: input.liquid_flow_kmol_per_h,
        y_in: input.y_in,
        y_out: input.y_out,
    })?;

    Ok(operating_line::sample_lines(
        &OperatingLineInput {
            x_out,
            equilibrium_slope: input.equilibrium_slope,
            y_in: input.y_in,
            gas_flow_kmol_per_h: input.gas_flow_kmol_per_h,
            liquid_flow_kmol_per_h: input.liquid_flow_kmol_per_h,
        },
        samples,
    ))
}
