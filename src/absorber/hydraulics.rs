/// 수력학 사이징 오류를 표현한다.
#[derive(Debug)]
pub enum HydraulicsError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for HydraulicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydraulicsError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for HydraulicsError {}

/// 탑경 사이징 입력값.
#[derive(Debug, Clone)]
pub struct ColumnHydraulicsInput {
    pub gas_flow_kmol_per_h: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    /// 이상기체 상수 [J/(kmol·K)]
    pub gas_constant_j_per_kmol_k: f64,
    /// 공탑 기준 목표 가스 유속 [m/s]
    pub target_velocity_m_per_s: f64,
}

/// 탑경 사이징 결과.
#[derive(Debug, Clone, Copy)]
pub struct ColumnHydraulicsResult {
    pub volumetric_flow_m3_per_s: f64,
    pub column_area_m2: f64,
    pub column_diameter_m: f64,
}

/// 이상기체 법칙으로 체적유량을 구하고 목표 유속으로 탑 단면적과 직경을 계산한다.
pub fn size_column(input: ColumnHydraulicsInput) -> Result<ColumnHydraulicsResult, HydraulicsError> {
    if input.gas_flow_kmol_per_h <= 0.0 {
        return Err(HydraulicsError::InvalidInput(
            "가스 몰유량은 0보다 커야 합니다.",
        ));
    }
    if input.pressure_pa <= 0.0 || input.temperature_k <= 0.0 {
        return Err(HydraulicsError::InvalidInput(
            "압력과 온도는 0보다 커야 합니다.",
        ));
    }
    if input.gas_constant_j_per_kmol_k <= 0.0 {
        return Err(HydraulicsError::InvalidInput(
            "기체 상수는 0보다 커야 합니다.",
        ));
    }
    if input.target_velocity_m_per_s <= 0.0 {
        return Err(HydraulicsError::InvalidInput(
            "목표 가스 유속은 0보다 커야 합니다.",
        ));
    }

    let molar_flow_kmol_per_s = input.gas_flow_kmol_per_h / 3600.0;
    let volumetric_flow_m3_per_s = molar_flow_kmol_per_s
        * input.gas_constant_j_per_kmol_k
        * input.temperature_k
        / input.pressure_pa;
    let column_area_m2 = volumetric_flow_m3_per_s / input.target_velocity_m_per_s;
    let column_diameter_m = (4.0 * column_area_m2 / std::f64::consts::PI).sqrt();

    Ok(ColumnHydraulicsResult {
        volumetric_flow_m3_per_s,
        column_area_m2,
        column_diameter_m,
    })
}
