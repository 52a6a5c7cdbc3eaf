/// 전달단위(NTU) 계산 오류를 표현한다.
#[derive(Debug)]
pub enum TransferUnitError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
    /// 운전선이 평형선과 교차하거나 아래로 내려가는 경우. 흡수 조작이 물리적으로 불가능하다.
    OperatingLineCrossesEquilibrium,
}

impl std::fmt::Display for TransferUnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferUnitError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            TransferUnitError::OperatingLineCrossesEquilibrium => {
                write!(f, "설계 불가: 운전선이 평형선과 교차합니다.")
            }
        }
    }
}

impl std::error::Error for TransferUnitError {}

/// NTU 계산 입력값.
#[derive(Debug, Clone)]
pub struct TransferUnitInput {
    pub gas_flow_kmol_per_h: f64,
    pub liquid_flow_kmol_per_h: f64,
    pub y_in: f64,
    pub y_out: f64,
    pub x_in: f64,
    /// 물질수지에서 구한 액상 출구 몰분율
    pub x_out: f64,
    /// 평형선 기울기 m (y* = m·x)
    pub equilibrium_slope: f64,
    /// 총괄 기상 전달단위 높이 HOG [m]
    pub hog_m: f64,
}

/// NTU 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct TransferUnitResult {
    pub ntu: f64,
    pub packed_height_m: f64,
}

/// 탑 상/하단 구동력과 운전선 기울기 인자.
struct DrivingForce {
    numerator: f64,
    denominator: f64,
    slope_factor: f64,
}

fn driving_force(input: &TransferUnitInput) -> DrivingForce {
    DrivingForce {
        numerator: input.y_in - input.equilibrium_slope * input.x_in,
        denominator: input.y_out - input.equilibrium_slope * input.x_out,
        slope_factor: 1.0
            - input.equilibrium_slope * input.liquid_flow_kmol_per_h / input.gas_flow_kmol_per_h,
    }
}

/// 타당성 검증. 하단 구동력이 0 이하이거나 기울기 인자가 0이면 설계가 성립하지 않는다.
fn check_feasibility(df: &DrivingForce) -> Result<(), TransferUnitError> {
    if df.denominator <= 0.0 || df.slope_factor == 0.0 {
        return Err(TransferUnitError::OperatingLineCrossesEquilibrium);
    }
    Ok(())
}

/// 로그평균 구동력 비로 NTU와 충전층 높이를 계산한다.
///
/// NTU = ln(numerator/denominator) / (1 − m·L/G), Z = NTU·HOG
pub fn size_transfer_units(
    input: TransferUnitInput,
) -> Result<TransferUnitResult, TransferUnitError> {
    if input.gas_flow_kmol_per_h <= 0.0 || input.liquid_flow_kmol_per_h <= 0.0 {
        return Err(TransferUnitError::InvalidInput(
            "가스/액체 몰유량은 0보다 커야 합니다.",
        ));
    }
    if input.hog_m <= 0.0 {
        return Err(TransferUnitError::InvalidInput(
            "전달단위 높이(HOG)는 0보다 커야 합니다.",
        ));
    }

    let df = driving_force(&input);
    check_feasibility(&df)?;

    let ntu = (df.numerator / df.denominator).ln() / df.slope_factor;
    let packed_height_m = ntu * input.hog_m;

    Ok(TransferUnitResult {
        ntu,
        packed_height_m,
    })
}
