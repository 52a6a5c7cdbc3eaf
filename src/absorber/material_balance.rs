/// 물질수지 계산 오류를 표현한다.
#[derive(Debug)]
pub enum MaterialBalanceError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for MaterialBalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialBalanceError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for MaterialBalanceError {}

/// 기상 물질수지 입력값.
#[derive(Debug, Clone)]
pub struct MaterialBalanceInput {
    pub gas_flow_kmol_per_h: f64,
    pub liquid_flow_kmol_per_h: f64,
    pub y_in: f64,
    pub y_out: f64,
}

/// 기상 물질수지로 액상 출구 몰분율을 계산한다.
///
/// x_out = G·(y_in − y_out) / L
pub fn liquid_outlet_fraction(input: MaterialBalanceInput) -> Result<f64, MaterialBalanceError> {
    if input.gas_flow_kmol_per_h <= 0.0 {
        return Err(MaterialBalanceError::InvalidInput(
            "가스 몰유량은 0보다 커야 합니다.",
        ));
    }
    if input.liquid_flow_kmol_per_h <= 0.0 {
        return Err(MaterialBalanceError::InvalidInput(
            "액체 몰유량은 0보다 커야 합니다.",
        ));
    }

    Ok(input.gas_flow_kmol_per_h * (input.y_in - input.y_out) / input.liquid_flow_kmol_per_h)
}
